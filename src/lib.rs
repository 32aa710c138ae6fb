//! orbit-notifications: push notification dispatcher for Orbit.
//!
//! Hosts two things: an HTTP endpoint that forwards push requests to the
//! OneSignal REST API, and the static service worker shim the web client
//! registers for push delivery.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;
