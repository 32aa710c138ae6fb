//! HTTP handlers: the notification dispatcher, the service worker shim,
//! and the health probe.

pub mod health;
pub mod notifications;
pub mod worker;

pub use health::health_check;
pub use notifications::send_notification;
pub use worker::service_worker;
