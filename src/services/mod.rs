pub mod onesignal;

use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

pub use onesignal::{DeliveryReceipt, NotificationPayload, OneSignalClient};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("OneSignal API error ({status})")]
    Api { status: StatusCode, body: Value },
}
