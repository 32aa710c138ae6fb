use serde_json::{Map, Value};
use thiserror::Error;

/// Validation failures for an incoming notification request. The display
/// strings are the wire error messages returned to the caller.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    #[error("playerIds array is required")]
    MissingPlayerIds,

    #[error("message is required")]
    MissingMessage,
}

/// One incoming push request. Built per call from the raw JSON body and
/// discarded when the call completes; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    pub player_ids: Vec<String>,
    pub title: Option<String>,
    pub message: String,
    pub data: Option<Map<String, Value>>,
}

impl NotificationRequest {
    /// Ordered validation, first failure wins: `playerIds` must be a
    /// non-empty array of strings, then `message` must be a non-empty
    /// string. `title` and `data` are optional.
    pub fn from_value(body: &Value) -> Result<Self, InvalidRequest> {
        let player_ids = match body.get("playerIds") {
            Some(Value::Array(ids)) if !ids.is_empty() => ids
                .iter()
                .map(|id| {
                    id.as_str()
                        .map(str::to_string)
                        .ok_or(InvalidRequest::MissingPlayerIds)
                })
                .collect::<Result<Vec<_>, _>>()?,
            _ => return Err(InvalidRequest::MissingPlayerIds),
        };

        let message = match body.get("message") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            _ => return Err(InvalidRequest::MissingMessage),
        };

        let title = body.get("title").and_then(Value::as_str).map(str::to_string);
        let data = body.get("data").and_then(Value::as_object).cloned();

        Ok(Self {
            player_ids,
            title,
            message,
            data,
        })
    }
}
