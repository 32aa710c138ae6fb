use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;
use crate::models::NotificationRequest;
use crate::startup::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<String>,
}

/// Dispatcher for `/`. Accepts any method so the ordered checks own the
/// full method/body contract: OPTIONS short-circuits for CORS preflight,
/// anything but POST is a 405, then validation failures win in order
/// before the single upstream attempt.
#[tracing::instrument(skip(state, body))]
pub async fn send_notification(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Response, AppError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    let json: Value = serde_json::from_slice(&body)
        .map_err(|_| AppError::BadRequest("Invalid JSON body".to_string()))?;

    let request = NotificationRequest::from_value(&json)?;

    let receipt = state.onesignal.send(&request).await?;

    Ok((
        StatusCode::OK,
        Json(SendNotificationResponse {
            success: true,
            notification_id: receipt.id,
        }),
    )
        .into_response())
}
