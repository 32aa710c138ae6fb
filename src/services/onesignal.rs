use super::ProviderError;
use crate::config::OneSignalConfig;
use crate::models::NotificationRequest;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Heading used when the caller supplies no title.
const DEFAULT_TITLE: &str = "Orbit";

/// URL opened when the notification is clicked.
const WEB_URL: &str = "/";

pub struct OneSignalClient {
    config: OneSignalConfig,
    client: Client,
}

/// Request body for the OneSignal create-notification call.
#[derive(Debug, Serialize)]
pub struct NotificationPayload {
    app_id: String,
    include_player_ids: Vec<String>,
    headings: LocalizedText,
    contents: LocalizedText,
    data: Map<String, Value>,
    web_url: String,
}

#[derive(Debug, Serialize)]
struct LocalizedText {
    en: String,
}

/// Subset of the OneSignal create-notification response we care about.
/// Unknown fields are ignored; `id` can be absent on partial failures.
#[derive(Debug, Deserialize)]
pub struct DeliveryReceipt {
    pub id: Option<String>,
    #[serde(default)]
    pub recipients: Option<u64>,
}

impl NotificationPayload {
    fn new(app_id: &str, request: &NotificationRequest) -> Self {
        let title = request
            .title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Self {
            app_id: app_id.to_string(),
            include_player_ids: request.player_ids.clone(),
            headings: LocalizedText { en: title },
            contents: LocalizedText {
                en: request.message.clone(),
            },
            data: request.data.clone().unwrap_or_default(),
            web_url: WEB_URL.to_string(),
        }
    }
}

impl OneSignalClient {
    pub fn new(config: OneSignalConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Send one push notification. A single best-effort attempt: no retry,
    /// no timeout override.
    pub async fn send(
        &self,
        request: &NotificationRequest,
    ) -> Result<DeliveryReceipt, ProviderError> {
        if self.config.api_key.is_empty() || self.config.app_id.is_empty() {
            tracing::error!("Missing ONESIGNAL_API_KEY or ONESIGNAL_APP_ID environment variables");
            return Err(ProviderError::Configuration(
                "OneSignal credentials are not configured".to_string(),
            ));
        }

        let payload = NotificationPayload::new(&self.config.app_id, request);

        let response = self
            .client
            .post(&self.config.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Basic {}", self.config.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to reach OneSignal");
                ProviderError::Connection(format!("Failed to reach OneSignal: {}", e))
            })?;

        let status = response.status();
        let body: Value = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse OneSignal response");
            ProviderError::InvalidResponse(format!("Failed to parse OneSignal response: {}", e))
        })?;

        if !status.is_success() {
            tracing::error!(status = %status, body = %body, "OneSignal API error");
            return Err(ProviderError::Api { status, body });
        }

        let receipt: DeliveryReceipt = serde_json::from_value(body).map_err(|e| {
            ProviderError::InvalidResponse(format!("Unexpected OneSignal response shape: {}", e))
        })?;

        tracing::info!(
            notification_id = receipt.id.as_deref().unwrap_or("-"),
            "Notification sent successfully"
        );

        Ok(receipt)
    }
}
