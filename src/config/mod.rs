use serde::Deserialize;
use std::env;

/// Default OneSignal REST endpoint. Overridable via `ONESIGNAL_API_URL`
/// so tests can point the dispatcher at a stubbed upstream.
pub const ONESIGNAL_API_URL: &str = "https://onesignal.com/api/v1/notifications";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub onesignal: OneSignalConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OneSignalConfig {
    pub api_key: String,
    pub app_id: String,
    pub api_url: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// The two OneSignal secrets are deliberately allowed to be absent here:
    /// a missing secret is reported per request as a 500 configuration
    /// error, not as a startup failure.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        AppConfig {
            port: get_env("PORT", "8080").parse().unwrap_or(8080),
            onesignal: OneSignalConfig {
                api_key: get_env("ONESIGNAL_API_KEY", ""),
                app_id: get_env("ONESIGNAL_APP_ID", ""),
                api_url: get_env("ONESIGNAL_API_URL", ONESIGNAL_API_URL),
            },
        }
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
