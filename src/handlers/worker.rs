use axum::{http::StatusCode, response::IntoResponse};

/// Service worker shim registered by the web client. Chains the OneSignal
/// SDK worker and the application worker, and relays SKIP_WAITING.
const SERVICE_WORKER_JS: &str = include_str!("../../web/onesignal_flutter_sw.js");

pub async fn service_worker() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/javascript; charset=utf-8")],
        SERVICE_WORKER_JS,
    )
}
