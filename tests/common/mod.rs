use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use orbit_notifications::config::{AppConfig, OneSignalConfig};
use orbit_notifications::startup::Application;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the service with secrets present and an upstream URL that is
    /// never contacted. Enough for validation and method tests.
    pub async fn spawn() -> Self {
        Self::spawn_with(OneSignalConfig {
            api_key: "test-api-key".to_string(),
            app_id: "test-app-id".to_string(),
            api_url: "http://127.0.0.1:9/api/v1/notifications".to_string(),
        })
        .await
    }

    pub async fn spawn_with(onesignal: OneSignalConfig) -> Self {
        // Use random port for testing (port 0)
        let config = AppConfig { port: 0, onesignal };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address }
    }
}

/// Stand-in for the OneSignal REST API: records every request body it
/// receives and answers with a canned status and body.
pub struct OneSignalStub {
    pub url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: Value,
    requests: Arc<Mutex<Vec<Value>>>,
}

async fn record_notification(
    State(state): State<StubState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.requests.lock().unwrap().push(body);
    (state.status, Json(state.body.clone()))
}

impl OneSignalStub {
    pub async fn start(status: StatusCode, body: Value) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status,
            body,
            requests: Arc::clone(&requests),
        };

        let router = Router::new()
            .route("/api/v1/notifications", post(record_notification))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub listener");
        let port = listener.local_addr().expect("stub local addr").port();

        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Self {
            url: format!("http://127.0.0.1:{}/api/v1/notifications", port),
            requests,
        }
    }

    pub fn received(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

/// URL of a port that is bound and immediately released, so connecting to
/// it fails at the transport level.
pub async fn unreachable_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind throwaway listener");
    let port = listener.local_addr().expect("throwaway local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/api/v1/notifications", port)
}
