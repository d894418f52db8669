use std::sync::Arc;

use axum::Router;
use mindcare_client::ApiClient;
use mindcare_client::config::ClientConfig;
use mindcare_client::token::{MemoryTokenStore, Session};

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn client_for(base_url: &str) -> ApiClient {
    let config = ClientConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        ..ClientConfig::default()
    };
    ApiClient::new(&config, Session::new(Arc::new(MemoryTokenStore::new()))).unwrap()
}

pub fn envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "success": true, "message": "ok", "data": data })
}
