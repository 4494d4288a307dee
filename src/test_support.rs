use std::sync::{Arc, OnceLock};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::api::{self, router::App};
use crate::core::{config::Settings, state::AppState};
use crate::repositories::items::ItemStore;

pub(crate) struct TestContext {
    pub(crate) state: AppState,
    pub(crate) app: App,
    _guard: OwnedMutexGuard<()>,
}

/// Serializes tests that read or write process environment variables.
pub(crate) async fn env_lock() -> OwnedMutexGuard<()> {
    static LOCK: OnceLock<Arc<Mutex<()>>> = OnceLock::new();
    let lock = LOCK.get_or_init(|| Arc::new(Mutex::new(()))).clone();
    lock.lock_owned().await
}

pub(crate) fn set_test_env() {
    std::env::set_var("ITEMS_ENV", "test");
    std::env::set_var("PROMETHEUS_ENABLED", "0");
    std::env::remove_var("ENVIRONMENT");
    std::env::remove_var("PROJECT_NAME");
    std::env::remove_var("BACKEND_CORS_ORIGINS");
    std::env::remove_var("ITEMS_HOST");
    std::env::remove_var("ITEMS_PORT");
    std::env::remove_var("ITEMS_SEED");
    std::env::remove_var("ITEMS_LOG_JSON");
}

pub(crate) async fn setup_test_context() -> TestContext {
    let guard = env_lock().await;
    set_test_env();

    let settings = Settings::load().expect("settings");
    let state = AppState::new(settings, ItemStore::seeded());
    let app = api::router::app(state.clone());

    TestContext { state, app, _guard: guard }
}

pub(crate) fn json_request(
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    if let Some(body) = body {
        let bytes = serde_json::to_vec(&body).expect("serialize body");
        builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(bytes))
            .expect("request body")
    } else {
        builder.body(Body::empty()).expect("request body")
    }
}

pub(crate) fn raw_request(method: Method, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request body")
}

pub(crate) async fn read_json(response: axum::response::Response<Body>) -> serde_json::Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("response body");
    serde_json::from_slice(&body).unwrap_or_else(|err| {
        let body_text = String::from_utf8_lossy(&body);
        panic!("json parse: {err}; body: {body_text}");
    })
}

pub(crate) async fn read_text(response: axum::response::Response<Body>) -> String {
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("response body");
    String::from_utf8_lossy(&body).into_owned()
}
