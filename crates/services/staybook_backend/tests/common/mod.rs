#![allow(dead_code)]

use axum::{body::Body, Router};
use http::{Request, StatusCode};
use serde_json::Value;
use staybook_backend::{api_router, app_state::AppState};
use staybook_common::{
    BackendStatus, BoxFuture, MemoryRowStore, Row, RowMatch, RowStore, RowStoreError,
};
use staybook_config::AppConfig;
use std::io;
use std::sync::Arc;
use tower::ServiceExt;

/// Row store whose reads and writes always fail, as an unreachable
/// spreadsheet would.
pub struct UnreachableRowStore;

fn unreachable_error(action: &str) -> RowStoreError {
    RowStoreError::backend(
        action.to_string(),
        io::Error::new(io::ErrorKind::ConnectionRefused, "spreadsheet unreachable"),
    )
}

impl RowStore for UnreachableRowStore {
    fn list_rows(&self, _sheet: &str) -> BoxFuture<'_, Vec<Row>, RowStoreError> {
        Box::pin(async { Err(unreachable_error("reading rows")) })
    }

    fn append_row(&self, _sheet: &str, _row: Row) -> BoxFuture<'_, (), RowStoreError> {
        Box::pin(async { Err(unreachable_error("appending a row")) })
    }

    fn delete_rows(&self, _sheet: &str, _matcher: RowMatch) -> BoxFuture<'_, usize, RowStoreError> {
        Box::pin(async { Err(unreachable_error("deleting rows")) })
    }

    fn ensure_sheet(&self, _sheet: &str, _headers: &[&str]) -> BoxFuture<'_, (), RowStoreError> {
        Box::pin(async { Ok(()) })
    }

    fn status(&self) -> BoxFuture<'_, BackendStatus, RowStoreError> {
        Box::pin(async { Err(unreachable_error("fetching spreadsheet metadata")) })
    }
}

pub fn config(seed_demo_data: bool) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        seed_demo_data,
        ..AppConfig::default()
    })
}

pub async fn router_with(row_store: Arc<dyn RowStore>, seed_demo_data: bool) -> Router {
    let state = AppState::builder(config(seed_demo_data))
        .with_row_store(row_store)
        .build()
        .await
        .unwrap();
    api_router(&state)
}

pub async fn demo_router() -> Router {
    router_with(Arc::new(MemoryRowStore::new()), true).await
}

pub async fn empty_router() -> Router {
    router_with(Arc::new(MemoryRowStore::new()), false).await
}

pub async fn failing_router() -> Router {
    router_with(Arc::new(UnreachableRowStore), false).await
}

/// Sends one request through the router and returns status and JSON body.
pub async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}

/// Sends a raw, possibly malformed, JSON body.
pub async fn send_raw(router: &Router, method: &str, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
