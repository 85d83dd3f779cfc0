use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

use meridio_api::{app, AppState};
use meridio_core::remote::RemoteStatus;
use meridio_core::repository::OrderStore;
use meridio_order::{MockRemoteApi, OrderEngine, OrderProcessor};
use meridio_shared::{OrderStatus, Priority};
use meridio_store::{FileExportWriter, MemoryOrderStore};

fn test_app(store: Arc<dyn OrderStore>, export_dir: &std::path::Path) -> axum::Router {
    let writer = Arc::new(FileExportWriter::new(export_dir));
    let remote = Arc::new(MockRemoteApi::new(RemoteStatus::Success, 60));
    let engine = OrderEngine::new(writer, remote);
    let processor = Arc::new(OrderProcessor::new(engine, store));
    app(AppState { processor })
}

fn post_process(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/orders/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

struct FailingStore;

#[async_trait::async_trait]
impl OrderStore for FailingStore {
    async fn update_status(
        &self,
        _id: Uuid,
        _status: OrderStatus,
        _priority: Priority,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err("database offline".into())
    }
}

#[tokio::test]
async fn test_external_order_processed_and_recorded() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryOrderStore::new());
    let app = test_app(store.clone(), dir.path());

    let response = app
        .oneshot(post_process(json!({
            "kind": "EXTERNAL",
            "amount": 90,
            "user_id": "u1"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let order = read_json(response).await;
    assert_eq!(order["status"], "PROCESSED");
    assert_eq!(order["priority"], "LOW");

    let id = Uuid::parse_str(order["id"].as_str().unwrap()).unwrap();
    assert_eq!(
        store.recorded(id).await,
        Some((OrderStatus::Processed, Priority::Low))
    );
}

#[tokio::test]
async fn test_export_order_writes_csv_artifact() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryOrderStore::new());
    let app = test_app(store.clone(), dir.path());

    let response = app
        .oneshot(post_process(json!({
            "kind": "EXPORT",
            "amount": 200,
            "user_id": "u9"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let order = read_json(response).await;
    assert_eq!(order["status"], "EXPORTED");

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap())
        .collect();
    assert_eq!(entries.len(), 1);
    let name = entries[0].file_name().into_string().unwrap();
    assert!(name.starts_with("orders_EXPORT_u9_"));
    assert!(name.ends_with(".csv"));

    let contents = std::fs::read_to_string(entries[0].path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "ID,Type,Amount,Flag,Status,Priority");
    // The data row reflects the order as it was handed to the export step
    assert!(lines[1].ends_with(",EXPORT,200,false,NEW,LOW"));
    assert_eq!(lines[2], ",,,,Note,\"High value order\"");
}

#[tokio::test]
async fn test_unknown_kind_token_resolves_unknown_type() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryOrderStore::new());
    let app = test_app(store.clone(), dir.path());

    let response = app
        .oneshot(post_process(json!({
            "kind": "TYPE_D",
            "amount": 10,
            "user_id": "u1"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let order = read_json(response).await;
    assert_eq!(order["status"], "UNKNOWN_TYPE");

    // The fallback path produces no artifact
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_negative_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryOrderStore::new());
    let app = test_app(store, dir.path());

    let response = app
        .oneshot(post_process(json!({
            "kind": "INTERNAL",
            "amount": -5,
            "user_id": "u1"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"], "amount must not be negative");
}

#[tokio::test]
async fn test_storage_failure_reports_db_error() {
    let dir = TempDir::new().unwrap();
    let app = test_app(Arc::new(FailingStore), dir.path());

    let response = app
        .oneshot(post_process(json!({
            "kind": "INTERNAL",
            "amount": 300,
            "expedite": true,
            "user_id": "u1"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let order = read_json(response).await;
    assert_eq!(order["status"], "DB_ERROR");
    // The computed priority survives the storage failure
    assert_eq!(order["priority"], "HIGH");
}

#[tokio::test]
async fn test_health_probe() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryOrderStore::new());
    let app = test_app(store, dir.path());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}
