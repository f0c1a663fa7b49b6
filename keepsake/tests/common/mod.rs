#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use tower::ServiceExt;

use keepsake::api::{create_router, AppState};
use keepsake::config::{Config, DatabaseConfig, ServerConfig, TreeConfig};
use keepsake::db::{Database, LibSqlBackend, StoreBackend};
use keepsake::services::FamilyTreeBuilder;

pub const TEST_KEY: &str = "test-key";

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            api_keys: vec![TEST_KEY.to_string()],
        },
        database: DatabaseConfig {
            url: ":memory:".to_string(),
            auth_token: None,
            local_path: None,
            sync_interval_secs: None,
        },
        tree: TreeConfig {
            default_depth: 3,
            max_depth_limit: 6,
        },
    }
}

pub async fn test_state() -> AppState {
    let config = test_config();
    let raw_db = Database::new(&config.database)
        .await
        .expect("test database should initialize");
    let backend = Arc::new(LibSqlBackend::new(raw_db));
    let db: Arc<dyn StoreBackend> = backend.clone();
    let tree = FamilyTreeBuilder::new(backend);
    AppState::new(config, db, tree)
}

pub async fn test_app() -> Router {
    create_router(test_state().await)
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("Authorization", format!("Bearer {TEST_KEY}"))
        .body(Body::empty())
        .expect("request should build")
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("Authorization", format!("Bearer {TEST_KEY}"))
        .body(Body::empty())
        .expect("request should build")
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Authorization", format!("Bearer {TEST_KEY}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

pub fn patch_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(uri)
        .header("Authorization", format!("Bearer {TEST_KEY}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

/// Create a profile through the API and return its id.
pub async fn create_profile(app: &Router, name: &str) -> String {
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/profiles",
            serde_json::json!({ "name": name }),
        ))
        .await
        .expect("request should succeed");
    let json = body_json(response).await;
    json["data"]["id"]
        .as_str()
        .expect("created profile should have an id")
        .to_string()
}

/// Connect two profiles through the API and return the connection id.
pub async fn connect_profiles(app: &Router, from: &str, to: &str, kind: &str) -> String {
    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/v1/profiles/{from}/connections"),
            serde_json::json!({ "toProfileId": to, "kind": kind }),
        ))
        .await
        .expect("request should succeed");
    let json = body_json(response).await;
    json["data"]["id"]
        .as_str()
        .expect("created connection should have an id")
        .to_string()
}
