#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use bookshelf_core::id::SequentialIdGenerator;
use bookshelf_core::service::BookService;
use bookshelf_core::store::{BookStore, InMemoryBookStore};
use http_body_util::BodyExt;
use tower::ServiceExt;

use bookshelf_api::config::{LogFormat, ServerConfig};
use bookshelf_api::router::build_app_router;
use bookshelf_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        database_url: String::new(),
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router over the given store, with
/// predictable sequential ids.
pub fn build_test_app(store: Arc<dyn BookStore>) -> Router {
    let service = BookService::new(store, Arc::new(SequentialIdGenerator::default()));
    build_app_router(AppState {
        service: Arc::new(service),
        config: Arc::new(test_config()),
    })
}

/// A fresh app plus a handle on its in-memory store.
pub fn test_app() -> (Router, Arc<InMemoryBookStore>) {
    let store = Arc::new(InMemoryBookStore::new());
    (build_test_app(store.clone()), store)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: &Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn put_json(app: &Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Body::from(json.to_string())).await
}

pub async fn post_raw(app: &Router, uri: &str, body: &'static str) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body)).await
}

pub async fn put_raw(app: &Router, uri: &str, body: &'static str) -> Response<Body> {
    send(app, Method::PUT, uri, Body::from(body)).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a book through the API and return its id.
pub async fn create_book(app: &Router, title: &str) -> String {
    let response = post_json(
        app,
        "/api/v1/books",
        serde_json::json!({
            "title": title,
            "author": format!("Author of {title}"),
            "publisher": format!("Publisher of {title}"),
            "publishDate": format!("Date of {title}"),
            "status": "CheckedIn",
            "rating": 1,
        }),
    )
    .await;
    assert_eq!(response.status(), 200, "create_book({title}) failed");
    body_json(response).await["book"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}
