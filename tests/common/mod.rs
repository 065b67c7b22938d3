#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode},
};
use serde_json::Value;
use todo_service::config::Transports;
use todo_service::db::{self, TodoStorage};
use todo_service::router::{TodoState, todo_router};
use tower::ServiceExt;

/// Router over a fresh single-connection in-memory database.
pub async fn app(transports: Transports) -> Router {
    let pool = db::connect("sqlite::memory:", 1)
        .await
        .expect("failed to open in-memory sqlite");
    let storage = TodoStorage::new(pool);
    storage.init_schema().await.expect("failed to init schema");
    todo_router(TodoState::new(storage), transports)
}

pub fn both() -> Transports {
    Transports {
        json: true,
        form: true,
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.expect("request failed")
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn body_string(resp: Response<Body>) -> String {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(body.to_vec()).expect("response body was not utf-8")
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let text = body_string(resp).await;
    serde_json::from_str(&text).expect("response body was not json")
}

pub async fn list(app: &Router) -> Value {
    let resp = send(app, empty_request("GET", "/todos/")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await
}
