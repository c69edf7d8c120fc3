//! Router-level tests driving the full application with in-memory requests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::path::Path;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::server::{router, state::AppState};


/// Lowest cost bcrypt accepts, keeps tests fast.
const TEST_BCRYPT_COST: u32 = 4;

async fn test_context() -> TestContext {
    TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap()
}

fn test_app(test: &TestContext, upload_dir: &Path) -> Router {
    let db = test.db.clone().unwrap();
    let state = AppState::new(db, upload_dir.to_path_buf(), TEST_BCRYPT_COST);

    router::app(state).layer(SessionManagerLayer::new(MemoryStore::default()))
}

/// Response status, JSON body (`Null` when empty) and the session cookie, if one was set.
struct TestResponse {
    status: StatusCode,
    body: Value,
    cookie: Option<String>,
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        body,
        cookie,
    }
}

fn json_request(method: &str, uri: &str, body: Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: &str, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::empty()).unwrap()
}

async fn register(app: &Router, path: &str, email: &str) -> TestResponse {
    let body = json!({
        "name": "Amira",
        "email": email,
        "password": "hunter22",
        "phone": "0612345678"
    });

    send(app, json_request("POST", path, body, None)).await
}

/// Registers a client and logs in, returning the session cookie.
async fn logged_in_client(app: &Router, email: &str) -> String {
    let registered = register(app, "/api/auth/register", email).await;
    assert_eq!(registered.status, StatusCode::CREATED);

    let login = send(
        app,
        json_request(
            "POST",
            "/api/auth/login",
            json!({ "username": email, "password": "hunter22" }),
            None,
        ),
    )
    .await;
    assert_eq!(login.status, StatusCode::OK);

    login.cookie.unwrap()
}
