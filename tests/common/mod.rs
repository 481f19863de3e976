// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, Response},
};
use ecotrail_tracker::config::Config;
use ecotrail_tracker::routes::create_router;
use ecotrail_tracker::services::{Catalog, SessionRegistry};
use ecotrail_tracker::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app with the built-in catalog.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let state = Arc::new(AppState {
        sessions: SessionRegistry::with_ttl_hours(config.session_ttl_hours),
        config,
        catalog: Catalog::builtin(),
    });

    (create_router(state.clone()), state)
}

/// Build a JSON POST request, optionally carrying a session cookie.
#[allow(dead_code)]
pub fn post_json(uri: &str, body: serde_json::Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Build a GET request, optionally carrying a session cookie.
#[allow(dead_code)]
pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// `name=value` of the session cookie set by a response, if any.
#[allow(dead_code)]
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("ecotrail_session="))
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

/// Sign in with `email` and return the session cookie pair.
#[allow(dead_code)]
pub async fn login(app: &axum::Router, email: &str) -> String {
    let response = app
        .clone()
        .oneshot(post_json(
            "/login",
            serde_json::json!({ "email": email, "password": "secret" }),
            None,
        ))
        .await
        .unwrap();
    session_cookie(&response).expect("login should set a session cookie")
}

/// Read a JSON response body.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
