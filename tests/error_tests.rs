// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP mapping of application errors.

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use ecotrail_tracker::error::AppError;
use ecotrail_tracker::models::CatalogError;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_missing_session_redirects_to_login() {
    let response = AppError::MissingSession.into_response();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn test_empty_input_is_no_content() {
    let response = AppError::EmptyInput.into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_unknown_category_is_bad_request() {
    let response = AppError::UnknownCategory("souvenirs".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "unknown_category");
    assert_eq!(body["details"], "souvenirs");
}

#[tokio::test]
async fn test_not_found() {
    let response = AppError::NotFound("location 42".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "not_found");
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let response = AppError::Internal(anyhow::anyhow!("disk on fire")).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "internal_error");
    assert!(body.get("details").is_none());
}

#[test]
fn test_catalog_errors_convert() {
    let unknown: AppError = CatalogError::UnknownCategory("beach".to_string()).into();
    assert!(matches!(unknown, AppError::UnknownCategory(c) if c == "beach"));

    let duplicate: AppError = CatalogError::DuplicateId(3).into();
    assert!(matches!(duplicate, AppError::Internal(_)));
}
