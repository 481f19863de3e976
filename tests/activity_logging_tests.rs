// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Logging eco-activities from the dashboard.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_app, get, login, post_json};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_log_activity_adds_points() {
    let (app, _) = create_test_app();
    let cookie = login(&app, "a@b.com").await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/dashboard/activities",
            json!({ "category": "conservation", "description": "Planted mangroves" }),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["activity"]["description"], "Planted mangroves");
    assert_eq!(body["activity"]["category"], "conservation");
    assert_eq!(body["activity"]["points"], 100);
    assert_eq!(body["activity"]["date"], "Today");
    assert!(body["activity"]["loggedAt"].is_string());
    assert_eq!(body["totalPoints"], 285);

    let dashboard = body_json(
        app.clone()
            .oneshot(get("/dashboard", Some(&cookie)))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(dashboard["totalPoints"], 285);
    assert_eq!(dashboard["activities"][0]["description"], "Planted mangroves");
    assert_eq!(dashboard["activities"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_log_activity_defaults_to_accommodation() {
    let (app, _) = create_test_app();
    let cookie = login(&app, "a@b.com").await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/dashboard/activities",
            json!({ "description": "Homestay in Impasug-ong" }),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["activity"]["points"], 50);
    assert_eq!(body["totalPoints"], 235);
}

#[tokio::test]
async fn test_blank_description_is_ignored() {
    let (app, _) = create_test_app();
    let cookie = login(&app, "a@b.com").await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/dashboard/activities",
            json!({ "category": "dining", "description": "   " }),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let dashboard = body_json(
        app.clone()
            .oneshot(get("/dashboard", Some(&cookie)))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(dashboard["totalPoints"], 185);
}

#[tokio::test]
async fn test_unknown_category_is_rejected() {
    let (app, _) = create_test_app();
    let cookie = login(&app, "a@b.com").await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/dashboard/activities",
            json!({ "category": "souvenirs", "description": "Bought a hat" }),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "unknown_category");
    assert_eq!(body["details"], "souvenirs");
}

#[tokio::test]
async fn test_logging_requires_session() {
    let (app, _) = create_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/dashboard/activities",
            json!({ "category": "dining", "description": "Lunch" }),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_activity_logs_are_per_session() {
    let (app, _) = create_test_app();
    let alice = login(&app, "alice@example.com").await;
    let bob = login(&app, "bob@example.com").await;

    app.clone()
        .oneshot(post_json(
            "/dashboard/activities",
            json!({ "category": "transport", "description": "Cycled to the falls" }),
            Some(&alice),
        ))
        .await
        .unwrap();

    let bob_dashboard = body_json(
        app.clone()
            .oneshot(get("/dashboard", Some(&bob)))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(bob_dashboard["totalPoints"], 185);

    let alice_dashboard = body_json(
        app.clone()
            .oneshot(get("/dashboard", Some(&alice)))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(alice_dashboard["totalPoints"], 200);
}
