// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Eco map page and its GeoJSON feed.

mod common;

use axum::http::{header, StatusCode};
use common::{body_json, create_test_app, get, login};
use tower::ServiceExt;

#[tokio::test]
async fn test_map_defaults_to_all_locations() {
    let (app, _) = create_test_app();
    let cookie = login(&app, "a@b.com").await;

    let response = app
        .clone()
        .oneshot(get("/ecoMap", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["activeFilter"], "all");
    assert_eq!(body["markers"].as_array().unwrap().len(), 8);
    assert_eq!(body["zoom"], 12);
    assert_eq!(body["center"]["latitude"], 8.3056);
    assert_eq!(body["center"]["longitude"], 125.0139);
    assert_eq!(body["stats"]["locationsFound"], 8);
    assert_eq!(body["stats"]["totalSites"], 8);
    assert_eq!(body["stats"]["averageRating"], 4.5);
    assert_eq!(body["legend"].as_array().unwrap().len(), 7);
    assert_eq!(body["filters"].as_array().unwrap().len(), 8);
    assert_eq!(body["filters"][0]["active"], true);
}

#[tokio::test]
async fn test_map_filter_by_category() {
    let (app, _) = create_test_app();
    let cookie = login(&app, "a@b.com").await;

    let response = app
        .clone()
        .oneshot(get("/ecoMap?filter=recreation", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["activeFilter"], "recreation");

    let markers = body["markers"].as_array().unwrap();
    let names: Vec<&str> = markers
        .iter()
        .map(|m| m["popup"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Cedar Communal", "Atugan Swimming Pool"]);
    assert_eq!(markers[0]["icon"], "swimming-pool");
    assert_eq!(markers[0]["color"], "#1E90FF");

    // Aggregates still describe the whole catalog
    assert_eq!(body["stats"]["locationsFound"], 2);
    assert_eq!(body["stats"]["totalSites"], 8);
    assert_eq!(body["topRated"][0]["name"], "Mount Kitanglad Range");
    assert_eq!(body["topRated"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_map_bounds_follow_filtered_markers() {
    let (app, _) = create_test_app();
    let cookie = login(&app, "a@b.com").await;

    let response = app
        .clone()
        .oneshot(get("/ecoMap?filter=mountain", Some(&cookie)))
        .await
        .unwrap();
    let body = body_json(response).await;

    let bounds = &body["bounds"];
    assert_eq!(bounds["southWest"], bounds["northEast"]);
    assert_eq!(bounds["southWest"]["latitude"], 8.1184714);
}

#[tokio::test]
async fn test_map_unknown_filter_is_rejected() {
    let (app, _) = create_test_app();
    let cookie = login(&app, "a@b.com").await;

    let response = app
        .clone()
        .oneshot(get("/ecoMap?filter=beach", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "unknown_category");
    assert_eq!(body["details"], "beach");
}

#[tokio::test]
async fn test_nearby_business_is_the_map() {
    let (app, _) = create_test_app();
    let cookie = login(&app, "a@b.com").await;

    let map = body_json(
        app.clone()
            .oneshot(get("/ecoMap?filter=park", Some(&cookie)))
            .await
            .unwrap(),
    )
    .await;
    let nearby = body_json(
        app.clone()
            .oneshot(get("/nearbyBusiness?filter=park", Some(&cookie)))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(map, nearby);
}

#[tokio::test]
async fn test_geojson_feed() {
    let (app, _) = create_test_app();
    let cookie = login(&app, "a@b.com").await;

    let response = app
        .clone()
        .oneshot(get("/ecoMap/geojson?filter=cultural", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/geo+json"
    );

    let body = body_json(response).await;
    assert_eq!(body["type"], "FeatureCollection");
    let features = body["features"].as_array().unwrap();
    assert_eq!(features.len(), 1);
    assert_eq!(features[0]["id"], 7);
    assert_eq!(features[0]["properties"]["name"], "Cowboy Town");
    assert_eq!(features[0]["geometry"]["coordinates"][0], 124.9853276);
}

#[tokio::test]
async fn test_location_marker_lookup() {
    let (app, _) = create_test_app();
    let cookie = login(&app, "a@b.com").await;

    let response = app
        .clone()
        .oneshot(get("/ecoMap/locations/3", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], 3);
    assert_eq!(body["icon"], "mountain");
    assert_eq!(body["popup"]["stars"], 4);
    assert_eq!(body["popup"]["categoryLabel"], "Mountain");

    let response = app
        .clone()
        .oneshot(get("/ecoMap/locations/99", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(get("/ecoMap/locations/abc", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "bad_request");
}
