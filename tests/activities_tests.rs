// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity listing tests.

use axum::http::StatusCode;

mod common;

#[tokio::test]
async fn test_get_activities() {
    let (app, _state) = common::create_test_app();

    let response = common::send(&app, "GET", "/activities").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::json_body(response).await;
    let activities = json.as_object().expect("listing is a JSON object");
    assert!(activities.contains_key("Chess Club"));
    assert!(activities.contains_key("Programming Class"));
    assert_eq!(activities.len(), 9);
}

#[tokio::test]
async fn test_activity_structure() {
    let (app, _state) = common::create_test_app();
    let json = common::list_activities(&app).await;

    for (name, details) in json.as_object().unwrap() {
        assert!(details["description"].is_string(), "{name}");
        assert!(details["schedule"].is_string(), "{name}");
        assert!(details["max_participants"].as_u64().unwrap() > 0, "{name}");
        assert!(details["participants"].is_array(), "{name}");
    }
}

#[tokio::test]
async fn test_activity_has_initial_participants() {
    let (app, _state) = common::create_test_app();

    let chess = common::participants(&app, "Chess Club").await;

    assert_eq!(chess.len(), 2);
    assert!(chess.contains(&"michael@mergington.edu".to_string()));
    assert!(chess.contains(&"daniel@mergington.edu".to_string()));
}

#[tokio::test]
async fn test_seeded_named_activities_present() {
    let (app, _state) = common::create_test_app();
    let json = common::list_activities(&app).await;

    for name in ["Art Studio", "Tennis Club", "Music Band"] {
        assert!(json.get(name).is_some(), "{name} missing");
    }
    let band = common::participants(&app, "Music Band").await;
    assert!(band.contains(&"noah@mergington.edu".to_string()));
}

#[tokio::test]
async fn test_health_reports_activity_count() {
    let (app, _state) = common::create_test_app();

    let response = common::send(&app, "GET", "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::json_body(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["activities"], 9);
}

#[tokio::test]
async fn test_activities_listed_in_seed_order() {
    let (app, _state) = common::create_test_app();

    let response = common::send(&app, "GET", "/activities").await;
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let body = std::str::from_utf8(&body).unwrap();

    let position = |name: &str| body.find(&format!("\"{name}\":")).unwrap();
    assert!(body.starts_with("{\"Chess Club\":"));
    assert!(position("Chess Club") < position("Programming Class"));
    assert!(position("Programming Class") < position("Art Studio"));
    assert!(position("Art Studio") < position("Debate Team"));
}
