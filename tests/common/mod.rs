// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{Request, Response},
};
use mergington_activities::config::Config;
use mergington_activities::routes::create_router;
use mergington_activities::services::ActivityDirectory;
use mergington_activities::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app backed by a freshly seeded directory.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        directory: ActivityDirectory::seeded(),
    });

    (create_router(state.clone()), state)
}

/// Percent-encode an activity name for use as a path segment.
#[allow(dead_code)]
pub fn activity_path(activity: &str, action: &str, email: &str) -> String {
    format!(
        "/activities/{}/{}?email={}",
        urlencoding::encode(activity),
        action,
        urlencoding::encode(email)
    )
}

/// Send a request through a clone of the router.
#[allow(dead_code)]
pub async fn send(app: &axum::Router, method: &str, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Read a JSON response body.
#[allow(dead_code)]
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Fetch `GET /activities` as JSON.
#[allow(dead_code)]
pub async fn list_activities(app: &axum::Router) -> serde_json::Value {
    json_body(send(app, "GET", "/activities").await).await
}

/// Participants of one activity from a fresh listing.
#[allow(dead_code)]
pub async fn participants(app: &axum::Router, activity: &str) -> Vec<String> {
    let listing = list_activities(app).await;
    serde_json::from_value(listing[activity]["participants"].clone()).unwrap()
}
