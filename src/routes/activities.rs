// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity listing and roster routes.

use crate::error::{AppError, Result};
use crate::models::ActivityListing;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}/signup", post(signup))
        .route("/activities/{activity_name}/unregister", post(unregister))
}

/// Acknowledgement for a roster change.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/generated/")
)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Deserialize)]
struct EmailQuery {
    email: Option<String>,
}

impl EmailQuery {
    /// The email exactly as given; only a missing or empty value is rejected.
    fn into_email(self) -> Result<String> {
        self.email
            .filter(|email| !email.is_empty())
            .ok_or_else(|| AppError::BadRequest("Email is required".to_string()))
    }
}

/// List every activity with its current roster.
async fn list_activities(State(state): State<Arc<AppState>>) -> Json<ActivityListing> {
    Json(state.directory.list_activities())
}

/// Sign a student up for an activity.
async fn signup(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<MessageResponse>> {
    let email = params.into_email()?;

    let message = state.directory.enroll(&activity_name, &email)?;

    tracing::info!(activity = %activity_name, email = %email, "Student signed up");
    Ok(Json(MessageResponse { message }))
}

/// Remove a student from an activity.
async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<MessageResponse>> {
    let email = params.into_email()?;

    let message = state.directory.withdraw(&activity_name, &email)?;

    tracing::info!(activity = %activity_name, email = %email, "Student unregistered");
    Ok(Json(MessageResponse { message }))
}
