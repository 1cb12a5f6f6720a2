// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory activity directory: listing, enrollment and withdrawal.

use crate::models::{Activity, ActivityListing};
use crate::seed;
use dashmap::DashMap;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Registry of activities keyed by their exact name.
///
/// The set of activities is fixed at construction; only rosters change.
/// Each mutation holds the activity's entry guard across its membership
/// check and its write, so check-and-mutate is atomic per activity.
#[derive(Debug, Default)]
pub struct ActivityDirectory {
    activities: DashMap<String, Activity>,
    /// Names in seed order, for listing.
    order: Vec<String>,
}

impl ActivityDirectory {
    /// Build a directory from `(name, activity)` pairs.
    ///
    /// A repeated name replaces the earlier activity but keeps its position.
    pub fn new(activities: impl IntoIterator<Item = (String, Activity)>) -> Self {
        let map = DashMap::new();
        let mut order = Vec::new();
        for (name, activity) in activities {
            if map.insert(name.clone(), activity).is_none() {
                order.push(name);
            }
        }

        Self {
            activities: map,
            order,
        }
    }

    /// Directory holding the built-in seed.
    pub fn seeded() -> Self {
        Self::new(seed::default_activities())
    }

    /// Load a seed from a JSON file shaped like the `GET /activities` body.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| DirectoryError::Io(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load a seed from a JSON string, validating every roster.
    ///
    /// Activities keep the order they appear in the document.
    pub fn load_from_json(json_data: &str) -> Result<Self, DirectoryError> {
        let activities: ActivityListing =
            serde_json::from_str(json_data).map_err(|e| DirectoryError::Parse(e.to_string()))?;

        let mut names = HashSet::new();
        for (name, activity) in activities.iter() {
            if !names.insert(name.as_str()) {
                return Err(DirectoryError::InvalidSeed(format!(
                    "duplicate activity {name}"
                )));
            }
            validate_seed_entry(name, activity)?;
        }

        tracing::info!(count = activities.len(), "Loaded activity seed");
        Ok(Self::new(activities))
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Snapshot of every activity in seed order.
    pub fn list_activities(&self) -> ActivityListing {
        self.order
            .iter()
            .filter_map(|name| {
                self.activities
                    .get(name)
                    .map(|entry| (name.clone(), entry.value().clone()))
            })
            .collect()
    }

    /// Snapshot of a single activity.
    pub fn get(&self, activity_name: &str) -> Option<Activity> {
        self.activities
            .get(activity_name)
            .map(|entry| entry.value().clone())
    }

    /// Add `email` to the roster of `activity_name`.
    ///
    /// Capacity is reported through `max_participants` but not enforced.
    pub fn enroll(&self, activity_name: &str, email: &str) -> Result<String, DirectoryError> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| DirectoryError::ActivityNotFound(activity_name.to_string()))?;

        if activity.has_participant(email) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        if activity.spots_left() == 0 {
            tracing::warn!(
                activity = %activity_name,
                max_participants = activity.max_participants,
                "Enrolling past advertised capacity"
            );
        }
        activity.participants.push(email.to_string());

        Ok(format!("Signed up {email} for {activity_name}"))
    }

    /// Remove `email` from the roster of `activity_name`.
    pub fn withdraw(&self, activity_name: &str, email: &str) -> Result<String, DirectoryError> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| DirectoryError::ActivityNotFound(activity_name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| DirectoryError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);

        Ok(format!("Unregistered {email} from {activity_name}"))
    }
}

fn validate_seed_entry(name: &str, activity: &Activity) -> Result<(), DirectoryError> {
    let invalid = |reason: &str| DirectoryError::InvalidSeed(format!("{name}: {reason}"));

    if name.trim().is_empty() {
        return Err(DirectoryError::InvalidSeed(
            "activity name must not be empty".to_string(),
        ));
    }
    if activity.max_participants == 0 {
        return Err(invalid("max_participants must be positive"));
    }

    let mut seen = HashSet::new();
    for email in &activity.participants {
        if email.trim().is_empty() {
            return Err(invalid("participant email must not be empty"));
        }
        if !seen.insert(email.as_str()) {
            return Err(invalid(&format!("duplicate participant {email}")));
        }
    }

    Ok(())
}

/// Errors from directory operations.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Activity not found: {0}")]
    ActivityNotFound(String),

    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },

    #[error("{email} is not registered for {activity}")]
    NotRegistered { activity: String, email: String },

    #[error("Failed to read seed file: {0}")]
    Io(String),

    #[error("Failed to parse seed JSON: {0}")]
    Parse(String),

    #[error("Invalid seed entry: {0}")]
    InvalidSeed(String),
}
