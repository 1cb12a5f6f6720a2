// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Built-in activity seed loaded at startup.

use crate::models::Activity;

/// The activities the school offers when no seed file is configured.
pub fn default_activities() -> Vec<(String, Activity)> {
    [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Train and play matches against other schools",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["liam@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Improve your serve and play singles and doubles",
                "Wednesdays, 3:30 PM - 5:00 PM",
                10,
                &["ava@mergington.edu"],
            ),
        ),
        (
            "Art Studio",
            Activity::new(
                "Explore painting, drawing and sculpture",
                "Mondays, 3:30 PM - 5:00 PM",
                15,
                &["isabella@mergington.edu"],
            ),
        ),
        (
            "Music Band",
            Activity::new(
                "Rehearse and perform with the school band",
                "Thursdays, 3:30 PM - 5:00 PM",
                25,
                &["noah@mergington.edu", "lucas@mergington.edu"],
            ),
        ),
        (
            "Math Olympiad",
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Wednesdays, 4:00 PM - 5:00 PM",
                16,
                &["ethan@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                14,
                &["amelia@mergington.edu", "james@mergington.edu"],
            ),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_string(), activity))
    .collect()
}
