// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Mergington Activities: extracurricular signup service
//!
//! This crate provides the backend API that lists a school's extracurricular
//! activities and lets students sign up for or drop them.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;

use config::Config;
use services::ActivityDirectory;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub directory: ActivityDirectory,
}
