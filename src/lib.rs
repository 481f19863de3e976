// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! EcoTrail Tracker: sustainable travel in Impasug-ong, Bukidnon
//!
//! This crate serves the eco-location catalog, the dashboard and map view
//! models, and a mock sign-in that gates the protected pages.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::{Catalog, SessionRegistry};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    pub sessions: SessionRegistry,
}
