// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod business;
pub mod location;
pub mod page;
pub mod stats;
pub mod user;

pub use activity::{Activity, ActivityCategory, PointTable};
pub use business::{Business, BusinessCategory};
pub use location::{
    CategoryStyle, Coordinates, HexColor, Location, LocationCategory, LocationFilter, MarkerIcon,
};
pub use page::Page;
pub use stats::{Challenge, MapStats};
pub use user::{LoginForm, SignupForm, TravelerType, User};

/// Errors from catalog data and lookups.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid color tag (expected #RRGGBB): {0}")]
    InvalidColor(String),

    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse GeoJSON: {0}")]
    ParseError(String),

    #[error("Unsupported geometry type (expected Point)")]
    UnsupportedGeometry,

    #[error("Duplicate location id: {0}")]
    DuplicateId(u32),

    #[error("Invalid location {id}: {reason}")]
    InvalidLocation { id: u32, reason: String },
}
