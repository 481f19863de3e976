// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Green business listings shown on the dashboard.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Maximum eco rating, in stars.
pub const MAX_ECO_STARS: u8 = 5;

/// Kind of business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum BusinessCategory {
    Restaurant,
    Accommodation,
    #[serde(rename = "Tour Operator")]
    TourOperator,
}

/// A nearby business with sustainable practices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: u32,
    pub name: String,
    pub category: BusinessCategory,
    /// Human-readable distance ("0.5 miles away")
    pub distance: String,
    pub rating: f64,
    pub description: String,
    /// Eco certification level, 0..=5 stars
    pub eco_stars: u8,
    pub tags: BTreeSet<String>,
}

impl Business {
    /// Render the eco rating as filled/empty stars, e.g. `★★★★☆`.
    pub fn eco_rating(&self) -> String {
        let filled = self.eco_stars.min(MAX_ECO_STARS) as usize;
        let empty = MAX_ECO_STARS as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}
