//! Aggregates shown on the map and dashboard pages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::LocationCategory;

/// Map page summary for the current filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct MapStats {
    /// Locations matching the active filter
    pub locations_found: u32,
    /// Locations in the whole catalog
    pub total_sites: u32,
    /// Mean rating over the whole catalog, one decimal place
    pub average_rating: Option<f64>,
    /// Location count per category over the whole catalog
    pub by_category: BTreeMap<LocationCategory, u32>,
}

/// A multi-step sustainability challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub name: String,
    pub progress: u32,
    pub goal: u32,
    /// Unit label ("days", "dishes")
    pub unit: String,
}

impl Challenge {
    /// Completion percentage, rounded down and capped at 100.
    pub fn percent(&self) -> u32 {
        if self.goal == 0 {
            return 0;
        }
        (self.progress.min(self.goal) as u64 * 100 / self.goal as u64) as u32
    }
}
