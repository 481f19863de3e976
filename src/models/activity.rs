// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Eco activity model and the reward point table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::CatalogError;

/// Kind of sustainable action a traveler can log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Accommodation,
    Dining,
    Transport,
    Shopping,
    Activity,
    Conservation,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 6] = [
        ActivityCategory::Accommodation,
        ActivityCategory::Dining,
        ActivityCategory::Transport,
        ActivityCategory::Shopping,
        ActivityCategory::Activity,
        ActivityCategory::Conservation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Accommodation => "accommodation",
            ActivityCategory::Dining => "dining",
            ActivityCategory::Transport => "transport",
            ActivityCategory::Shopping => "shopping",
            ActivityCategory::Activity => "activity",
            ActivityCategory::Conservation => "conservation",
        }
    }

    /// Label shown in the "log activity" picker.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityCategory::Accommodation => "Eco Accommodation Stay",
            ActivityCategory::Dining => "Sustainable Dining",
            ActivityCategory::Transport => "Green Transportation",
            ActivityCategory::Shopping => "Local/Eco Shopping",
            ActivityCategory::Activity => "Eco Activity/Tour",
            ActivityCategory::Conservation => "Conservation Activity",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// A logged sustainable action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// What the traveler did (e.g. "Joined trail cleanup")
    pub description: String,
    /// Category, when the action maps onto the point table
    pub category: Option<ActivityCategory>,
    /// Eco-points awarded
    pub points: u32,
    /// Display label ("Today", "Yesterday", "2 days ago")
    pub date: String,
    /// When the activity was logged (RFC3339), absent for catalog samples
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_at: Option<String>,
}

/// Mapping from activity category to reward points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointTable(HashMap<ActivityCategory, u32>);

impl Default for PointTable {
    fn default() -> Self {
        Self(HashMap::from([
            (ActivityCategory::Accommodation, 50),
            (ActivityCategory::Dining, 25),
            (ActivityCategory::Transport, 15),
            (ActivityCategory::Shopping, 30),
            (ActivityCategory::Activity, 40),
            (ActivityCategory::Conservation, 100),
        ]))
    }
}

impl PointTable {
    pub fn new(entries: HashMap<ActivityCategory, u32>) -> Self {
        Self(entries)
    }

    pub fn get(&self, category: ActivityCategory) -> Option<u32> {
        self.0.get(&category).copied()
    }

    /// Entries in category declaration order.
    pub fn entries(&self) -> Vec<(ActivityCategory, u32)> {
        ActivityCategory::ALL
            .into_iter()
            .filter_map(|c| self.get(c).map(|points| (c, points)))
            .collect()
    }
}
