// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-session activity log.
//!
//! The catalog's sample activities are read-only; each browser session gets
//! its own copy to append to. Nothing outlives the session.

use crate::error::{AppError, Result};
use crate::models::{Activity, PointTable};
use crate::services::view_model::{points_for, total_points};
use crate::time_utils::{format_utc_rfc3339, relative_day_label};
use chrono::{DateTime, Utc};

/// Most entries one session's log holds.
pub const MAX_LOG_ENTRIES: usize = 1000;

/// Owned, append-only list of a traveler's activities, newest first.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<Activity>,
}

impl ActivityLog {
    /// Start a log from the catalog's sample activities.
    pub fn seeded(samples: &[Activity]) -> Self {
        Self {
            entries: samples.to_vec(),
        }
    }

    pub fn entries(&self) -> &[Activity] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_points(&self) -> u32 {
        total_points(&self.entries)
    }

    /// Log a new activity now.
    pub fn log(
        &mut self,
        category: &str,
        description: &str,
        table: &PointTable,
    ) -> Result<&Activity> {
        self.log_at(category, description, table, Utc::now())
    }

    /// Log a new activity at `now`.
    ///
    /// A blank description is `EmptyInput`; an unknown category is
    /// `UnknownCategory`; a full log is `BadRequest`. None of them changes
    /// the log.
    pub fn log_at(
        &mut self,
        category: &str,
        description: &str,
        table: &PointTable,
        now: DateTime<Utc>,
    ) -> Result<&Activity> {
        let description = description.trim();
        if description.is_empty() {
            return Err(AppError::EmptyInput);
        }

        let points = points_for(category, table)?;
        if self.entries.len() >= MAX_LOG_ENTRIES {
            return Err(AppError::BadRequest(format!(
                "activity log is full ({MAX_LOG_ENTRIES} entries)"
            )));
        }
        let activity = Activity {
            description: description.to_string(),
            category: category.parse().ok(),
            points,
            date: relative_day_label(0),
            logged_at: Some(format_utc_rfc3339(now)),
        };

        tracing::info!(category, points, "Activity logged");
        self.entries.insert(0, activity);
        Ok(&self.entries[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityCategory;
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn sample() -> Activity {
        Activity {
            description: "Joined trail cleanup".to_string(),
            category: Some(ActivityCategory::Conservation),
            points: 100,
            date: "2 days ago".to_string(),
            logged_at: None,
        }
    }

    #[test]
    fn test_log_appends_and_updates_total() {
        let mut log = ActivityLog::seeded(&[sample()]);
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();

        let activity = log
            .log_at("dining", "  Ate at a farm cafe ", &PointTable::default(), now)
            .unwrap();
        assert_eq!(activity.description, "Ate at a farm cafe");
        assert_eq!(activity.points, 25);
        assert_eq!(activity.category, Some(ActivityCategory::Dining));
        assert_eq!(activity.date, "Today");
        assert_eq!(activity.logged_at.as_deref(), Some("2026-03-01T09:30:00Z"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.total_points(), 125);
        assert_eq!(log.entries()[0].description, "Ate at a farm cafe");
    }

    #[test]
    fn test_blank_description_is_ignored() {
        let mut log = ActivityLog::seeded(&[sample()]);
        let result = log.log("dining", "   ", &PointTable::default());
        assert!(matches!(result, Err(AppError::EmptyInput)));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let mut log = ActivityLog::default();
        let result = log.log("volunteering", "Planted trees", &PointTable::default());
        assert!(matches!(result, Err(AppError::UnknownCategory(c)) if c == "volunteering"));
        assert!(log.is_empty());
    }

    #[test]
    fn test_huge_point_values_saturate_total() {
        let table = PointTable::new(HashMap::from([(ActivityCategory::Dining, u32::MAX)]));
        let mut log = ActivityLog::default();
        log.log("dining", "Feast", &table).unwrap();
        log.log("dining", "Second feast", &table).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.total_points(), u32::MAX);
    }

    #[test]
    fn test_full_log_rejects_new_entries() {
        let samples = vec![sample(); MAX_LOG_ENTRIES];
        let mut log = ActivityLog::seeded(&samples);
        let result = log.log("dining", "One more", &PointTable::default());
        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(log.len(), MAX_LOG_ENTRIES);
    }

    #[test]
    fn test_seeded_log_does_not_share_samples() {
        let samples = vec![sample()];
        let mut log = ActivityLog::seeded(&samples);
        log.log("transport", "Took the jeepney", &PointTable::default())
            .unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(log.total_points(), 115);
    }
}
