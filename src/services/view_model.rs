// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View-model builder: pure aggregates derived from the catalog for the
//! dashboard and map pages. Nothing here mutates its input.

use crate::models::{
    Activity, ActivityCategory, CatalogError, Coordinates, Location, LocationCategory,
    LocationFilter, MapStats, MarkerIcon, PointTable,
};
use geo::{BoundingRect, MultiPoint, Point};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject};
use serde::Serialize;
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Sum of points over the activities; 0 when empty. Saturates at `u32::MAX`.
pub fn total_points(activities: &[Activity]) -> u32 {
    activities
        .iter()
        .fold(0u32, |total, a| total.saturating_add(a.points))
}

/// Locations matching the filter, in catalog order.
pub fn filter_locations(locations: &[Location], filter: LocationFilter) -> Vec<&Location> {
    locations.iter().filter(|l| filter.matches(l)).collect()
}

/// The `n` highest-rated locations, best first. Ties keep input order.
pub fn top_rated<'a, I>(locations: I, n: usize) -> Vec<&'a Location>
where
    I: IntoIterator<Item = &'a Location>,
{
    let mut ranked: Vec<&Location> = locations.into_iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    ranked.truncate(n);
    ranked
}

/// Reward points for a category name.
///
/// Fails with `UnknownCategory` if the name is not a known category or the
/// table has no entry for it.
pub fn points_for(category: &str, table: &PointTable) -> Result<u32, CatalogError> {
    let parsed: ActivityCategory = category.parse()?;
    table
        .get(parsed)
        .ok_or_else(|| CatalogError::UnknownCategory(category.to_string()))
}

/// Number of locations per category. Absent categories are omitted.
pub fn category_counts<'a, I>(locations: I) -> BTreeMap<LocationCategory, u32>
where
    I: IntoIterator<Item = &'a Location>,
{
    let mut counts = BTreeMap::new();
    for location in locations {
        *counts.entry(location.category).or_insert(0) += 1;
    }
    counts
}

/// Mean rating, or `None` for no locations.
pub fn average_rating<'a, I>(locations: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Location>,
{
    let (sum, count) = locations
        .into_iter()
        .fold((0.0, 0u32), |(sum, count), l| (sum + l.rating, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Map page statistics: filtered count plus whole-catalog aggregates.
pub fn map_stats(catalog: &[Location], filtered: &[&Location]) -> MapStats {
    MapStats {
        locations_found: filtered.len() as u32,
        total_sites: catalog.len() as u32,
        average_rating: average_rating(catalog).map(round_one_decimal),
        by_category: category_counts(catalog),
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ─── Map Markers ─────────────────────────────────────────────

/// A marker handed to the map widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MapMarker {
    pub id: u32,
    /// `[latitude, longitude]`
    pub position: [f64; 2],
    pub color: String,
    pub icon: MarkerIcon,
    pub popup: PopupContent,
}

/// Popup body for a marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct PopupContent {
    pub name: String,
    pub rating: f64,
    /// Filled stars out of five
    pub stars: u8,
    pub description: String,
    pub category_label: String,
    pub call_to_action: String,
}

/// Whole stars for a rating, clamped to 0..=5.
pub fn filled_stars(rating: f64) -> u8 {
    rating.floor().clamp(0.0, 5.0) as u8
}

/// One marker per location, in input order.
pub fn map_markers<'a, I>(locations: I) -> Vec<MapMarker>
where
    I: IntoIterator<Item = &'a Location>,
{
    locations
        .into_iter()
        .map(|location| MapMarker {
            id: location.id,
            position: [
                location.coordinates.latitude,
                location.coordinates.longitude,
            ],
            color: location.color.as_str().to_string(),
            icon: location.category.style().icon,
            popup: PopupContent {
                name: location.name.clone(),
                rating: location.rating,
                stars: filled_stars(location.rating),
                description: location.description.clone(),
                category_label: location.category.display_name(),
                call_to_action: format!(
                    "Visit {} to earn eco-points and support local sustainability!",
                    location.name
                ),
            },
        })
        .collect()
}

/// South-west and north-east corners enclosing a set of locations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct MapBounds {
    pub south_west: Coordinates,
    pub north_east: Coordinates,
}

/// Bounding box of the locations, or `None` when there are none.
pub fn map_bounds<'a, I>(locations: I) -> Option<MapBounds>
where
    I: IntoIterator<Item = &'a Location>,
{
    let points: Vec<Point<f64>> = locations
        .into_iter()
        .map(|l| Point::from(l.coordinates))
        .collect();
    let rect = MultiPoint::from(points).bounding_rect()?;
    Some(MapBounds {
        south_west: Coordinates::new(rect.min().y, rect.min().x),
        north_east: Coordinates::new(rect.max().y, rect.max().x),
    })
}

/// Locations as a GeoJSON FeatureCollection of Points.
pub fn markers_geojson<'a, I>(locations: I) -> FeatureCollection
where
    I: IntoIterator<Item = &'a Location>,
{
    let features = locations
        .into_iter()
        .map(|location| {
            let mut properties = JsonObject::new();
            properties.insert("name".to_string(), location.name.clone().into());
            properties.insert(
                "type".to_string(),
                location.category.as_str().to_string().into(),
            );
            properties.insert("rating".to_string(), location.rating.into());
            properties.insert(
                "color".to_string(),
                location.color.as_str().to_string().into(),
            );
            properties.insert(
                "description".to_string(),
                location.description.clone().into(),
            );

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(geojson::Value::Point(vec![
                    location.coordinates.longitude,
                    location.coordinates.latitude,
                ]))),
                id: Some(geojson::feature::Id::Number(location.id.into())),
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
