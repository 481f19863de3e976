// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Catalog provider: eco-locations, sample activities, businesses and the
//! reward point table.
//!
//! The built-in catalog covers Impasug-ong, Bukidnon. Locations can be
//! replaced by a GeoJSON FeatureCollection of Point features.

use crate::models::{
    Activity, ActivityCategory, Business, BusinessCategory, CatalogError, Challenge, Coordinates,
    HexColor, Location, LocationCategory, PointTable,
};
use geojson::GeoJson;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

/// Highest allowed location rating.
pub const MAX_RATING: f64 = 5.0;

/// Read-only reference data backing the dashboard and map pages.
#[derive(Debug, Clone)]
pub struct Catalog {
    locations: Vec<Location>,
    activities: Vec<Activity>,
    businesses: Vec<Business>,
    challenges: Vec<Challenge>,
    point_table: PointTable,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        Self {
            locations: builtin_locations(),
            activities: builtin_activities(),
            businesses: builtin_businesses(),
            challenges: builtin_challenges(),
            point_table: PointTable::default(),
        }
    }

    /// Built-in catalog with locations loaded from a GeoJSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Built-in catalog with locations loaded from a GeoJSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let locations = parse_locations(json_data)?;
        tracing::info!(count = locations.len(), "Loaded eco-locations");
        Self::builtin().with_locations(locations)
    }

    /// Replace the location list, checking id uniqueness and rating range.
    pub fn with_locations(mut self, locations: Vec<Location>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for location in &locations {
            if !seen.insert(location.id) {
                return Err(CatalogError::DuplicateId(location.id));
            }
            if !(0.0..=MAX_RATING).contains(&location.rating) {
                return Err(CatalogError::InvalidLocation {
                    id: location.id,
                    reason: format!("rating {} outside 0..=5", location.rating),
                });
            }
        }
        self.locations = locations;
        Ok(self)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Sample activities used to seed each new session's activity log.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn point_table(&self) -> &PointTable {
        &self.point_table
    }

    pub fn location(&self, id: u32) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }
}

/// Parse Point features into locations.
///
/// Each feature needs `name`, `type` (or `category`) and `rating`
/// properties; `id` comes from the feature id or an `id` property.
/// `color` defaults to the category color.
fn parse_locations(json_data: &str) -> Result<Vec<Location>, CatalogError> {
    let geojson: GeoJson = json_data
        .parse()
        .map_err(|e: geojson::Error| CatalogError::ParseError(e.to_string()))?;

    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(CatalogError::ParseError(
            "expected a FeatureCollection".to_string(),
        ));
    };

    let mut locations = Vec::with_capacity(collection.features.len());
    for (index, feature) in collection.features.into_iter().enumerate() {
        let id = feature_id(&feature).ok_or_else(|| {
            CatalogError::ParseError(format!("feature {index} has no numeric id"))
        })?;

        let text = |key: &str| {
            feature
                .property(key)
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };
        let invalid = |reason: &str| CatalogError::InvalidLocation {
            id,
            reason: reason.to_string(),
        };

        let name = text("name").ok_or_else(|| invalid("missing name"))?;
        let category: LocationCategory = text("type")
            .or_else(|| text("category"))
            .ok_or_else(|| invalid("missing type"))?
            .parse()?;
        let rating = feature
            .property("rating")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| invalid("missing rating"))?;
        let description = text("description").unwrap_or_default();
        let color = match text("color") {
            Some(color) => HexColor::parse(&color)?,
            None => category.color(),
        };

        let coordinates = match feature.geometry.as_ref().map(|g| &g.value) {
            Some(geojson::Value::Point(position)) if position.len() >= 2 => {
                Coordinates::new(position[1], position[0])
            }
            _ => return Err(CatalogError::UnsupportedGeometry),
        };

        locations.push(Location {
            id,
            name,
            category,
            coordinates,
            rating,
            description,
            color,
        });
    }

    Ok(locations)
}

fn feature_id(feature: &geojson::Feature) -> Option<u32> {
    let from_id = match &feature.id {
        Some(geojson::feature::Id::Number(n)) => n.as_u64(),
        Some(geojson::feature::Id::String(s)) => s.parse().ok(),
        None => None,
    };
    from_id
        .or_else(|| feature.property("id").and_then(|v| v.as_u64()))
        .and_then(|id| u32::try_from(id).ok())
}

fn location(
    id: u32,
    name: &str,
    category: LocationCategory,
    coordinates: Coordinates,
    rating: f64,
    description: &str,
) -> Location {
    Location {
        id,
        name: name.to_string(),
        category,
        coordinates,
        rating,
        description: description.to_string(),
        color: category.color(),
    }
}

fn builtin_locations() -> Vec<Location> {
    vec![
        location(
            1,
            "Rotypeaks Ridge Camp",
            LocationCategory::Camping,
            Coordinates::new(8.3424038, 125.037228),
            4.7,
            "Scenic camping site overlooking the mountains with eco-friendly amenities",
        ),
        location(
            2,
            "Cedar Communal",
            LocationCategory::Recreation,
            Coordinates::new(8.2497721, 125.0316295),
            4.5,
            "Natural Swimming Pool with Sustainable Water Management & Waterfall Feature",
        ),
        location(
            3,
            "Mount Kitanglad Range",
            LocationCategory::Mountain,
            Coordinates::new(8.1184714, 124.8122055),
            4.9,
            "Protected natural park with hiking trails and biodiversity conservation",
        ),
        location(
            4,
            "Panika Eco-Site",
            LocationCategory::Activity,
            Coordinates::new(8.2480823, 125.1725303),
            4.6,
            "Nature reserve with guided eco-tours and cultural immersion programs",
        ),
        location(
            5,
            "Municipal Tree Park",
            LocationCategory::Park,
            Coordinates::new(8.31081, 124.9853),
            4.4,
            "Community tree park with native species conservation and educational tours",
        ),
        location(
            6,
            "Atugan Swimming Pool",
            LocationCategory::Recreation,
            Coordinates::new(8.2980559, 125.0128588),
            4.3,
            "Natural swimming pool with sustainable water management system",
        ),
        location(
            7,
            "Cowboy Town",
            LocationCategory::Cultural,
            Coordinates::new(8.2920045, 124.9853276),
            4.5,
            "Cultural heritage site showcasing local cowboy traditions and crafts",
        ),
        location(
            8,
            "Atugan Bridge",
            LocationCategory::Landmark,
            Coordinates::new(8.2695499, 124.9999953),
            4.2,
            "Historical bridge with scenic river views and local artisan market",
        ),
    ]
}

fn builtin_activities() -> Vec<Activity> {
    let sample = |description: &str, category, points, date: &str| Activity {
        description: description.to_string(),
        category,
        points,
        date: date.to_string(),
        logged_at: None,
    };

    vec![
        sample(
            "Stayed at Mount Kitanglad Eco-Lodge",
            Some(ActivityCategory::Accommodation),
            50,
            "Today",
        ),
        // Bonus action; not one of the point-table categories
        sample("Used reusable water bottle", None, 10, "Today"),
        sample(
            "Tried local dish at Kaamulan Cafe",
            Some(ActivityCategory::Dining),
            25,
            "Yesterday",
        ),
        sample(
            "Joined trail cleanup",
            Some(ActivityCategory::Conservation),
            100,
            "2 days ago",
        ),
    ]
}

fn builtin_businesses() -> Vec<Business> {
    let tags = |tags: &[&str]| tags.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>();

    vec![
        Business {
            id: 1,
            name: "Kaamulan Native Cafe".to_string(),
            category: BusinessCategory::Restaurant,
            distance: "0.5 miles away".to_string(),
            rating: 4.8,
            description: "Traditional Bukidnon cuisine with locally sourced ingredients"
                .to_string(),
            eco_stars: 5,
            tags: tags(&["Local Food", "Eco-Friendly", "Vegetarian Options"]),
        },
        Business {
            id: 2,
            name: "Mount Kitanglad Eco-Lodge".to_string(),
            category: BusinessCategory::Accommodation,
            distance: "2.1 miles away".to_string(),
            rating: 4.9,
            description: "Sustainable mountain lodge with solar power and rainwater harvesting"
                .to_string(),
            eco_stars: 5,
            tags: tags(&["Solar Powered", "Rainwater Harvesting", "Zero Waste"]),
        },
        Business {
            id: 3,
            name: "Eco-Adventure Tours".to_string(),
            category: BusinessCategory::TourOperator,
            distance: "1.3 miles away".to_string(),
            rating: 4.7,
            description: "Guided nature tours supporting local conservation efforts".to_string(),
            eco_stars: 4,
            tags: tags(&["Guided Tours", "Conservation", "Local Guides"]),
        },
    ]
}

fn builtin_challenges() -> Vec<Challenge> {
    vec![
        Challenge {
            name: "Zero Waste Week".to_string(),
            progress: 4,
            goal: 7,
            unit: "days".to_string(),
        },
        Challenge {
            name: "Local Food Explorer".to_string(),
            progress: 4,
            goal: 5,
            unit: "dishes".to_string(),
        },
    ]
}
