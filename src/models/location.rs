// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Eco-location model and the category → marker style mapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::CatalogError;

/// Kind of eco-location shown on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum LocationCategory {
    Camping,
    Recreation,
    Mountain,
    Activity,
    Park,
    Cultural,
    Landmark,
}

/// Marker icon identifier understood by the map frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerIcon {
    Campground,
    SwimmingPool,
    Mountain,
    Hiking,
    Tree,
    Cow,
    Bridge,
}

/// How a category is drawn: icon plus marker color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub icon: MarkerIcon,
    pub color: &'static str,
}

impl LocationCategory {
    pub const ALL: [LocationCategory; 7] = [
        LocationCategory::Camping,
        LocationCategory::Recreation,
        LocationCategory::Mountain,
        LocationCategory::Activity,
        LocationCategory::Park,
        LocationCategory::Cultural,
        LocationCategory::Landmark,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LocationCategory::Camping => "camping",
            LocationCategory::Recreation => "recreation",
            LocationCategory::Mountain => "mountain",
            LocationCategory::Activity => "activity",
            LocationCategory::Park => "park",
            LocationCategory::Cultural => "cultural",
            LocationCategory::Landmark => "landmark",
        }
    }

    /// Filter button label.
    pub fn label(&self) -> &'static str {
        match self {
            LocationCategory::Camping => "Camping Sites",
            LocationCategory::Recreation => "Recreation",
            LocationCategory::Mountain => "Mountains",
            LocationCategory::Activity => "Eco Activities",
            LocationCategory::Park => "Parks",
            LocationCategory::Cultural => "Cultural Sites",
            LocationCategory::Landmark => "Landmarks",
        }
    }

    /// Map legend label.
    pub fn legend_label(&self) -> &'static str {
        match self {
            LocationCategory::Camping => "Camping & Lodging",
            LocationCategory::Recreation => "Water & Recreation",
            LocationCategory::Mountain => "Mountains",
            LocationCategory::Activity => "Eco Activities",
            LocationCategory::Park => "Parks & Gardens",
            LocationCategory::Cultural => "Crafts & Cultural",
            LocationCategory::Landmark => "Historic Landmarks",
        }
    }

    /// Icon and color for this category. Total over all variants.
    pub fn style(&self) -> CategoryStyle {
        let (icon, color) = match self {
            LocationCategory::Camping => (MarkerIcon::Campground, "#2E8B57"),
            LocationCategory::Recreation => (MarkerIcon::SwimmingPool, "#1E90FF"),
            LocationCategory::Mountain => (MarkerIcon::Mountain, "#1E5631"),
            LocationCategory::Activity => (MarkerIcon::Hiking, "#3CB371"),
            LocationCategory::Park => (MarkerIcon::Tree, "#4CAF50"),
            LocationCategory::Cultural => (MarkerIcon::Cow, "#8B4513"),
            LocationCategory::Landmark => (MarkerIcon::Bridge, "#4682B4"),
        };
        CategoryStyle { icon, color }
    }

    /// Marker color for this category.
    pub fn color(&self) -> HexColor {
        HexColor(self.style().color.to_string())
    }

    /// Category name with the first letter upper-cased ("Mountain").
    pub fn display_name(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocationCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// Map filter selection. `"all"` disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationFilter {
    #[default]
    All,
    Category(LocationCategory),
}

impl LocationFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationFilter::All => "all",
            LocationFilter::Category(c) => c.as_str(),
        }
    }

    pub fn matches(&self, location: &Location) -> bool {
        match self {
            LocationFilter::All => true,
            LocationFilter::Category(c) => location.category == *c,
        }
    }
}

impl FromStr for LocationFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(LocationFilter::All)
        } else {
            s.parse().map(LocationFilter::Category)
        }
    }
}

/// WGS84 latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinates> for geo::Point<f64> {
    fn from(c: Coordinates) -> Self {
        // geo uses x = longitude, y = latitude
        geo::Point::new(c.longitude, c.latitude)
    }
}

/// `#RRGGBB` color tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(value: &str) -> Result<Self, CatalogError> {
        let valid = value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit());
        if valid {
            Ok(Self(value.to_ascii_uppercase()))
        } else {
            Err(CatalogError::InvalidColor(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HexColor {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HexColor::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

/// An eco-friendly destination. `id` is unique within a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Location {
    pub id: u32,
    pub name: String,
    pub category: LocationCategory,
    pub coordinates: Coordinates,
    /// Visitor rating in [0, 5]
    pub rating: f64,
    pub description: String,
    pub color: HexColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parses_all_and_categories() {
        assert_eq!("all".parse::<LocationFilter>().unwrap(), LocationFilter::All);
        assert_eq!(
            "mountain".parse::<LocationFilter>().unwrap(),
            LocationFilter::Category(LocationCategory::Mountain)
        );
        assert!(matches!(
            "beach".parse::<LocationFilter>(),
            Err(CatalogError::UnknownCategory(c)) if c == "beach"
        ));
    }

    #[test]
    fn test_every_category_has_a_style() {
        for category in LocationCategory::ALL {
            let style = category.style();
            assert!(HexColor::parse(style.color).is_ok(), "{category} color");
        }
        assert_eq!(LocationCategory::Cultural.style().icon, MarkerIcon::Cow);
    }

    #[test]
    fn test_display_name_capitalizes() {
        assert_eq!(LocationCategory::Mountain.display_name(), "Mountain");
        assert_eq!(LocationCategory::Landmark.display_name(), "Landmark");
    }

    #[test]
    fn test_hex_color_validation() {
        assert_eq!(HexColor::parse("#2e8b57").unwrap().as_str(), "#2E8B57");
        assert!(HexColor::parse("2E8B57").is_err());
        assert!(HexColor::parse("#2E8B5").is_err());
        assert!(HexColor::parse("#GGGGGG").is_err());
    }

    #[test]
    fn test_coordinates_to_point_swaps_axes() {
        let point: geo::Point<f64> = Coordinates::new(8.3, 125.0).into();
        assert_eq!(point.x(), 125.0);
        assert_eq!(point.y(), 8.3);
    }
}
