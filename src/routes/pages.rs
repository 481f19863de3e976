// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page routes: landing, dashboard and eco map.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::middleware::auth::SessionId;
use crate::models::{
    Activity, ActivityCategory, Business, Challenge, Coordinates, LocationCategory,
    LocationFilter, MapStats, MarkerIcon, Page, TravelerType,
};
use crate::services::view_model::{
    self, filled_stars, filter_locations, map_bounds, map_markers, map_stats, markers_geojson,
    top_rated, MapBounds, MapMarker,
};
use crate::services::SessionContext;
use crate::AppState;

/// Initial map center: Impasug-ong, Bukidnon.
pub const MAP_CENTER: Coordinates = Coordinates::new(8.3056, 125.0139);
pub const MAP_ZOOM: u8 = 12;
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
/// Entries in the map's "top rated" card.
pub const TOP_RATED_COUNT: usize = 3;
const USER_LEVEL: &str = "Eco Explorer Level";

/// Pages anyone can open.
pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            Page::ROOT_PATH,
            get(|| async { Redirect::to(Page::LANDING_PATH) }),
        )
        .route(Page::LANDING_PATH, get(landing_page))
}

/// Pages behind the session gate. The auth middleware is applied in
/// routes/mod.rs.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(Page::DASHBOARD_PATH, get(dashboard))
        .route("/dashboard/activities", post(log_activity))
        .route(Page::ECO_MAP_PATH, get(eco_map))
        .route(Page::NEARBY_BUSINESS_PATH, get(eco_map))
        .route("/ecoMap/geojson", get(eco_map_geojson))
        .route("/ecoMap/locations/{id}", get(location_marker))
}

// ─── Landing ─────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Step {
    pub number: u8,
    pub title: String,
    pub description: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Contact {
    pub address: String,
    pub email: String,
    pub phone: String,
    pub hours: String,
}

/// Landing page content.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct LandingResponse {
    pub headline: String,
    pub tagline: String,
    pub features: Vec<Feature>,
    pub steps: Vec<Step>,
    pub contact: Contact,
    pub sign_up_path: String,
}

async fn landing_page() -> Json<LandingResponse> {
    let feature = |title: &str, description: &str| Feature {
        title: title.to_string(),
        description: description.to_string(),
    };
    let step = |number, title: &str, description: &str| Step {
        number,
        title: title.to_string(),
        description: description.to_string(),
    };

    Json(LandingResponse {
        headline: "Travel Responsibly, Track Your Impact".to_string(),
        tagline: "Explore Impasug-ong's eco-friendly destinations, support local green \
                  businesses, and measure your contribution to sustainability with \
                  EcoTrail Tracker."
            .to_string(),
        features: vec![
            feature(
                "Interactive Eco-Map",
                "Discover verified sustainable destinations, accommodations, and \
                 experiences across Impasug-ong with our interactive map.",
            ),
            feature(
                "Earn Eco-Points",
                "Get rewarded for sustainable travel choices. Earn points for staying at \
                 eco-lodges, supporting local businesses, and more.",
            ),
            feature(
                "Support Local Communities",
                "Your travel directly supports indigenous communities and local \
                 eco-businesses committed to sustainability.",
            ),
        ],
        steps: vec![
            step(
                1,
                "Create Your Account",
                "Sign up for free and set up your eco-traveler profile.",
            ),
            step(
                2,
                "Explore & Plan",
                "Use the eco-map to discover sustainable accommodations, restaurants, \
                 and activities in Impasug-ong.",
            ),
            step(
                3,
                "Track & Earn",
                "Log sustainable actions at verified locations and earn eco-points.",
            ),
            step(
                4,
                "Make an Impact",
                "See your contribution to local communities and conservation efforts.",
            ),
        ],
        contact: Contact {
            address: "Impasug-ong, Bukidnon, Philippines".to_string(),
            email: "info@ecotrailtracker.ph".to_string(),
            phone: "+63 912 345 6789".to_string(),
            hours: "Mon - Fri: 9:00 AM - 5:00 PM".to_string(),
        },
        sign_up_path: Page::LOGIN_PATH.to_string(),
    })
}

// ─── Dashboard ───────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub name: String,
    pub email: String,
    pub traveler_type: Option<TravelerType>,
    pub level: String,
}

impl From<&SessionContext> for UserSummary {
    fn from(context: &SessionContext) -> Self {
        Self {
            name: context.user.name.clone(),
            email: context.user.email.clone(),
            traveler_type: context.user.traveler_type,
            level: USER_LEVEL.to_string(),
        }
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSummary {
    #[serde(flatten)]
    pub business: Business,
    /// Eco rating rendered as stars
    pub eco_rating: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeSummary {
    #[serde(flatten)]
    pub challenge: Challenge,
    pub percent: u32,
}

/// One choice in the "log activity" picker.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityCategoryOption {
    pub value: ActivityCategory,
    pub label: String,
    pub points: u32,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub user: UserSummary,
    pub total_points: u32,
    pub activities: Vec<Activity>,
    pub businesses: Vec<BusinessSummary>,
    pub business_count: u32,
    pub challenges: Vec<ChallengeSummary>,
    pub activity_categories: Vec<ActivityCategoryOption>,
}

async fn dashboard(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<SessionContext>,
    Extension(SessionId(session_id)): Extension<SessionId>,
) -> Result<Json<DashboardResponse>> {
    let activities = state.sessions.activities(&session_id)?;
    let total_points = view_model::total_points(&activities);

    tracing::debug!(
        user = %context.user.name,
        activities = activities.len(),
        total_points,
        "Rendering dashboard"
    );

    let businesses: Vec<BusinessSummary> = state
        .catalog
        .businesses()
        .iter()
        .map(|business| BusinessSummary {
            eco_rating: business.eco_rating(),
            business: business.clone(),
        })
        .collect();

    Ok(Json(DashboardResponse {
        user: UserSummary::from(&context),
        total_points,
        activities,
        business_count: businesses.len() as u32,
        businesses,
        challenges: state
            .catalog
            .challenges()
            .iter()
            .map(|challenge| ChallengeSummary {
                percent: challenge.percent(),
                challenge: challenge.clone(),
            })
            .collect(),
        activity_categories: state
            .catalog
            .point_table()
            .entries()
            .into_iter()
            .map(|(value, points)| ActivityCategoryOption {
                value,
                label: value.label().to_string(),
                points,
            })
            .collect(),
    }))
}

// ─── Log Activity ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LogActivityRequest {
    #[serde(default = "default_activity_category")]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

fn default_activity_category() -> String {
    ActivityCategory::Accommodation.as_str().to_string()
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct LogActivityResponse {
    pub activity: Activity,
    pub total_points: u32,
}

/// Append to this session's activity log.
async fn log_activity(
    State(state): State<Arc<AppState>>,
    Extension(SessionId(session_id)): Extension<SessionId>,
    Json(request): Json<LogActivityRequest>,
) -> Result<(StatusCode, Json<LogActivityResponse>)> {
    let (activity, total_points) = state.sessions.log_activity(
        &session_id,
        &request.category,
        &request.description,
        state.catalog.point_table(),
    )?;

    Ok((
        StatusCode::CREATED,
        Json(LogActivityResponse {
            activity,
            total_points,
        }),
    ))
}

// ─── Eco Map ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct MapQuery {
    /// Location category, or "all"
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    LocationFilter::All.as_str().to_string()
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    pub active: bool,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LegendEntry {
    pub category: LocationCategory,
    pub label: String,
    pub color: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TopRatedEntry {
    pub id: u32,
    pub name: String,
    pub rating: f64,
    pub stars: u8,
    pub color: String,
    pub icon: MarkerIcon,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct MapResponse {
    pub user: UserSummary,
    pub active_filter: String,
    pub filters: Vec<FilterOption>,
    pub center: Coordinates,
    pub zoom: u8,
    pub tile_url: String,
    pub bounds: Option<MapBounds>,
    pub markers: Vec<MapMarker>,
    pub legend: Vec<LegendEntry>,
    pub stats: MapStats,
    pub top_rated: Vec<TopRatedEntry>,
}

fn filter_options(active: LocationFilter) -> Vec<FilterOption> {
    std::iter::once((LocationFilter::All, "All Locations"))
        .chain(
            LocationCategory::ALL
                .into_iter()
                .map(|c| (LocationFilter::Category(c), c.label())),
        )
        .map(|(filter, label)| FilterOption {
            value: filter.as_str().to_string(),
            label: label.to_string(),
            active: filter == active,
        })
        .collect()
}

/// Eco map for the selected filter. Also served at `/nearbyBusiness`.
async fn eco_map(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<SessionContext>,
    Query(params): Query<MapQuery>,
) -> Result<Json<MapResponse>> {
    let filter: LocationFilter = params.filter.parse()?;
    let locations = state.catalog.locations();
    let filtered = filter_locations(locations, filter);

    tracing::debug!(
        user = %context.user.name,
        filter = filter.as_str(),
        found = filtered.len(),
        "Rendering eco map"
    );

    let top_rated = top_rated(locations, TOP_RATED_COUNT)
        .into_iter()
        .map(|location| {
            let style = location.category.style();
            TopRatedEntry {
                id: location.id,
                name: location.name.clone(),
                rating: location.rating,
                stars: filled_stars(location.rating),
                color: location.color.as_str().to_string(),
                icon: style.icon,
            }
        })
        .collect();

    Ok(Json(MapResponse {
        user: UserSummary::from(&context),
        active_filter: filter.as_str().to_string(),
        filters: filter_options(filter),
        center: MAP_CENTER,
        zoom: MAP_ZOOM,
        tile_url: TILE_URL.to_string(),
        bounds: map_bounds(filtered.iter().copied()),
        markers: map_markers(filtered.iter().copied()),
        legend: LocationCategory::ALL
            .into_iter()
            .map(|category| LegendEntry {
                category,
                label: category.legend_label().to_string(),
                color: category.style().color.to_string(),
            })
            .collect(),
        stats: map_stats(locations, &filtered),
        top_rated,
    }))
}

/// Filtered locations as GeoJSON for map widgets that take it directly.
async fn eco_map_geojson(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MapQuery>,
) -> Result<impl IntoResponse> {
    let filter: LocationFilter = params.filter.parse()?;
    let filtered = filter_locations(state.catalog.locations(), filter);
    let collection = markers_geojson(filtered.iter().copied());

    Ok((
        [(header::CONTENT_TYPE, "application/geo+json")],
        Json(collection),
    ))
}

/// Marker and popup for one location, for deep links into the map.
async fn location_marker(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MapMarker>> {
    let id: u32 = id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("location id must be a number: {id}")))?;
    let location = state
        .catalog
        .location(id)
        .ok_or_else(|| AppError::NotFound(format!("location {id}")))?;

    map_markers(std::iter::once(location))
        .pop()
        .map(Json)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("no marker for location {id}")))
}
