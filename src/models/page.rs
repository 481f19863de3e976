// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Logical pages and the paths that reach them.

use serde::Serialize;

/// A navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    Landing,
    Login,
    Dashboard,
    EcoMap,
}

impl Page {
    pub const ROOT_PATH: &'static str = "/";
    pub const LANDING_PATH: &'static str = "/landingpage";
    pub const LOGIN_PATH: &'static str = "/login";
    pub const DASHBOARD_PATH: &'static str = "/dashboard";
    pub const ECO_MAP_PATH: &'static str = "/ecoMap";
    /// Alias rendering the eco map.
    pub const NEARBY_BUSINESS_PATH: &'static str = "/nearbyBusiness";

    /// Resolve a request path to a page, following aliases.
    ///
    /// Sub-resources belong to their page: `/ecoMap/geojson` is `EcoMap`.
    pub fn resolve(path: &str) -> Option<Page> {
        let section = path.strip_prefix('/')?.split('/').next().unwrap_or_default();
        match section {
            "" | "landingpage" => Some(Page::Landing),
            "login" => Some(Page::Login),
            "dashboard" => Some(Page::Dashboard),
            "ecoMap" | "nearbyBusiness" => Some(Page::EcoMap),
            _ => None,
        }
    }

    pub fn canonical_path(&self) -> &'static str {
        match self {
            Page::Landing => Self::LANDING_PATH,
            Page::Login => Self::LOGIN_PATH,
            Page::Dashboard => Self::DASHBOARD_PATH,
            Page::EcoMap => Self::ECO_MAP_PATH,
        }
    }

    /// Whether the page requires a signed-in user.
    pub fn is_protected(&self) -> bool {
        matches!(self, Page::Dashboard | Page::EcoMap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_aliases() {
        assert_eq!(Page::resolve("/"), Some(Page::Landing));
        assert_eq!(Page::resolve("/landingpage"), Some(Page::Landing));
        assert_eq!(Page::resolve("/nearbyBusiness"), Some(Page::EcoMap));
        assert_eq!(Page::resolve("/ecoMap"), Some(Page::EcoMap));
        assert_eq!(Page::resolve("/ecomap"), None);
        assert_eq!(Page::resolve("dashboard"), None);
    }

    #[test]
    fn test_resolve_sub_resources() {
        assert_eq!(Page::resolve("/dashboard/activities"), Some(Page::Dashboard));
        assert_eq!(Page::resolve("/ecoMap/geojson"), Some(Page::EcoMap));
        assert_eq!(Page::resolve("/ecoMap/locations/3"), Some(Page::EcoMap));
        assert_eq!(Page::resolve("/health"), None);
    }

    #[test]
    fn test_protected_pages() {
        assert!(Page::Dashboard.is_protected());
        assert!(Page::EcoMap.is_protected());
        assert!(!Page::Landing.is_protected());
        assert!(!Page::Login.is_protected());
    }

    #[test]
    fn test_canonical_path_resolves_back() {
        for page in [Page::Landing, Page::Login, Page::Dashboard, Page::EcoMap] {
            assert_eq!(Page::resolve(page.canonical_path()), Some(page));
        }
    }
}
