// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, signup and logout routes.
//!
//! Any non-empty credentials sign in. A blank required field is ignored
//! silently (204, no cookie).

use axum::{
    extract::State,
    http::HeaderMap,
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::middleware::auth::{
    create_session_token, removal_cookie, session_cookie, session_id_from_request,
};
use crate::models::{LoginForm, Page, SignupForm, TravelerType};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(Page::LOGIN_PATH, get(login_page).post(login))
        .route("/signup", post(signup))
        .route("/logout", post(logout))
}

// ─── Login Page ──────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TravelerTypeOption {
    pub value: TravelerType,
    pub label: String,
}

/// Login form descriptor.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct LoginPageResponse {
    /// Name of the user already signed in on this browser, if any
    pub signed_in_as: Option<String>,
    pub traveler_types: Vec<TravelerTypeOption>,
    pub default_traveler_type: TravelerType,
}

async fn login_page(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Json<LoginPageResponse> {
    let session_id = session_id_from_request(&jar, &headers, &state.config.session_signing_key);
    let signed_in_as = state
        .sessions
        .enter(session_id.as_deref(), Page::Login)
        .ok()
        .flatten()
        .map(|context| context.user.name);

    Json(LoginPageResponse {
        signed_in_as,
        traveler_types: TravelerType::ALL
            .into_iter()
            .map(|value| TravelerTypeOption {
                value,
                label: value.label().to_string(),
            })
            .collect(),
        default_traveler_type: TravelerType::default(),
    })
}

// ─── Sign In / Sign Up ───────────────────────────────────────

/// Sign in and redirect to the dashboard.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(form): Json<LoginForm>,
) -> Result<(CookieJar, Redirect)> {
    let (session_id, _) = state
        .sessions
        .login(&form, state.catalog.activities())?;
    start_session(&state, jar, &headers, &session_id)
}

/// Create an account and redirect to the dashboard.
async fn signup(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(form): Json<SignupForm>,
) -> Result<(CookieJar, Redirect)> {
    let (session_id, _) = state
        .sessions
        .signup(&form, state.catalog.activities())?;
    start_session(&state, jar, &headers, &session_id)
}

/// Replace any previous browser session with `session_id` and set the cookie.
fn start_session(
    state: &AppState,
    jar: CookieJar,
    headers: &HeaderMap,
    session_id: &str,
) -> Result<(CookieJar, Redirect)> {
    if let Some(previous) =
        session_id_from_request(&jar, headers, &state.config.session_signing_key)
    {
        state.sessions.logout(&previous);
    }

    let token = create_session_token(
        session_id,
        &state.config.session_signing_key,
        state.config.session_ttl_hours,
    )
    .map_err(AppError::Internal)?;

    Ok((
        jar.add(session_cookie(token)),
        Redirect::to(Page::Dashboard.canonical_path()),
    ))
}

// ─── Sign Out ────────────────────────────────────────────────

/// Destroy the browser session and return to the landing page.
async fn logout(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    headers: HeaderMap,
) -> (CookieJar, Redirect) {
    if let Some(session_id) =
        session_id_from_request(&jar, &headers, &state.config.session_signing_key)
    {
        state.sessions.logout(&session_id);
    }

    (jar.remove(removal_cookie()), Redirect::to(Page::ROOT_PATH))
}
