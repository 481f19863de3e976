// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session cookie authentication middleware.
//!
//! The cookie carries an HS256 JWT whose subject is the browser-session id.
//! The user record itself stays server-side in the session registry.

use crate::error::AppError;
use crate::models::Page;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "ecotrail_session";

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (browser-session id)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

/// Browser-session id of the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(pub String);

/// Session id from the cookie or a bearer header, if the token is valid.
pub fn session_id_from_request(
    jar: &CookieJar,
    headers: &axum::http::HeaderMap,
    signing_key: &[u8],
) -> Option<String> {
    let token = match jar.get(SESSION_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::to_string)?,
    };
    verify_session_token(&token, signing_key)
}

/// Decode a session token and return its session id.
pub fn verify_session_token(token: &str, signing_key: &[u8]) -> Option<String> {
    let key = DecodingKey::from_secret(signing_key);
    let validation = Validation::new(Algorithm::HS256);
    decode::<Claims>(token, &key, &validation)
        .ok()
        .map(|data| data.claims.sub)
}

/// Middleware that enters the requested page through the session gate.
///
/// Protected pages without a live session redirect to the login page.
/// Otherwise a signed-in request gets [`SessionId`] and the session's
/// [`SessionContext`](crate::services::SessionContext) as request
/// extensions.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path();
    let page = Page::resolve(path).ok_or_else(|| AppError::NotFound(path.to_string()))?;

    let session_id =
        session_id_from_request(&jar, request.headers(), &state.config.session_signing_key);
    let context = state.sessions.enter(session_id.as_deref(), page)?;

    if let (Some(session_id), Some(context)) = (session_id, context) {
        request.extensions_mut().insert(SessionId(session_id));
        request.extensions_mut().insert(context);
    }

    Ok(next.run(request).await)
}

/// Create a JWT naming a browser session.
pub fn create_session_token(
    session_id: &str,
    signing_key: &[u8],
    ttl_hours: u64,
) -> anyhow::Result<String> {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as usize;
    let exp = usize::try_from(ttl_hours)
        .ok()
        .and_then(|hours| hours.checked_mul(60 * 60))
        .and_then(|ttl| now.checked_add(ttl))
        .ok_or_else(|| anyhow::anyhow!("Session TTL of {ttl_hours} hours is out of range"))?;

    let claims = Claims {
        sub: session_id.to_string(),
        iat: now,
        exp,
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}

/// Session cookie carrying `token`. No max-age: it ends with the browser.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie matching [`session_cookie`]'s attributes, for removal.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}
