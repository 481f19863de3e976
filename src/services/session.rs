// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session gate and the registry of live browser sessions.
//!
//! A gate is either `Anonymous` or `Authenticated(user)`. Login writes the
//! user record to the session store under `"user"`, logout removes it.
//! Protected pages receive an explicit [`SessionContext`] instead of reading
//! the store themselves.

use crate::config::MAX_SESSION_TTL_HOURS;
use crate::db::{MemorySessionStore, SessionStore, USER_KEY};
use crate::error::{AppError, Result};
use crate::models::{Activity, LoginForm, Page, PointTable, SignupForm, User};
use crate::services::activity::ActivityLog;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use ring::rand::{SecureRandom, SystemRandom};
use std::sync::Arc;
use validator::Validate;

/// Length of a browser-session id in random bytes (hex-encoded on the wire).
const SESSION_ID_BYTES: usize = 16;

/// Session lifetime when none is configured.
pub const DEFAULT_SESSION_TTL_HOURS: u64 = 24;

/// Session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated(User),
}

/// Read-only view of the signed-in user, handed to page operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub user: User,
}

/// Gate over one browser's session store.
#[derive(Debug)]
pub struct SessionGate<S: SessionStore> {
    store: S,
    state: SessionState,
}

impl<S: SessionStore> SessionGate<S> {
    /// Open a gate, restoring any user record already in the store.
    ///
    /// A record that fails to parse is discarded and the gate starts
    /// anonymous.
    pub fn load(mut store: S) -> Self {
        let state = match store.get(USER_KEY) {
            None => SessionState::Anonymous,
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => SessionState::Authenticated(user),
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding malformed session record");
                    store.remove(USER_KEY);
                    SessionState::Anonymous
                }
            },
        };
        Self { store, state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn current_user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Sign in with any non-empty email and password.
    ///
    /// The display name is the local part of the email.
    pub fn login(&mut self, form: &LoginForm) -> Result<User> {
        form.validate().map_err(|_| AppError::EmptyInput)?;
        let user = User {
            name: form.display_name().to_string(),
            email: form.email.clone(),
            traveler_type: None,
        };
        self.authenticate(user)
    }

    /// Create an account; name, email and password must be non-empty.
    pub fn signup(&mut self, form: &SignupForm) -> Result<User> {
        form.validate().map_err(|_| AppError::EmptyInput)?;
        let user = User {
            name: form.name.clone(),
            email: form.email.clone(),
            traveler_type: Some(form.traveler_type),
        };
        self.authenticate(user)
    }

    fn authenticate(&mut self, user: User) -> Result<User> {
        let record = serde_json::to_string(&user)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Serialize user: {}", e)))?;
        self.store.set(USER_KEY, record);
        self.state = SessionState::Authenticated(user.clone());
        Ok(user)
    }

    /// Clear the session record. Safe to call when already anonymous.
    pub fn logout(&mut self) {
        self.store.remove(USER_KEY);
        self.state = SessionState::Anonymous;
    }

    /// Context for the signed-in user, or `MissingSession`.
    pub fn context(&self) -> Result<SessionContext> {
        self.current_user()
            .map(|user| SessionContext { user: user.clone() })
            .ok_or(AppError::MissingSession)
    }

    /// Enter a page. Protected pages require a signed-in user; public pages
    /// get the context when there is one.
    pub fn enter(&self, page: Page) -> Result<Option<SessionContext>> {
        if page.is_protected() {
            self.context().map(Some)
        } else {
            Ok(self.context().ok())
        }
    }
}

// ─── Browser Sessions ────────────────────────────────────────

/// Everything one browser session owns.
#[derive(Debug)]
pub struct BrowserSession {
    pub gate: SessionGate<MemorySessionStore>,
    pub activities: ActivityLog,
    pub expires_at: DateTime<Utc>,
}

impl BrowserSession {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Live browser sessions keyed by session id.
///
/// Sessions live in memory only. Logout, expiry or restart discards them;
/// expired sessions are purged whenever a new one opens.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<DashMap<String, BrowserSession>>,
    ttl: Duration,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_ttl_hours(DEFAULT_SESSION_TTL_HOURS)
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry whose sessions expire `hours` after they open.
    pub fn with_ttl_hours(hours: u64) -> Self {
        let hours = hours.min(MAX_SESSION_TTL_HOURS) as i64;
        Self {
            sessions: Arc::new(DashMap::new()),
            ttl: Duration::hours(hours),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Sign in and open a new browser session. Returns its id and the user.
    pub fn login(&self, form: &LoginForm, seed: &[Activity]) -> Result<(String, User)> {
        self.login_at(form, seed, Utc::now())
    }

    /// Sign in at `now`.
    pub fn login_at(
        &self,
        form: &LoginForm,
        seed: &[Activity],
        now: DateTime<Utc>,
    ) -> Result<(String, User)> {
        let mut gate = SessionGate::load(MemorySessionStore::new());
        let user = gate.login(form)?;
        let session_id = self.open(gate, seed, now)?;
        tracing::info!(user = %user.name, "User signed in");
        Ok((session_id, user))
    }

    /// Sign up and open a new browser session. Returns its id and the user.
    pub fn signup(&self, form: &SignupForm, seed: &[Activity]) -> Result<(String, User)> {
        let mut gate = SessionGate::load(MemorySessionStore::new());
        let user = gate.signup(form)?;
        let session_id = self.open(gate, seed, Utc::now())?;
        tracing::info!(user = %user.name, traveler_type = ?user.traveler_type, "User signed up");
        Ok((session_id, user))
    }

    fn open(
        &self,
        gate: SessionGate<MemorySessionStore>,
        seed: &[Activity],
        now: DateTime<Utc>,
    ) -> Result<String> {
        self.purge_expired(now);

        let session_id = new_session_id()?;
        self.sessions.insert(
            session_id.clone(),
            BrowserSession {
                gate,
                activities: ActivityLog::seeded(seed),
                expires_at: now + self.ttl,
            },
        );
        Ok(session_id)
    }

    /// Drop every session that has expired by `now`.
    fn purge_expired(&self, now: DateTime<Utc>) {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| !session.is_expired(now));
        let purged = before.saturating_sub(self.sessions.len());
        if purged > 0 {
            tracing::info!(purged, "Expired sessions removed");
        }
    }

    /// Context for a session id, if the session exists and is signed in.
    pub fn context(&self, session_id: &str) -> Option<SessionContext> {
        self.context_at(session_id, Utc::now())
    }

    /// Context at `now`. An expired session is removed and yields `None`.
    pub fn context_at(&self, session_id: &str, now: DateTime<Utc>) -> Option<SessionContext> {
        if self.remove_if_expired(session_id, now) {
            return None;
        }
        self.sessions
            .get(session_id)
            .and_then(|session| session.gate.context().ok())
    }

    /// Enter `page` from the browser session `session_id`, if any.
    ///
    /// A missing, unknown or expired session enters as anonymous, so
    /// protected pages fail with `MissingSession`.
    pub fn enter(&self, session_id: Option<&str>, page: Page) -> Result<Option<SessionContext>> {
        self.enter_at(session_id, page, Utc::now())
    }

    /// Enter `page` at `now`.
    pub fn enter_at(
        &self,
        session_id: Option<&str>,
        page: Page,
        now: DateTime<Utc>,
    ) -> Result<Option<SessionContext>> {
        if let Some(session_id) = session_id {
            if !self.remove_if_expired(session_id, now) {
                if let Some(session) = self.sessions.get(session_id) {
                    return session.gate.enter(page);
                }
            }
        }
        SessionGate::load(MemorySessionStore::new()).enter(page)
    }

    fn remove_if_expired(&self, session_id: &str, now: DateTime<Utc>) -> bool {
        let expired = self
            .sessions
            .remove_if(session_id, |_, session| session.is_expired(now))
            .is_some();
        if expired {
            tracing::info!("Session expired");
        }
        expired
    }

    /// Log out and drop the session. Returns `false` if it did not exist.
    pub fn logout(&self, session_id: &str) -> bool {
        match self.sessions.remove(session_id) {
            Some((_, mut session)) => {
                session.gate.logout();
                tracing::info!("User signed out");
                true
            }
            None => false,
        }
    }

    /// Snapshot of the session's activity log.
    pub fn activities(&self, session_id: &str) -> Result<Vec<Activity>> {
        self.sessions
            .get(session_id)
            .map(|session| session.activities.entries().to_vec())
            .ok_or(AppError::MissingSession)
    }

    /// Append to the session's activity log. Returns the new activity and
    /// the updated point total.
    pub fn log_activity(
        &self,
        session_id: &str,
        category: &str,
        description: &str,
        table: &PointTable,
    ) -> Result<(Activity, u32)> {
        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or(AppError::MissingSession)?;
        let activity = session.activities.log(category, description, table)?.clone();
        Ok((activity, session.activities.total_points()))
    }
}

/// Random hex session id.
fn new_session_id() -> Result<String> {
    let mut bytes = [0u8; SESSION_ID_BYTES];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("System RNG failure")))?;
    Ok(hex::encode(bytes))
}
