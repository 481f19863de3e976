// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - catalog, view-model and session logic.

pub mod activity;
pub mod catalog;
pub mod session;
pub mod view_model;

pub use activity::ActivityLog;
pub use catalog::Catalog;
pub use session::{SessionContext, SessionGate, SessionRegistry, SessionState};
