//! Session storage layer.

pub mod session_store;

pub use session_store::{MemorySessionStore, SessionStore, USER_KEY};
