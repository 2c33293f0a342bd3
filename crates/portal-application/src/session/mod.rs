//! Session application services.
//!
//! This module contains the session lifecycle: restoring a persisted
//! session on startup, establishing a new one and clearing it.

mod manager;

pub use manager::SessionManager;
