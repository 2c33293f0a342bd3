//! Domain layer of the Strahovochka portal client.
//!
//! Holds the models exchanged with the REST API, the error taxonomy, the
//! `PortalApi` and `LocalStore` seams, and the typed view tree that page
//! renderers produce.

pub mod api;
pub mod application;
pub mod config;
pub mod error;
pub mod format;
pub mod forms;
pub mod modal;
pub mod notification;
pub mod page;
pub mod session;
pub mod user;
pub mod view;

// Re-export common error type
pub use error::{PortalError, Result};
