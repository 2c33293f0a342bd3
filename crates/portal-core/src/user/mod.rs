//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: Roles, the signed-in identity and the admin-facing user record
//!
//! # Usage
//!
//! ```ignore
//! use portal_core::user::{Role, SessionUser, User, Manager};
//! ```

mod model;

// Re-export public API
pub use model::{Manager, Role, SessionUser, User};
