//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: The authenticated session and the login/register grant
//! - `store`: Local storage interface the session is persisted through

mod model;
mod store;

pub use model::{AuthGrant, Session};
pub use store::{LocalStore, TOKEN_KEY, USER_KEY};
