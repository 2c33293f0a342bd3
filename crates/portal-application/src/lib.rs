//! Application layer of the portal client.
//!
//! Coordinates the domain types with an injected `PortalApi` and
//! `LocalStore`: the session lifecycle, the banner, page rendering and the
//! router that ties them together.

pub mod notification_center;
pub mod router;
pub mod session;
pub mod views;

#[cfg(test)]
mod test_support;

pub use notification_center::NotificationCenter;
pub use router::{Dispatch, Router, Screen};
pub use session::SessionManager;
