//! Page renderers.
//!
//! Each renderer is a pure function from typed data to a [`View`]. Role
//! rules live here; the router only decides which renderer to call and
//! what data to hand it.
//!
//! # Module Structure
//!
//! - `chrome`: Header with brand, navigation and auth buttons
//! - `home`: Landing page
//! - `auth`: Login and registration forms
//! - `dashboard`: Statistics and recent applications
//! - `applications`: Application listing
//! - `users`: Admin user listing
//! - `profile`: Profile card
//! - `new_application`: New-application form
//!
//! [`View`]: portal_core::view::View

pub mod applications;
pub mod auth;
pub mod chrome;
pub mod dashboard;
pub mod home;
pub mod new_application;
pub mod profile;
pub mod users;

/// Empty-state text of the application listings.
pub const NO_APPLICATIONS: &str = "No applications";

/// Empty-state text of the users listing.
pub const NO_USERS: &str = "No users";
