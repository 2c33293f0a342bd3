//! Page identifiers known to the router.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A routable page. Identifiers print and parse as kebab-case strings
/// (`"new-application"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Login,
    Register,
    Dashboard,
    Applications,
    Users,
    Profile,
    NewApplication,
}

impl Page {
    /// Pages that only make sense with a signed-in user.
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Page::Dashboard
                | Page::Applications
                | Page::Users
                | Page::Profile
                | Page::NewApplication
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_page_identifiers() {
        let ids: Vec<String> = Page::iter().map(|p| p.to_string()).collect();
        assert_eq!(
            ids,
            vec![
                "home",
                "login",
                "register",
                "dashboard",
                "applications",
                "users",
                "profile",
                "new-application"
            ]
        );
    }

    #[test]
    fn test_page_parses_from_identifier() {
        assert_eq!(Page::from_str("new-application").unwrap(), Page::NewApplication);
        assert!(Page::from_str("settings").is_err());
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_requires_session() {
        assert!(!Page::Home.requires_session());
        assert!(!Page::Login.requires_session());
        assert!(!Page::Register.requires_session());
        assert!(Page::Users.requires_session());
        assert!(Page::NewApplication.requires_session());
    }
}
