//! User domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Role of a portal user. Gates which pages and actions are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Client,
    Manager,
    Admin,
}

impl Role {
    /// Human-readable role name used in headers and tables.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Manager => "Manager",
            Role::Client => "Client",
        }
    }

    /// Managers and admins may move applications through their lifecycle.
    pub fn can_process_applications(&self) -> bool {
        matches!(self, Role::Manager | Role::Admin)
    }
}

/// Identity of the signed-in user, as returned by `/api/login` and `/api/me`.
///
/// The server sends more columns than these; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub full_name: String,
    pub role: Role,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl SessionUser {
    /// First character of the full name, shown as the avatar.
    pub fn initial(&self) -> String {
        self.full_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// A user record as listed on the admin users page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// A manager a new client may pick during registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    pub id: i64,
    pub full_name: String,
    pub email: String,
}

impl Manager {
    /// Option label used by the registration form.
    pub fn label(&self) -> String {
        format!("{} ({})", self.full_name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_round_trips_lowercase() {
        assert_eq!(Role::from_str("manager").unwrap(), Role::Manager);
        assert_eq!(Role::Admin.to_string(), "admin");
        assert!(Role::from_str("superuser").is_err());
    }

    #[test]
    fn test_role_permissions() {
        assert!(!Role::Client.can_process_applications());
        assert!(Role::Manager.can_process_applications());
        assert!(Role::Admin.can_process_applications());
    }

    #[test]
    fn test_session_user_ignores_extra_server_columns() {
        let json = r#"{
            "id": 3,
            "username": "client1",
            "role": "client",
            "full_name": "Petrov Petr",
            "email": "client@mail.ru",
            "age": null,
            "address": null,
            "created_at": "2024-05-01 10:00:00"
        }"#;
        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.role, Role::Client);
        assert_eq!(user.phone, None);
        assert_eq!(user.initial(), "P");
    }

    #[test]
    fn test_manager_label() {
        let manager = Manager {
            id: 2,
            full_name: "Ivanov Ivan".to_string(),
            email: "manager@example.com".to_string(),
        };
        assert_eq!(manager.label(), "Ivanov Ivan (manager@example.com)");
    }
}
