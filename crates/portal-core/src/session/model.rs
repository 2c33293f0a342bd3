//! Session domain model.

use serde::{Deserialize, Serialize};

use crate::user::{Role, SessionUser};

/// Token and user record returned by `/api/login` and `/api/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthGrant {
    pub token: String,
    pub user: SessionUser,
}

/// The authenticated identity together with its bearer credential.
///
/// Owned by the session manager; everything else reads clones.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub user: SessionUser,
    pub token: String,
}

impl Session {
    pub fn new(token: impl Into<String>, user: SessionUser) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.user.role
    }
}

impl From<AuthGrant> for Session {
    fn from(grant: AuthGrant) -> Self {
        Self::new(grant.token, grant.user)
    }
}

// The token must never end up in logs.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            id: 1,
            full_name: "System Administrator".to_string(),
            role: Role::Admin,
            email: "admin@example.com".to_string(),
            phone: None,
        }
    }

    #[test]
    fn test_debug_redacts_token() {
        let session = Session::new("secret-token-value", user());
        let rendered = format!("{:?}", session);
        assert!(!rendered.contains("secret-token-value"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_session_from_grant() {
        let grant: AuthGrant = serde_json::from_value(serde_json::json!({
            "token": "abc",
            "user": {
                "id": 1,
                "full_name": "System Administrator",
                "role": "admin",
                "email": "admin@example.com"
            }
        }))
        .unwrap();
        let session = Session::from(grant);
        assert_eq!(session.token, "abc");
        assert_eq!(session.role(), Role::Admin);
    }
}
