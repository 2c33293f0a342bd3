use std::sync::Arc;

use portal_core::api::PortalApi;
use portal_core::error::Result;
use portal_core::session::{AuthGrant, LocalStore, Session, TOKEN_KEY, USER_KEY};
use portal_core::user::{Role, SessionUser};
use tokio::sync::RwLock;

/// Owns the authenticated identity and its bearer credential.
///
/// `SessionManager` is responsible for:
/// - Restoring a persisted session on startup and checking it with the API
/// - Persisting a new session after login or registration
/// - Clearing the session on logout or when the server rejects its token
///
/// The token and user record are persisted as two independent local storage
/// fields that are always present or absent together.
pub struct SessionManager {
    api: Arc<dyn PortalApi>,
    store: Arc<dyn LocalStore>,
    current: RwLock<Option<Session>>,
}

impl SessionManager {
    pub fn new(api: Arc<dyn PortalApi>, store: Arc<dyn LocalStore>) -> Self {
        Self {
            api,
            store,
            current: RwLock::new(None),
        }
    }

    /// Restores the persisted session and checks it with `GET /api/me`.
    ///
    /// Never fails: any problem (missing field, corrupt record, rejected or
    /// unreachable server) degrades to the logged-out state.
    ///
    /// # Returns
    ///
    /// `true` if a session is active afterwards.
    pub async fn restore(&self) -> bool {
        let token = self.read_field(TOKEN_KEY);
        let user = self.read_field(USER_KEY);

        let (token, user_json) = match (token, user) {
            (Some(token), Some(user)) => (token, user),
            (None, None) => {
                tracing::debug!("no persisted session");
                return false;
            }
            _ => {
                tracing::warn!("persisted session is missing a field, removing the other");
                self.discard().await;
                return false;
            }
        };

        if serde_json::from_str::<SessionUser>(&user_json).is_err() {
            tracing::warn!("persisted user record is unreadable");
            self.discard().await;
            return false;
        }

        match self.api.me(Some(&token)).await {
            Ok(user) => {
                // The server's copy is authoritative.
                if let Ok(json) = serde_json::to_string(&user) {
                    if let Err(e) = self.store.set_item(USER_KEY, &json) {
                        tracing::warn!(error = %e, "failed to refresh persisted user record");
                    }
                }
                tracing::info!(user_id = user.id, role = %user.role, "session restored");
                *self.current.write().await = Some(Session::new(token, user));
                true
            }
            Err(e) => {
                tracing::info!(error = %e, "persisted session rejected");
                self.discard().await;
                false
            }
        }
    }

    /// Persists a new session and makes it current.
    ///
    /// If the user record cannot be written after the token was, the token is
    /// removed again and the error returned; the previous state stays.
    pub async fn establish(&self, grant: AuthGrant) -> Result<Session> {
        let session = Session::from(grant);
        let user_json = serde_json::to_string(&session.user)?;

        let mut current = self.current.write().await;
        self.store.set_item(TOKEN_KEY, &session.token)?;
        if let Err(e) = self.store.set_item(USER_KEY, &user_json) {
            if let Err(rollback) = self.store.remove_item(TOKEN_KEY) {
                tracing::error!(error = %rollback, "failed to roll back persisted token");
            }
            return Err(e);
        }

        tracing::info!(user_id = session.user.id, role = %session.role(), "session established");
        *current = Some(session.clone());
        Ok(session)
    }

    /// Logs out: best-effort `POST /api/logout`, then drops all local state
    /// whatever the server answered.
    pub async fn clear(&self) {
        if let Some(token) = self.token().await {
            if let Err(e) = self.api.logout(Some(&token)).await {
                tracing::info!(error = %e, "server-side logout failed, clearing locally");
            }
        }
        self.discard().await;
    }

    /// Drops the session locally without contacting the server.
    ///
    /// Used when the persisted session turns out to be unusable.
    pub async fn discard(&self) {
        let mut current = self.current.write().await;
        *current = None;
        self.remove_persisted();
    }

    /// Drops the session only if it still carries `bearer`.
    ///
    /// A 401 only concerns the token its request carried. A session
    /// established after that request left is kept.
    ///
    /// # Returns
    ///
    /// `true` if the session was dropped.
    pub async fn discard_if(&self, bearer: &str) -> bool {
        let mut current = self.current.write().await;
        if current.as_ref().map(|s| s.token.as_str()) != Some(bearer) {
            tracing::debug!("rejected token is no longer current, keeping session");
            return false;
        }
        *current = None;
        self.remove_persisted();
        true
    }

    /// Removes both persisted fields. Callers hold the write lock so a
    /// concurrent `establish` cannot interleave.
    fn remove_persisted(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.store.remove_item(key) {
                tracing::warn!(key, error = %e, "failed to remove persisted session field");
            }
        }
        tracing::debug!("session cleared");
    }

    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    pub async fn token(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|s| s.token.clone())
    }

    pub async fn role(&self) -> Option<Role> {
        self.current.read().await.as_ref().map(|s| s.role())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    fn read_field(&self, key: &str) -> Option<String> {
        match self.store.get_item(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read persisted session field");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "manager_test.rs"]
mod tests;
