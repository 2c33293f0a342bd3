//! REST API interface consumed by the portal.
//!
//! Defines the operations the router needs from the server. The HTTP
//! implementation lives in `portal-interaction`; tests substitute their own.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::{Application, ApplicationStatus, NewApplication};
use crate::error::Result;
use crate::session::AuthGrant;
use crate::user::{Manager, Role, SessionUser, User};

/// Body of `POST /api/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /api/register`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub manager_id: Option<i64>,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("manager_id", &self.manager_id)
            .finish_non_exhaustive()
    }
}

/// Operations offered by the portal's REST API.
///
/// Every call takes the bearer token of the active session, if any, and
/// makes at most one attempt. Errors follow the portal taxonomy: 401 maps to
/// [`PortalError::AuthExpired`](crate::PortalError::AuthExpired), other
/// non-success statuses to `Server`, transport and parse failures to
/// `Network`.
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// `POST /api/login`
    async fn login(&self, bearer: Option<&str>, credentials: &Credentials) -> Result<AuthGrant>;

    /// `POST /api/register`
    async fn register(
        &self,
        bearer: Option<&str>,
        registration: &Registration,
    ) -> Result<AuthGrant>;

    /// `POST /api/logout`
    async fn logout(&self, bearer: Option<&str>) -> Result<()>;

    /// `GET /api/me`
    async fn me(&self, bearer: Option<&str>) -> Result<SessionUser>;

    /// `GET /api/managers`
    async fn managers(&self, bearer: Option<&str>) -> Result<Vec<Manager>>;

    /// `GET /api/applications`, filtered by the caller's role on the server.
    async fn applications(&self, bearer: Option<&str>) -> Result<Vec<Application>>;

    /// `POST /api/applications`. Returns the new application's id.
    async fn create_application(
        &self,
        bearer: Option<&str>,
        application: &NewApplication,
    ) -> Result<i64>;

    /// `PUT /api/applications/:id/status`
    async fn update_application_status(
        &self,
        bearer: Option<&str>,
        application_id: i64,
        status: ApplicationStatus,
    ) -> Result<()>;

    /// `GET /api/users`
    async fn users(&self, bearer: Option<&str>) -> Result<Vec<User>>;

    /// `DELETE /api/users/:id`
    async fn delete_user(&self, bearer: Option<&str>, user_id: i64) -> Result<()>;
}
