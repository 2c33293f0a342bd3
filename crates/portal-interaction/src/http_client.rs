//! `HttpPortalClient` - reqwest implementation of [`PortalApi`].
//!
//! The client is stateless: the caller passes the bearer token of the active
//! session with every call. Each call is a single attempt without timeout or
//! retry.

use async_trait::async_trait;
use portal_core::api::{Credentials, PortalApi, Registration};
use portal_core::application::{Application, ApplicationStatus, NewApplication};
use portal_core::session::AuthGrant;
use portal_core::user::{Manager, SessionUser, User};
use portal_core::{PortalError, Result};
use reqwest::{Client, Method, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::dto::{
    ApplicationsEnvelope, CreatedEnvelope, ErrorBody, ManagersEnvelope, MessageEnvelope,
    StatusBody, UserEnvelope, UsersEnvelope,
};

/// REST client for the portal server.
#[derive(Clone)]
pub struct HttpPortalClient {
    client: Client,
    base_url: String,
}

impl HttpPortalClient {
    /// Creates a client for the server at `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one request and decodes the JSON reply.
    ///
    /// - 401 becomes [`PortalError::AuthExpired`]
    /// - other non-success statuses become `Server`, carrying the body's
    ///   `error` field or the generic fallback
    /// - transport failures and undecodable success bodies become `Network`
    async fn request<B, R>(
        &self,
        method: Method,
        path: &str,
        bearer: Option<&str>,
        body: Option<&B>,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, path, authenticated = bearer.is_some(), "api request");

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "api request failed");
            PortalError::network(e.to_string())
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::info!(%method, path, "api returned 401");
            return Err(PortalError::AuthExpired);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.error);
            tracing::warn!(%method, path, status = status.as_u16(), "api error response");
            return Err(PortalError::server(status.as_u16(), message));
        }

        response.json::<R>().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "failed to decode api response");
            PortalError::network(format!("Failed to parse response: {}", e))
        })
    }

    async fn get<R: DeserializeOwned>(&self, path: &str, bearer: Option<&str>) -> Result<R> {
        self.request::<(), R>(Method::GET, path, bearer, None).await
    }
}

#[async_trait]
impl PortalApi for HttpPortalClient {
    async fn login(&self, bearer: Option<&str>, credentials: &Credentials) -> Result<AuthGrant> {
        self.request(Method::POST, "/api/login", bearer, Some(credentials))
            .await
    }

    async fn register(
        &self,
        bearer: Option<&str>,
        registration: &Registration,
    ) -> Result<AuthGrant> {
        self.request(Method::POST, "/api/register", bearer, Some(registration))
            .await
    }

    async fn logout(&self, bearer: Option<&str>) -> Result<()> {
        self.request::<(), MessageEnvelope>(Method::POST, "/api/logout", bearer, None)
            .await
            .map(|_| ())
    }

    async fn me(&self, bearer: Option<&str>) -> Result<SessionUser> {
        self.get::<UserEnvelope>("/api/me", bearer)
            .await
            .map(|e| e.user)
    }

    async fn managers(&self, bearer: Option<&str>) -> Result<Vec<Manager>> {
        self.get::<ManagersEnvelope>("/api/managers", bearer)
            .await
            .map(|e| e.managers)
    }

    async fn applications(&self, bearer: Option<&str>) -> Result<Vec<Application>> {
        self.get::<ApplicationsEnvelope>("/api/applications", bearer)
            .await
            .map(|e| e.applications)
    }

    async fn create_application(
        &self,
        bearer: Option<&str>,
        application: &NewApplication,
    ) -> Result<i64> {
        self.request::<_, CreatedEnvelope>(
            Method::POST,
            "/api/applications",
            bearer,
            Some(application),
        )
        .await
        .map(|e| e.application_id)
    }

    async fn update_application_status(
        &self,
        bearer: Option<&str>,
        application_id: i64,
        status: ApplicationStatus,
    ) -> Result<()> {
        let path = format!("/api/applications/{}/status", application_id);
        self.request::<_, MessageEnvelope>(
            Method::PUT,
            &path,
            bearer,
            Some(&StatusBody { status }),
        )
        .await
        .map(|_| ())
    }

    async fn users(&self, bearer: Option<&str>) -> Result<Vec<User>> {
        self.get::<UsersEnvelope>("/api/users", bearer)
            .await
            .map(|e| e.users)
    }

    async fn delete_user(&self, bearer: Option<&str>, user_id: i64) -> Result<()> {
        let path = format!("/api/users/{}", user_id);
        self.request::<(), MessageEnvelope>(Method::DELETE, &path, bearer, None)
            .await
            .map(|_| ())
    }
}
