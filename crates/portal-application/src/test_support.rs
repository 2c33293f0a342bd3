//! Hand-written test doubles shared by the application-layer tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portal_core::api::{Credentials, PortalApi, Registration};
use portal_core::application::{Application, ApplicationStatus, NewApplication};
use portal_core::session::{AuthGrant, LocalStore};
use portal_core::user::{Manager, Role, SessionUser, User};
use portal_core::{PortalError, Result};
use portal_infrastructure::MemoryLocalStore;
use tokio::sync::Semaphore;

/// One recorded API call.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub endpoint: &'static str,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// Scriptable `PortalApi` that records every call.
pub struct MockApi {
    pub calls: Mutex<Vec<Call>>,
    pub login: Mutex<Result<AuthGrant>>,
    pub register: Mutex<Result<AuthGrant>>,
    pub logout: Mutex<Result<()>>,
    pub me: Mutex<Result<SessionUser>>,
    pub managers: Mutex<Result<Vec<Manager>>>,
    pub applications: Mutex<Result<Vec<Application>>>,
    pub create_application: Mutex<Result<i64>>,
    pub update_status: Mutex<Result<()>>,
    pub users: Mutex<Result<Vec<User>>>,
    pub delete_user: Mutex<Result<()>>,
    /// When set, `applications()` waits for a permit before answering.
    pub applications_gate: Mutex<Option<Arc<Semaphore>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            login: Mutex::new(Err(PortalError::AuthExpired)),
            register: Mutex::new(Err(PortalError::server(400, None))),
            logout: Mutex::new(Ok(())),
            me: Mutex::new(Err(PortalError::AuthExpired)),
            managers: Mutex::new(Ok(Vec::new())),
            applications: Mutex::new(Ok(Vec::new())),
            create_application: Mutex::new(Ok(1)),
            update_status: Mutex::new(Ok(())),
            users: Mutex::new(Ok(Vec::new())),
            delete_user: Mutex::new(Ok(())),
            applications_gate: Mutex::new(None),
        }
    }

    pub fn set<T>(slot: &Mutex<Result<T>>, value: Result<T>) {
        *slot.lock().unwrap() = value;
    }

    pub fn calls_to(&self, endpoint: &str) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.endpoint == endpoint)
            .cloned()
            .collect()
    }

    pub fn count(&self, endpoint: &str) -> usize {
        self.calls_to(endpoint).len()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, endpoint: &'static str, bearer: Option<&str>, body: Option<serde_json::Value>) {
        self.calls.lock().unwrap().push(Call {
            endpoint,
            bearer: bearer.map(str::to_string),
            body,
        });
    }

    fn answer<T: Clone>(slot: &Mutex<Result<T>>) -> Result<T> {
        slot.lock().unwrap().clone()
    }
}

#[async_trait]
impl PortalApi for MockApi {
    async fn login(&self, bearer: Option<&str>, credentials: &Credentials) -> Result<AuthGrant> {
        self.record("login", bearer, serde_json::to_value(credentials).ok());
        Self::answer(&self.login)
    }

    async fn register(&self, bearer: Option<&str>, registration: &Registration) -> Result<AuthGrant> {
        self.record("register", bearer, serde_json::to_value(registration).ok());
        Self::answer(&self.register)
    }

    async fn logout(&self, bearer: Option<&str>) -> Result<()> {
        self.record("logout", bearer, None);
        Self::answer(&self.logout)
    }

    async fn me(&self, bearer: Option<&str>) -> Result<SessionUser> {
        self.record("me", bearer, None);
        Self::answer(&self.me)
    }

    async fn managers(&self, bearer: Option<&str>) -> Result<Vec<Manager>> {
        self.record("managers", bearer, None);
        Self::answer(&self.managers)
    }

    async fn applications(&self, bearer: Option<&str>) -> Result<Vec<Application>> {
        self.record("applications", bearer, None);
        let gate = self.applications_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.acquire().await.unwrap().forget();
        }
        Self::answer(&self.applications)
    }

    async fn create_application(
        &self,
        bearer: Option<&str>,
        application: &NewApplication,
    ) -> Result<i64> {
        self.record("create_application", bearer, serde_json::to_value(application).ok());
        Self::answer(&self.create_application)
    }

    async fn update_application_status(
        &self,
        bearer: Option<&str>,
        application_id: i64,
        status: ApplicationStatus,
    ) -> Result<()> {
        self.record(
            "update_status",
            bearer,
            Some(serde_json::json!({ "id": application_id, "status": status })),
        );
        Self::answer(&self.update_status)
    }

    async fn users(&self, bearer: Option<&str>) -> Result<Vec<User>> {
        self.record("users", bearer, None);
        Self::answer(&self.users)
    }

    async fn delete_user(&self, bearer: Option<&str>, user_id: i64) -> Result<()> {
        self.record("delete_user", bearer, Some(serde_json::json!({ "id": user_id })));
        Self::answer(&self.delete_user)
    }
}

/// Local store whose writes to one key fail.
pub struct FailingStore {
    pub inner: MemoryLocalStore,
    pub failing_key: &'static str,
}

impl LocalStore for FailingStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if key == self.failing_key {
            return Err(PortalError::storage("disk full"));
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.inner.remove_item(key)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn session_user(role: Role) -> SessionUser {
    let (id, full_name, email) = match role {
        Role::Admin => (1, "System Administrator", "admin@example.com"),
        Role::Manager => (2, "Ivanov Ivan", "manager@example.com"),
        Role::Client => (3, "Petrov Petr", "client@example.com"),
    };
    SessionUser {
        id,
        full_name: full_name.to_string(),
        role,
        email: email.to_string(),
        phone: None,
    }
}

pub fn grant(role: Role) -> AuthGrant {
    AuthGrant {
        token: format!("token-{}", role),
        user: session_user(role),
    }
}

pub fn application(id: i64, status: ApplicationStatus) -> Application {
    Application {
        id,
        insurance_type_id: 1,
        insurance_name: Some("House".to_string()),
        client_id: 30 + id,
        client_name: Some(format!("Client {}", id)),
        manager_name: None,
        status,
        price: None,
        created_at: "2024-05-01 10:00:00".to_string(),
        details: serde_json::json!({ "description": "Brick house" }),
    }
}

pub fn user(id: i64, role: Role) -> User {
    User {
        id,
        full_name: format!("User {}", id),
        username: format!("user{}", id),
        email: format!("user{}@example.com", id),
        role,
        phone: None,
        created_at: "2024-05-01 10:00:00".to_string(),
    }
}
