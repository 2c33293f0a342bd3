//! Wire envelopes of the portal REST API.

use portal_core::application::{Application, ApplicationStatus};
use portal_core::user::{Manager, SessionUser, User};
use serde::{Deserialize, Serialize};

/// `{"user": {...}}` from `/api/me`.
#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: SessionUser,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ManagersEnvelope {
    pub managers: Vec<Manager>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplicationsEnvelope {
    pub applications: Vec<Application>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UsersEnvelope {
    pub users: Vec<User>,
}

/// `{"message": "..."}` acknowledgement of a mutating call.
#[derive(Debug, Deserialize)]
pub(crate) struct MessageEnvelope {
    #[serde(default)]
    #[allow(dead_code)]
    pub message: Option<String>,
}

/// Reply of `POST /api/applications`.
#[derive(Debug, Deserialize)]
pub(crate) struct CreatedEnvelope {
    pub application_id: i64,
}

/// Error body of any non-success response.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct StatusBody {
    pub status: ApplicationStatus,
}
