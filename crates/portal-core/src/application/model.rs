//! Application domain models.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum::{Display, EnumString};

/// Subtype sent with every application created from the portal.
pub const STANDARD_SUBTYPE: &str = "standard";

/// Three-state lifecycle of an insurance application.
///
/// The wire values are the English strings. The Russian values written by
/// older servers are accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum ApplicationStatus {
    #[serde(rename = "in progress", alias = "В процессе")]
    #[strum(serialize = "in progress")]
    InProgress,
    #[serde(rename = "processed", alias = "Обработана")]
    #[strum(serialize = "processed")]
    Processed,
    #[serde(rename = "rejected", alias = "Отклонена")]
    #[strum(serialize = "rejected")]
    Rejected,
}

impl ApplicationStatus {
    /// Only applications still in progress can be processed or rejected.
    pub fn is_open(&self) -> bool {
        matches!(self, ApplicationStatus::InProgress)
    }
}

/// An insurance application as listed by `/api/applications`.
///
/// Name columns are joined by the server and depend on the caller's role:
/// clients get `manager_name`, managers get `client_name`, admins get both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub insurance_type_id: i64,
    #[serde(default)]
    pub insurance_name: Option<String>,
    pub client_id: i64,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub manager_name: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub details: Value,
}

impl Application {
    /// Free-text description for the details dialog.
    ///
    /// Older servers store `details` as a JSON-encoded string; both forms
    /// are read.
    pub fn details_text(&self) -> Option<String> {
        let details = match &self.details {
            Value::String(raw) => {
                serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.clone()))
            }
            other => other.clone(),
        };
        match details {
            Value::Null => None,
            Value::String(text) if text.trim().is_empty() => None,
            Value::String(text) => Some(text),
            Value::Object(ref map) => match map.get("description") {
                Some(Value::String(text)) => Some(text.clone()),
                _ if map.is_empty() => None,
                _ => Some(details.to_string()),
            },
            other => Some(other.to_string()),
        }
    }
}

/// Body of `POST /api/applications`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewApplication {
    pub insurance_type_id: i64,
    pub insurance_subtype: String,
    pub details: Value,
}

impl NewApplication {
    /// Builds a standard-subtype application with a free-text description.
    pub fn standard(insurance_type_id: i64, description: impl Into<String>) -> Self {
        Self {
            insurance_type_id,
            insurance_subtype: STANDARD_SUBTYPE.to_string(),
            details: json!({ "description": description.into() }),
        }
    }
}

/// An entry of the insurance type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsuranceType {
    pub id: i64,
    pub name: &'static str,
}

/// Insurance types offered on the new-application page.
pub const INSURANCE_CATALOGUE: [InsuranceType; 3] = [
    InsuranceType { id: 1, name: "House" },
    InsuranceType { id: 2, name: "Car - OSAGO" },
    InsuranceType { id: 3, name: "Car - KASKO" },
];

impl InsuranceType {
    pub fn find(id: i64) -> Option<InsuranceType> {
        INSURANCE_CATALOGUE.iter().copied().find(|t| t.id == id)
    }
}
