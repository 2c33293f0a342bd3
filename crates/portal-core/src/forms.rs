//! Raw form input and its presence validation.
//!
//! Forms hold exactly what the user typed. `validate()` performs the only
//! client-side checks the portal makes (required fields present) and turns
//! the input into a request body. No request is sent for invalid input.

use std::str::FromStr;

use crate::api::{Credentials, Registration};
use crate::application::NewApplication;
use crate::error::{PortalError, Result};
use crate::user::Role;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Input of the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials> {
        if is_blank(&self.username) || is_blank(&self.password) {
            return Err(PortalError::validation("Enter username and password"));
        }
        Ok(Credentials {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Input of the registration form. `role` and `manager_id` hold the raw
/// selector values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub manager_id: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: Role::Client.to_string(),
            manager_id: String::new(),
        }
    }
}

impl RegisterForm {
    /// Fields checked for presence, in the order they are reported.
    fn required(&self) -> [(&'static str, &str); 6] {
        [
            ("username", &self.username),
            ("password", &self.password),
            ("full_name", &self.full_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("role", &self.role),
        ]
    }

    pub fn validate(&self) -> Result<Registration> {
        if let Some((field, _)) = self.required().into_iter().find(|(_, v)| is_blank(v)) {
            return Err(PortalError::validation(format!("Fill in the field {}", field)));
        }

        let role = Role::from_str(self.role.trim())
            .ok()
            .filter(|r| matches!(r, Role::Client | Role::Manager))
            .ok_or_else(|| PortalError::validation("Fill in the field role"))?;

        // The manager selector only applies to clients.
        let manager_id = match role {
            Role::Client if !is_blank(&self.manager_id) => Some(
                self.manager_id
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| PortalError::validation("Fill in the field manager_id"))?,
            ),
            _ => None,
        };

        Ok(Registration {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            role,
            manager_id,
        })
    }
}

/// Input of the new-application form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewApplicationForm {
    pub insurance_type_id: String,
    pub details: String,
}

impl NewApplicationForm {
    pub fn validate(&self) -> Result<NewApplication> {
        let fill_all = || PortalError::validation("Fill in all fields");
        if is_blank(&self.insurance_type_id) || is_blank(&self.details) {
            return Err(fill_all());
        }
        let insurance_type_id = self
            .insurance_type_id
            .trim()
            .parse::<i64>()
            .map_err(|_| fill_all())?;
        Ok(NewApplication::standard(
            insurance_type_id,
            self.details.trim(),
        ))
    }
}
