//! The signed-in administrator and login credentials.

use crate::{RecordId, ValidationErrors};

use serde::{Deserialize, Serialize};

/// Current-user record persisted alongside the session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: RecordId,
    pub name: String,
    pub email: String,
}

/// Login form values.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require_email("email", &self.email);
        errors.require("password", &self.password);
        errors
    }
}

// Never print the password
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}
