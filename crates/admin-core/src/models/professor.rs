use crate::models::nullable;
use crate::{
    ColumnValue, CoreError, CoreErrorResult, DEFAULT_PASSWORD, Draft, Record, RecordId,
    ResourceKind, ValidationErrors,
};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Professor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "nullable::string")]
    pub name: String,
    #[serde(deserialize_with = "nullable::string")]
    pub email: String,
    #[serde(deserialize_with = "nullable::string")]
    pub department: String,
}

impl Record for Professor {
    type Draft = ProfessorDraft;

    const KIND: ResourceKind = ResourceKind::Professors;
    const COLUMNS: &'static [&'static str] = &["id", "name", "email", "department"];

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn to_draft(&self) -> ProfessorDraft {
        ProfessorDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
            ..ProfessorDraft::default()
        }
    }

    fn column(&self, name: &str) -> Option<ColumnValue> {
        match name {
            "id" => Some(self.id.map_or(ColumnValue::Empty, |id| id.value().into())),
            "name" => Some(self.name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "department" => Some(self.department.as_str().into()),
            _ => None,
        }
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// Professor form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfessorDraft {
    pub name: String,
    pub email: String,
    pub department: String,
    pub password: String,
}

impl Default for ProfessorDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            department: String::new(),
            password: String::from(DEFAULT_PASSWORD),
        }
    }
}

impl Draft for ProfessorDraft {
    const FIELDS: &'static [&'static str] = &["name", "email", "department", "password"];

    #[track_caller]
    fn set_field(&mut self, field: &str, value: &str) -> CoreErrorResult<()> {
        match field {
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            "department" => self.department = value.to_string(),
            "password" => self.password = value.to_string(),
            _ => {
                return Err(CoreError::UnknownField {
                    kind: ResourceKind::Professors.label(),
                    field: field.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }
        Ok(())
    }

    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name);
        errors.require_email("email", &self.email);
        errors.require("department", &self.department);
        errors
    }

    fn normalized(&self) -> Self {
        let password = if self.password.is_empty() {
            String::from(DEFAULT_PASSWORD)
        } else {
            self.password.clone()
        };

        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
            password,
        }
    }
}
