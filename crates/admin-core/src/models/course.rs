use crate::models::nullable;
use crate::{
    ColumnValue, CoreError, CoreErrorResult, Draft, Record, RecordId, ResourceKind,
    ValidationErrors,
};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A course offered by a professor. Prices and durations are free text on
/// the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "nullable::string")]
    pub course_name: String,
    #[serde(deserialize_with = "nullable::string")]
    pub course_field: String,
    #[serde(deserialize_with = "nullable::string")]
    pub course_duration: String,
    #[serde(deserialize_with = "nullable::string")]
    pub course_price: String,
}

impl Record for Course {
    type Draft = CourseDraft;

    const KIND: ResourceKind = ResourceKind::Courses;
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "course_name",
        "course_field",
        "course_duration",
        "course_price",
    ];

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn to_draft(&self) -> CourseDraft {
        CourseDraft {
            course_name: self.course_name.clone(),
            course_field: self.course_field.clone(),
            course_duration: self.course_duration.clone(),
            course_price: self.course_price.clone(),
        }
    }

    fn column(&self, name: &str) -> Option<ColumnValue> {
        match name {
            "id" => Some(self.id.map_or(ColumnValue::Empty, |id| id.value().into())),
            "course_name" => Some(self.course_name.as_str().into()),
            "course_field" => Some(self.course_field.as_str().into()),
            "course_duration" => Some(self.course_duration.as_str().into()),
            "course_price" => Some(self.course_price.as_str().into()),
            _ => None,
        }
    }

    fn display_name(&self) -> String {
        self.course_name.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CourseDraft {
    pub course_name: String,
    pub course_field: String,
    pub course_duration: String,
    pub course_price: String,
}

impl Draft for CourseDraft {
    const FIELDS: &'static [&'static str] = &[
        "course_name",
        "course_field",
        "course_duration",
        "course_price",
    ];

    #[track_caller]
    fn set_field(&mut self, field: &str, value: &str) -> CoreErrorResult<()> {
        let target = match field {
            "course_name" => &mut self.course_name,
            "course_field" => &mut self.course_field,
            "course_duration" => &mut self.course_duration,
            "course_price" => &mut self.course_price,
            _ => {
                return Err(CoreError::UnknownField {
                    kind: ResourceKind::Courses.label(),
                    field: field.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };
        *target = value.to_string();
        Ok(())
    }

    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require("course_name", &self.course_name);
        errors.require("course_field", &self.course_field);
        errors.require("course_duration", &self.course_duration);
        errors.require("course_price", &self.course_price);
        errors
    }

    fn normalized(&self) -> Self {
        Self {
            course_name: self.course_name.trim().to_string(),
            course_field: self.course_field.trim().to_string(),
            course_duration: self.course_duration.trim().to_string(),
            course_price: self.course_price.trim().to_string(),
        }
    }
}
