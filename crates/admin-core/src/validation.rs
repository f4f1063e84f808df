//! Form-level validation. Failures here are never sent to the backend.

use crate::{CoreError, CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

const MAX_EMAIL_LOCAL_LENGTH: usize = 64;
const MAX_EMAIL_LENGTH: usize = 254;

/// A single failed check on one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every failed check of a draft, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// True when at least one error concerns `field`
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Record an error when `value` is blank.
    pub fn require(&mut self, field: &'static str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.push(field, format!("{field} is required"));
            return false;
        }
        true
    }

    /// Record an error when `value` is blank or not an email address.
    pub fn require_email(&mut self, field: &'static str, value: &str) {
        if self.require(field, value) && !is_valid_email(value.trim()) {
            self.push(field, format!("{field} must be a valid email address"));
        }
    }

    /// Record an error when `value` is missing or outside `min..=max`.
    pub fn require_range(&mut self, field: &'static str, value: Option<i32>, min: i32, max: i32) {
        match value {
            None => self.push(field, format!("{field} is required")),
            Some(v) if v < min || v > max => {
                self.push(field, format!("{field} must be between {min} and {max}"))
            }
            Some(_) => {}
        }
    }

    /// Convert into a [`CoreError::Validation`] when any check failed.
    #[track_caller]
    pub fn into_result(self) -> CoreErrorResult<()> {
        if self.is_empty() {
            return Ok(());
        }
        Err(CoreError::Validation {
            message: self.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Structural email check: one `@`, non-empty local part, dot-separated
/// domain labels of letters, digits and inner hyphens.
pub fn is_valid_email(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LENGTH || value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > MAX_EMAIL_LOCAL_LENGTH || domain.contains('@') {
        return false;
    }

    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

/// Parse an optional integer form value; blank means "not set".
#[track_caller]
pub fn parse_optional_i32(field: &str, value: &str) -> CoreErrorResult<Option<i32>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i32>()
        .map(Some)
        .map_err(|_| CoreError::Validation {
            message: format!("{field} must be a whole number, got '{value}'"),
            location: ErrorLocation::from(Location::caller()),
        })
}
