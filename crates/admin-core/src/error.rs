use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid record id: {value} {location}")]
    InvalidRecordId {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown field '{field}' for {kind} {location}")]
    UnknownField {
        kind: &'static str,
        field: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
