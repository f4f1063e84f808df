use admin_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors surfaced by gateways, the session store and the controllers.
///
/// Every variant renders to a single human-readable line through
/// [`ClientError::user_message`]; none of them is fatal to the console.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server error: {message} (status: {status}) {location}")]
    Server {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Auth error: {message} {location}")]
    Auth {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid response: {message} {location}")]
    InvalidResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Transport {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        ClientError::Server {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        ClientError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn auth(message: impl Into<String>) -> Self {
        ClientError::Auth {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        ClientError::InvalidResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage(message: impl Into<String>) -> Self {
        ClientError::Storage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The message shown to the operator in a notice: no locations, no
    /// error-chain noise.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Transport { message, .. } => message.clone(),
            ClientError::Server { message, .. } => message.clone(),
            ClientError::Validation { message, .. } => message.clone(),
            ClientError::Auth { message, .. } => message.clone(),
            ClientError::InvalidResponse { message, .. } => message.clone(),
            ClientError::Json { message, .. } => format!("Malformed server response: {message}"),
            ClientError::Storage { message, .. } => message.clone(),
            ClientError::Core(core) => match core {
                CoreError::Validation { message, .. } => message.clone(),
                CoreError::InvalidRecordId { value, .. } => format!("Invalid record id: {value}"),
                CoreError::UnknownField { kind, field, .. } => {
                    format!("Unknown {} field: {field}", kind.to_lowercase())
                }
            },
        }
    }

    /// HTTP status for server errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
