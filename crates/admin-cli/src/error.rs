use admin_client::ClientError;
use admin_config::ConfigError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Not signed in: run `admin login` first {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Invalid input: {message} {location}")]
    Invalid {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl CliError {
    #[track_caller]
    pub fn not_authenticated() -> Self {
        CliError::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid(message: impl Into<String>) -> Self {
        CliError::Invalid {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// One line for the terminal, without source locations.
    pub fn user_message(&self) -> String {
        match self {
            CliError::Config(e) => e.to_string(),
            CliError::Client(e) => e.user_message(),
            CliError::NotAuthenticated { .. } => {
                String::from("Not signed in: run `admin login` first")
            }
            CliError::Invalid { message, .. } => message.clone(),
            CliError::Logger { message } => message.clone(),
        }
    }
}

impl From<admin_core::CoreError> for CliError {
    #[track_caller]
    fn from(err: admin_core::CoreError) -> Self {
        CliError::Client(ClientError::from(err))
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
