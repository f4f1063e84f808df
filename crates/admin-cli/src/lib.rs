//! admin-cli library
//!
//! Command definitions and the glue that drives the admin client from a
//! terminal.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod course_commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod professor_commands;
pub(crate) mod prompt;
pub(crate) mod student_commands;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use error::{CliError, Result as CliErrorResult};
pub use logger::initialize as initialize_logger;
