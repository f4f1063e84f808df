//! admin-client
//!
//! Session handling, resource gateways and list/form state for the student
//! administration backend.

pub(crate) mod client;
pub(crate) mod confirm;
pub(crate) mod error;
pub(crate) mod form;
pub(crate) mod gateway;
pub(crate) mod list;
pub(crate) mod notice;
pub(crate) mod routing;
pub(crate) mod session;

#[cfg(test)]
mod tests;

pub use client::Client;
pub use confirm::{AutoConfirm, ConfirmDialog, ConfirmPrompt};
pub use error::{ClientError, Result as ClientResult};
pub use form::{FormController, FormMode, FormState, SubmitOutcome};
pub use gateway::{
    CourseGateway, Gateway, ProfessorGateway, Resource, StudentGateway, normalize_key,
};
pub use list::{
    DeleteOutcome, ListController, SortDirection, SortState, assign_placeholder_ids,
};
pub use notice::{Notice, NoticeLevel, Notifier};
pub use routing::{Navigator, Route, RouteGuard};
pub use session::{
    ADMIN_INFO_KEY, AUTH_TOKEN_KEY, FileStorage, MemoryStorage, SessionStorage, SessionStore,
};
