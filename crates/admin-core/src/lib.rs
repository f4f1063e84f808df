pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreErrorResult};
pub use models::admin_user::{AdminUser, Credentials};
pub use models::column_value::ColumnValue;
pub use models::course::{Course, CourseDraft};
pub use models::draft::Draft;
pub use models::professor::{Professor, ProfessorDraft};
pub use models::record::Record;
pub use models::record_id::RecordId;
pub use models::resource_kind::ResourceKind;
pub use models::student::{Student, StudentDraft};
pub use validation::{FieldError, ValidationErrors};

/// Password sent on create when the form leaves it blank; the backend
/// requires one for every new student or professor.
pub const DEFAULT_PASSWORD: &str = "defaultPassword123";

pub const MIN_STUDENT_AGE: i32 = 16;
pub const MAX_STUDENT_AGE: i32 = 100;
