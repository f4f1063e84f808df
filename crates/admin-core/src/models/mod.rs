pub mod admin_user;
pub mod column_value;
pub mod course;
pub mod draft;
pub(crate) mod nullable;
pub mod professor;
pub mod record;
pub mod record_id;
pub mod resource_kind;
pub mod student;
