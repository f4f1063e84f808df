mod admin_user;
mod course;
mod professor;
mod record_id;
mod student;
