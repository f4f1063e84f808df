use crate::{ClientError, ClientResult};

use admin_core::{Course, Professor, Record, Student};

use serde_json::Value;

/// Wire shape of a record collection on the backend.
pub trait Resource: Record {
    /// Primary-key field name the backend uses instead of `id`
    const BACKEND_KEY: &'static str;

    /// Extract the rows of a list response.
    fn unwrap_list(body: Value) -> ClientResult<Vec<Value>> {
        take_array(body, Self::KIND.as_str())
    }

    /// Extract the record of a single-item response.
    fn unwrap_one(body: Value) -> Value {
        body
    }
}

impl Resource for Student {
    const BACKEND_KEY: &'static str = "students_id";
}

impl Resource for Professor {
    const BACKEND_KEY: &'static str = "professor_id";
}

/// Courses come wrapped in a `{ "data": ... }` envelope.
impl Resource for Course {
    const BACKEND_KEY: &'static str = "courses_id";

    fn unwrap_list(body: Value) -> ClientResult<Vec<Value>> {
        take_array(body, "data")
    }

    fn unwrap_one(mut body: Value) -> Value {
        body.get_mut("data").map(Value::take).unwrap_or(body)
    }
}

fn take_array(mut body: Value, field: &str) -> ClientResult<Vec<Value>> {
    match body.get_mut(field).map(Value::take) {
        Some(Value::Array(rows)) => Ok(rows),
        Some(Value::Null) | None => Err(ClientError::invalid_response(format!(
            "Response is missing the '{field}' list"
        ))),
        Some(_) => Err(ClientError::invalid_response(format!(
            "Response field '{field}' is not a list"
        ))),
    }
}
