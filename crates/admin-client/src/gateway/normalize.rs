use serde_json::Value;

/// Rewrite the backend's type-qualified primary key (`students_id`,
/// `professor_id`, ...) to the canonical `id` field.
///
/// An existing non-null `id` wins. The backend key is always removed so it
/// never travels past the gateway. Non-object values pass through untouched.
pub fn normalize_key(mut value: Value, backend_key: &str) -> Value {
    if let Value::Object(map) = &mut value {
        let backend_id = map.remove(backend_key).filter(|v| !v.is_null());
        let has_id = map.get("id").is_some_and(|v| !v.is_null());

        if !has_id {
            match backend_id {
                Some(id) => {
                    map.insert("id".to_string(), id);
                }
                None => {
                    map.remove("id");
                }
            }
        }
    }
    value
}
