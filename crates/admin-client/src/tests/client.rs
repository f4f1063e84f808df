use crate::Client;
use crate::client::server_message;

use reqwest::StatusCode;
use serde_json::json;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/admin/");
    assert_eq!(client.base_url, "http://localhost:8000/admin");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000/admin");
    assert_eq!(client.base_url, "http://localhost:8000/admin");
}

#[test]
fn test_token_shared_between_clones() {
    let client = Client::new("http://localhost:8000/admin");
    let clone = client.clone();

    client.set_token(Some("abc".to_string()));
    assert_eq!(clone.token(), Some("abc".to_string()));

    clone.set_token(None);
    assert!(client.token().is_none());
}

#[test]
fn test_server_message_prefers_message() {
    let body = json!({"message": "Student not found", "detail": "ignored"});
    assert_eq!(
        server_message(StatusCode::NOT_FOUND, &body),
        "Student not found"
    );
}

#[test]
fn test_server_message_uses_string_detail() {
    let body = json!({"detail": "Invalid credentials"});
    assert_eq!(
        server_message(StatusCode::UNAUTHORIZED, &body),
        "Invalid credentials"
    );
}

#[test]
fn test_server_message_joins_validation_detail() {
    let body = json!({"detail": [
        {"loc": ["body", "email"], "msg": "field required"},
        {"loc": ["body", "name"], "msg": "too short"}
    ]});
    assert_eq!(
        server_message(StatusCode::UNPROCESSABLE_ENTITY, &body),
        "field required; too short"
    );
}

#[test]
fn test_server_message_nested_error() {
    let body = json!({"error": {"code": "CONFLICT", "message": "Email already used"}});
    assert_eq!(
        server_message(StatusCode::CONFLICT, &body),
        "Email already used"
    );
}

#[test]
fn test_server_message_falls_back_to_status() {
    assert_eq!(
        server_message(StatusCode::INTERNAL_SERVER_ERROR, &serde_json::Value::Null),
        "Error Code: 500\nMessage: Internal Server Error"
    );
}
