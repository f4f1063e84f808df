use crate::{AdminUser, Credentials, RecordId};

use serde_json::json;

#[test]
fn test_admin_user_round_trips_through_json() {
    let user = AdminUser {
        id: RecordId(1),
        name: "Admin".to_string(),
        email: "admin@example.edu".to_string(),
    };

    let json = serde_json::to_string(&user).unwrap();
    let parsed: AdminUser = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, user);
}

#[test]
fn test_admin_user_rejects_missing_id() {
    let result = serde_json::from_value::<AdminUser>(json!({"name": "A", "email": "a@b.c"}));
    assert!(result.is_err());
}

#[test]
fn test_credentials_debug_hides_password() {
    let credentials = Credentials::new("admin@example.edu", "hunter2");
    let debug = format!("{credentials:?}");

    assert!(debug.contains("admin@example.edu"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn test_credentials_validation() {
    assert!(Credentials::new("admin@example.edu", "pw").validate().is_empty());

    let errors = Credentials::new("admin", "").validate();
    assert!(errors.has("email"));
    assert!(errors.has("password"));
}
