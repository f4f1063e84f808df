use crate::{ColumnValue, DEFAULT_PASSWORD, Draft, Record, RecordId, Student, StudentDraft};

use serde_json::json;

fn complete_draft() -> StudentDraft {
    StudentDraft {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.edu".to_string(),
        department: "Mathematics".to_string(),
        age: Some(20),
        ..StudentDraft::default()
    }
}

#[test]
fn test_deserialize_partial_row_uses_defaults() {
    let student: Student = serde_json::from_value(json!({"name": "B"})).unwrap();

    assert_eq!(student.id, None);
    assert_eq!(student.name, "B");
    assert_eq!(student.email, "");
    assert_eq!(student.age, None);
}

#[test]
fn test_deserialize_null_text_columns_as_empty() {
    let student: Student =
        serde_json::from_value(json!({"id": 3, "name": "C", "department": null})).unwrap();

    assert_eq!(student.id, Some(RecordId(3)));
    assert_eq!(student.department, "");
}

#[test]
fn test_to_draft_copies_editable_fields() {
    let student = Student {
        id: Some(RecordId(9)),
        name: "Grace".to_string(),
        age: Some(30),
        email: "grace@example.edu".to_string(),
        department: "CS".to_string(),
    };

    let draft = student.to_draft();

    assert_eq!(draft.name, "Grace");
    assert_eq!(draft.age, Some(30));
    assert_eq!(draft.password, DEFAULT_PASSWORD);
}

#[test]
fn test_column_values() {
    let student = Student {
        id: Some(RecordId(4)),
        name: "Alan".to_string(),
        age: Some(22),
        email: "alan@example.edu".to_string(),
        department: "CS".to_string(),
    };

    assert_eq!(student.column("id"), Some(ColumnValue::Number(4)));
    assert_eq!(student.column("age"), Some(ColumnValue::Number(22)));
    assert_eq!(
        student.column("name"),
        Some(ColumnValue::Text("Alan".to_string()))
    );
    assert_eq!(student.column("password"), None);
}

#[test]
fn test_complete_draft_is_valid() {
    assert!(complete_draft().validate().is_empty());
}

#[test]
fn test_empty_draft_reports_every_required_field() {
    let errors = StudentDraft::default().validate();

    assert!(errors.has("name"));
    assert!(errors.has("email"));
    assert!(errors.has("department"));
    assert!(errors.has("age"));
    assert!(!errors.has("password"));
}

#[test]
fn test_age_out_of_range_rejected() {
    let mut draft = complete_draft();
    draft.age = Some(15);
    assert!(draft.validate().has("age"));

    draft.age = Some(101);
    assert!(draft.validate().has("age"));

    draft.age = Some(16);
    assert!(draft.validate().is_empty());
}

#[test]
fn test_bad_email_rejected() {
    let mut draft = complete_draft();
    draft.email = "not-an-email".to_string();

    let errors = draft.validate();

    assert_eq!(errors.len(), 1);
    assert!(errors.has("email"));
}

#[test]
fn test_set_field_parses_age() {
    let mut draft = StudentDraft::default();

    draft.set_field("age", "21").unwrap();
    assert_eq!(draft.age, Some(21));

    draft.set_field("age", "").unwrap();
    assert_eq!(draft.age, None);

    assert!(draft.set_field("age", "twenty").is_err());
}

#[test]
fn test_set_field_unknown_field() {
    let mut draft = StudentDraft::default();
    let err = draft.set_field("salary", "1").unwrap_err();

    assert!(err.to_string().contains("salary"));
}

#[test]
fn test_normalized_trims_and_fills_password() {
    let mut draft = complete_draft();
    draft.name = "  Ada  ".to_string();
    draft.password = String::new();

    let normalized = draft.normalized();

    assert_eq!(normalized.name, "Ada");
    assert_eq!(normalized.password, DEFAULT_PASSWORD);
}
