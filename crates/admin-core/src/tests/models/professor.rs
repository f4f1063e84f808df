use crate::{Draft, Professor, ProfessorDraft, Record, RecordId};

use serde_json::json;

#[test]
fn test_serialize_omits_missing_id() {
    let professor = Professor {
        id: None,
        name: "Turing".to_string(),
        email: "turing@example.edu".to_string(),
        department: "CS".to_string(),
    };

    let value = serde_json::to_value(&professor).unwrap();

    assert!(value.get("id").is_none());
    assert_eq!(value["name"], "Turing");
}

#[test]
fn test_deserialize_with_id() {
    let professor: Professor =
        serde_json::from_value(json!({"id": 7, "name": "Hopper", "email": "h@example.edu"}))
            .unwrap();

    assert_eq!(professor.id(), Some(RecordId(7)));
    assert_eq!(professor.department, "");
}

#[test]
fn test_draft_requires_department() {
    let draft = ProfessorDraft {
        name: "Hopper".to_string(),
        email: "h@example.edu".to_string(),
        ..ProfessorDraft::default()
    };

    let errors = draft.validate();

    assert_eq!(errors.len(), 1);
    assert!(errors.has("department"));
}

#[test]
fn test_draft_fields_round_trip_through_set_field() {
    let mut draft = ProfessorDraft::default();
    for field in <ProfessorDraft as Draft>::FIELDS {
        draft.set_field(field, "x@y.z").unwrap();
    }

    assert_eq!(draft.name, "x@y.z");
    assert_eq!(draft.password, "x@y.z");
    assert!(draft.validate().is_empty());
}
