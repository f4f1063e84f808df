use crate::RecordId;

use std::collections::HashSet;
use std::str::FromStr;

#[test]
fn test_placeholder_is_negative_position_plus_one() {
    assert_eq!(RecordId::placeholder(0), RecordId(-1));
    assert_eq!(RecordId::placeholder(1), RecordId(-2));
    assert_eq!(RecordId::placeholder(41), RecordId(-42));
}

#[test]
fn test_placeholders_are_unique_and_negative() {
    let ids: HashSet<RecordId> = (0..500).map(RecordId::placeholder).collect();

    assert_eq!(ids.len(), 500);
    assert!(ids.iter().all(|id| id.is_placeholder() && id.value() < 0));
}

#[test]
fn test_backend_ids_are_not_placeholders() {
    assert!(!RecordId(0).is_placeholder());
    assert!(!RecordId(17).is_placeholder());
}

#[test]
fn test_from_str_parses_route_parameter() {
    assert_eq!(RecordId::from_str("12").unwrap(), RecordId(12));
    assert_eq!(RecordId::from_str(" -3 ").unwrap(), RecordId(-3));
}

#[test]
fn test_from_str_rejects_garbage() {
    let err = RecordId::from_str("abc").unwrap_err();
    assert!(err.to_string().contains("abc"));
}

#[test]
fn test_serializes_as_bare_number() {
    let json = serde_json::to_string(&RecordId(5)).unwrap();
    assert_eq!(json, "5");
}
