use crate::{ColumnValue, Course, CourseDraft, Draft, Record};

#[test]
fn test_course_display_name_is_course_name() {
    let course = Course {
        course_name: "Compilers".to_string(),
        ..Course::default()
    };

    assert_eq!(course.display_name(), "Compilers");
    assert_eq!(course.column("id"), Some(ColumnValue::Empty));
}

#[test]
fn test_course_draft_requires_all_fields() {
    let errors = CourseDraft::default().validate();
    assert_eq!(errors.len(), 4);
}

#[test]
fn test_course_draft_set_field() {
    let mut draft = CourseDraft::default();
    draft.set_field("course_price", " 120 ").unwrap();

    assert_eq!(draft.normalized().course_price, "120");
    assert!(draft.set_field("instructor", "x").is_err());
}
