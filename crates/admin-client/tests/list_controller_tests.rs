//! Integration tests for the list controller using wiremock mock server

mod common;

use admin_client::{
    AutoConfirm, ClientError, DeleteOutcome, ListController, NoticeLevel, ProfessorGateway,
    Route, StudentGateway,
};
use admin_core::{Professor, RecordId, ResourceKind, Student};

use common::Harness;
use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{method, path},
};

fn students(h: &Harness) -> ListController<Student> {
    ListController::new(
        StudentGateway::new(h.client.clone()),
        h.navigator.clone(),
        h.notifier.clone(),
        10,
    )
}

fn professors(h: &Harness) -> ListController<Professor> {
    ListController::new(
        ProfessorGateway::new(h.client.clone()),
        h.navigator.clone(),
        h.notifier.clone(),
        10,
    )
}

async fn mount_students(h: &Harness) {
    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "students": [
                {"students_id": 1, "name": "A"},
                {"name": "B"}
            ]
        })))
        .mount(&h.server)
        .await;
}

#[tokio::test]
async fn test_load_assigns_placeholder_ids() {
    let h = Harness::start().await;
    mount_students(&h).await;

    let mut list = students(&h);
    list.load().await.unwrap();

    let ids: Vec<Option<RecordId>> = list.records().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![Some(RecordId(1)), Some(RecordId(-2))]);
    assert_eq!(list.records()[1].name, "B");
    assert!(!list.is_loading());
}

#[tokio::test]
async fn test_load_failure_reports_notice() {
    let h = Harness::start().await;

    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&h.server)
        .await;

    let mut list = students(&h);
    assert!(list.load().await.is_err());
    assert!(!list.is_loading());

    let notice = h.notifier.latest().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.starts_with("Error loading students."));
}

#[tokio::test]
async fn test_edit_placeholder_creates_exactly_once() {
    let h = Harness::start().await;
    mount_students(&h).await;

    Mock::given(method("POST"))
        .and(path("/students"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"students_id": 42, "name": "B"})),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&h.server)
        .await;

    let mut list = students(&h);
    list.load().await.unwrap();

    let target = list.edit(RecordId(-2)).await.unwrap();

    assert_eq!(target, RecordId(42));
    assert!(list.get(RecordId(-2)).is_none());
    assert_eq!(list.get(RecordId(42)).map(|s| s.name.as_str()), Some("B"));
    assert_eq!(
        h.navigator.current(),
        Route::Edit(ResourceKind::Students, RecordId(42))
    );
}

#[tokio::test]
async fn test_edit_persisted_id_only_navigates() {
    let h = Harness::start().await;
    mount_students(&h).await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&h.server)
        .await;

    let mut list = students(&h);
    list.load().await.unwrap();

    assert_eq!(list.edit(RecordId(1)).await.unwrap(), RecordId(1));
    assert_eq!(
        h.navigator.current(),
        Route::Edit(ResourceKind::Students, RecordId(1))
    );
}

#[tokio::test]
async fn test_edit_placeholder_without_returned_id_keeps_placeholder() {
    let h = Harness::start().await;
    mount_students(&h).await;

    Mock::given(method("POST"))
        .and(path("/students"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Student created"})),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    let mut list = students(&h);
    list.load().await.unwrap();

    let err = list.edit(RecordId(-2)).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse { .. }));
    assert!(list.get(RecordId(-2)).is_some());
    assert_eq!(h.navigator.current(), Route::Login);
    assert_eq!(h.notifier.latest().unwrap().level, NoticeLevel::Error);
}

#[tokio::test]
async fn test_edit_unknown_id_rejected_before_network() {
    let h = Harness::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&h.server)
        .await;

    let mut list = students(&h);
    let err = list.edit(RecordId(-7)).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation { .. }));
}

#[tokio::test]
async fn test_delete_placeholder_is_local() {
    let h = Harness::start().await;

    Mock::given(method("GET"))
        .and(path("/professors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "professors": [
                {"professor_id": 5, "name": "P1"},
                {"name": "P2"},
                {"name": "P3"}
            ]
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&h.server)
        .await;

    let mut list = professors(&h);
    list.load().await.unwrap();

    let outcome = list
        .delete(RecordId(-2), &AutoConfirm(true))
        .await
        .unwrap();

    assert_eq!(outcome, DeleteOutcome::RemovedLocally);
    let names: Vec<&str> = list.records().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["P1", "P3"]);
    assert_eq!(
        h.notifier.latest().unwrap().message,
        "Professor removed from list"
    );
}

#[tokio::test]
async fn test_delete_declined_is_noop() {
    let h = Harness::start().await;
    mount_students(&h).await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&h.server)
        .await;

    let mut list = students(&h);
    list.load().await.unwrap();

    let outcome = list.delete(RecordId(1), &AutoConfirm(false)).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert_eq!(list.records().len(), 2);
}

#[tokio::test]
async fn test_delete_persisted_reloads() {
    let h = Harness::start().await;

    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "students": [{"students_id": 1, "name": "A"}, {"students_id": 2, "name": "B"}]
        })))
        .up_to_n_times(1)
        .mount(&h.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "students": [{"students_id": 2, "name": "B"}]
        })))
        .mount(&h.server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/students/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Student deleted"})),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    let mut list = students(&h);
    list.load().await.unwrap();

    let outcome = list.delete(RecordId(1), &AutoConfirm(true)).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(list.records().len(), 1);
    assert_eq!(list.records()[0].id, Some(RecordId(2)));
    assert_eq!(
        h.notifier.latest().unwrap().message,
        "Student deleted successfully!"
    );
}

#[tokio::test]
async fn test_delete_failure_leaves_list_unchanged() {
    let h = Harness::start().await;
    mount_students(&h).await;

    Mock::given(method("DELETE"))
        .and(path("/students/1"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "Database down"})),
        )
        .mount(&h.server)
        .await;

    let mut list = students(&h);
    list.load().await.unwrap();

    let result = list.delete(RecordId(1), &AutoConfirm(true)).await;

    assert!(result.is_err());
    assert_eq!(list.records().len(), 2);
    assert_eq!(
        h.notifier.latest().unwrap().message,
        "Error deleting student. Database down"
    );
}

#[tokio::test]
async fn test_navigate_to_add() {
    let h = Harness::start().await;
    let list = professors(&h);
    list.navigate_to_add();
    assert_eq!(h.navigator.current(), Route::Add(ResourceKind::Professors));
}
