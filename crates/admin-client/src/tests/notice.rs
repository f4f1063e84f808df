use crate::{ClientError, NoticeLevel, Notifier};

use admin_config::NoticeConfig;

use std::time::Duration;

#[test]
fn test_success_notice_uses_success_duration() {
    let notifier = Notifier::default();
    notifier.success("Student created successfully!");

    let notice = notifier.latest().unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, "Student created successfully!");
    assert_eq!(notice.duration, Duration::from_millis(3000));
}

#[test]
fn test_failure_prefixes_context() {
    let notifier = Notifier::new(NoticeConfig {
        success_ms: 1000,
        error_ms: 8000,
    });
    notifier.failure("Error deleting student.", &ClientError::server(500, "boom"));

    let notice = notifier.latest().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Error deleting student. boom");
    assert_eq!(notice.duration, Duration::from_millis(8000));
}

#[test]
fn test_dismiss_clears_notice() {
    let notifier = Notifier::default();
    let rx = notifier.subscribe();
    notifier.error("bad");
    assert!(rx.borrow().is_some());

    notifier.dismiss();
    assert!(rx.borrow().is_none());
    assert!(notifier.latest().is_none());
}
