use crate::{Navigator, Route, RouteGuard};

use admin_core::{RecordId, ResourceKind};

use tokio::sync::watch;

#[test]
fn test_parse_known_paths() {
    assert_eq!(Route::parse("/login"), Route::Login);
    assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
    assert_eq!(
        Route::parse("/students"),
        Route::List(ResourceKind::Students)
    );
    assert_eq!(
        Route::parse("/professors/add"),
        Route::Add(ResourceKind::Professors)
    );
    assert_eq!(
        Route::parse("/students/edit/12"),
        Route::Edit(ResourceKind::Students, RecordId(12))
    );
}

#[test]
fn test_parse_unknown_and_empty_paths_resolve_to_login() {
    assert_eq!(Route::parse(""), Route::Login);
    assert_eq!(Route::parse("/"), Route::Login);
    assert_eq!(Route::parse("/courses"), Route::Login);
    assert_eq!(Route::parse("/students/edit/abc"), Route::Login);
    assert_eq!(Route::parse("/students/remove/1"), Route::Login);
}

#[test]
fn test_path_matches_parse() {
    let route = Route::Edit(ResourceKind::Professors, RecordId(5));
    assert_eq!(route.path(), "/professors/edit/5");
    assert_eq!(Route::parse(&route.path()), route);
}

#[test]
fn test_only_login_is_unguarded() {
    assert!(!Route::Login.is_guarded());
    assert!(Route::Dashboard.is_guarded());
    assert!(Route::Add(ResourceKind::Students).is_guarded());
}

#[test]
fn test_guard_follows_authentication_flag() {
    let (tx, rx) = watch::channel(false);
    let guard = RouteGuard::new(rx);

    assert_eq!(guard.resolve(Route::Dashboard), Route::Login);
    assert!(guard.can_activate(&Route::Login));

    tx.send_replace(true);
    assert_eq!(guard.resolve(Route::Dashboard), Route::Dashboard);
}

#[test]
fn test_navigator_publishes_route() {
    let navigator = Navigator::default();
    let rx = navigator.subscribe();
    assert_eq!(navigator.current(), Route::Login);

    navigator.navigate(Route::List(ResourceKind::Students));
    assert_eq!(*rx.borrow(), Route::List(ResourceKind::Students));
}
