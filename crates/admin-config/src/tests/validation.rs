use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests
// =========================================================================

#[test]
#[serial]
fn given_non_http_base_url_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("ADMIN_API_BASE_URL", "localhost:8000/admin");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("api.base_url"));
}

#[test]
#[serial]
fn given_zero_timeout_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("ADMIN_API_TIMEOUT_SECS", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_page_size_zero_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _page = EnvGuard::set("ADMIN_LIST_PAGE_SIZE", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_page_size_at_max_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _page = EnvGuard::set("ADMIN_LIST_PAGE_SIZE", "500");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_notice_too_short_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _ms = EnvGuard::set("ADMIN_NOTICE_ERROR_MS", "10");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("notice.error_ms"));
}

#[test]
#[serial]
fn given_blank_session_dir_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _dir = EnvGuard::set("ADMIN_SESSION_DIR", "  ");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}
