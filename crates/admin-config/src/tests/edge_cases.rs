use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "this is not valid toml {{{{",
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_unparseable_env_number_when_load_then_keeps_default() {
    // Given
    let _temp = setup_config_dir();
    let _page = EnvGuard::set("ADMIN_LIST_PAGE_SIZE", "lots");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.list.page_size, eq(crate::DEFAULT_PAGE_SIZE));
}

#[test]
#[serial]
fn given_unknown_log_level_in_toml_when_load_then_default_level() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[logging]\nlevel = \"loud\"\n",
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(crate::DEFAULT_LOG_LEVEL));
}
