use crate::ApiConfig;

#[test]
fn test_default_api_config() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url, crate::DEFAULT_BASE_URL);
    assert_eq!(config.timeout_secs, crate::DEFAULT_TIMEOUT_SECS);
    assert!(config.validate().is_ok());
}

#[test]
fn test_origin_strips_path() {
    let config = ApiConfig::default();
    assert_eq!(config.origin(), "http://localhost:8000");
}

#[test]
fn test_origin_without_path() {
    let config = ApiConfig {
        base_url: "https://admin.example.edu/".to_string(),
        ..Default::default()
    };
    assert_eq!(config.origin(), "https://admin.example.edu");
}

#[test]
fn test_origin_with_nested_path() {
    let config = ApiConfig {
        base_url: "https://api.example.edu:8443/v2/admin".to_string(),
        ..Default::default()
    };
    assert_eq!(config.origin(), "https://api.example.edu:8443");
}
