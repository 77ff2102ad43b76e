use copydesk::core::config::{AppConfig, REQUEST_TIMEOUT_SECS};
use copydesk::errors::BackendError;

#[test]
fn test_error_display_messages() {
    let err = BackendError::HttpError("connection refused".to_string());
    assert_eq!(
        err.to_string(),
        "Failed to send HTTP request: connection refused"
    );

    let err = BackendError::ApiError("400: Unsupported platform".to_string());
    assert!(err.to_string().contains("Unsupported platform"));

    let err = BackendError::ParseError("missing field `content`".to_string());
    assert!(err.to_string().starts_with("Failed to parse"));
}

#[test]
fn test_serde_errors_convert_to_parse_errors() {
    let bad = serde_json::from_str::<serde_json::Value>("{not json");
    let err: BackendError = bad.unwrap_err().into();
    assert!(matches!(err, BackendError::ParseError(_)));
}

#[test]
fn test_config_defaults_to_local_backend() {
    let config = AppConfig::default();
    assert_eq!(config.backend_base_url, "http://localhost:8000");
    assert_eq!(REQUEST_TIMEOUT_SECS, 30);
}
