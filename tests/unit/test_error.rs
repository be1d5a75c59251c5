use ledger_api_client::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_app_error_display_unexpected_status() {
    let error = AppError::UnexpectedStatus {
        status: StatusCode::IM_A_TEAPOT,
        content: b"short and stout".to_vec(),
    };
    assert_eq!(
        error.to_string(),
        "unexpected status code: 418 I'm a teapot"
    );
    assert_eq!(error.status(), Some(StatusCode::IM_A_TEAPOT));
    assert_eq!(error.content_text().as_deref(), Some("short and stout"));
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("page starts at 1".to_string());
    assert_eq!(error.to_string(), "invalid input: page starts at 1");
    assert_eq!(error.status(), None);
    assert_eq!(error.content_text(), None);
}

#[test]
fn test_app_error_display_config() {
    let error = AppError::Config("bad url".to_string());
    assert_eq!(error.to_string(), "configuration error: bad url");
}

#[test]
fn test_app_error_from_json() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = json_error.into();
    assert!(matches!(error, AppError::Json(_)));
    assert!(error.to_string().starts_with("json error:"));
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("disk gone");
    let error: AppError = io_error.into();
    assert_eq!(error.to_string(), "io error: disk gone");
}
