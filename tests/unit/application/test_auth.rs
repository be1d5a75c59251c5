use ledger_api_client::application::auth::Auth;
use ledger_api_client::application::config::Config;
use reqwest::header::HeaderMap;

#[test]
fn test_auth_custom_header_without_prefix() {
    let mut config = Config::with_base_url("http://localhost").token("k-123");
    config.credentials.prefix = String::new();
    config.credentials.auth_header_name = "X-Api-Key".to_string();

    let auth = Auth::new(&config);
    assert!(auth.is_authenticated());
    assert_eq!(
        auth.header(),
        Some(("X-Api-Key".to_string(), "k-123".to_string()))
    );

    let mut headers = HeaderMap::new();
    auth.apply(&mut headers).unwrap();
    assert_eq!(headers.get("x-api-key").unwrap(), "k-123");
    assert!(headers.get("x-api-key").unwrap().is_sensitive());
}

#[test]
fn test_auth_debug_hides_token() {
    let auth = Auth::new(&Config::with_base_url("http://localhost").token("super-secret"));
    let debug = format!("{auth:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("***"));
}

#[test]
fn test_auth_rejects_invalid_header_name() {
    let mut config = Config::with_base_url("http://localhost").token("t");
    config.credentials.auth_header_name = "bad header".to_string();
    let mut headers = HeaderMap::new();
    assert!(Auth::new(&config).apply(&mut headers).is_err());
}

#[test]
fn test_token_hidden_from_config_and_client_output() {
    let config = Config::with_base_url("http://localhost").token("super-secret");

    for rendered in [
        format!("{:?}", config.credentials),
        format!("{}", config.credentials),
        format!("{config:?}"),
        format!("{config}"),
    ] {
        assert!(!rendered.contains("super-secret"), "{rendered}");
        assert!(rendered.contains("***"), "{rendered}");
    }

    let client = ledger_api_client::application::client::Client::new(config.clone()).unwrap();
    assert!(!format!("{client:?}").contains("super-secret"));
    assert_eq!(client.config().credentials.token.as_deref(), Some("super-secret"));
}
