use super::*;

#[test]
fn from_values_defaults() {
    let cfg = HostConfig::from_values(None, None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    assert!(cfg.api_base_url.is_empty());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_values_blank_values_use_defaults() {
    let cfg = HostConfig::from_values(Some(" "), Some(""), Some("   ")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.api_base_url.is_empty());
}

#[test]
fn from_values_parses_overrides() {
    let cfg = HostConfig::from_values(Some("8080"), Some("127.0.0.1"), Some("https://copilot.example.com/")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.api_base_url, "https://copilot.example.com");
}

#[test]
fn from_values_rejects_invalid_port() {
    let err = HostConfig::from_values(Some("http"), None, None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn from_values_rejects_invalid_bind_addr() {
    let err = HostConfig::from_values(None, Some("localhost"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr("localhost".into()));
}
