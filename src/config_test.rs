use super::*;

#[test]
fn from_values_uses_defaults() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_values_parses_overrides() {
    let cfg = ServerConfig::from_values(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn invalid_port_is_an_error() {
    assert_eq!(
        ServerConfig::from_values(None, Some("http")),
        Err(ConfigError::InvalidPort("http".to_owned()))
    );
    assert_eq!(
        ServerConfig::from_values(None, Some("70000")),
        Err(ConfigError::InvalidPort("70000".to_owned()))
    );
}
