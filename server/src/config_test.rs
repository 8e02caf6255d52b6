use super::*;

// =============================================================================
// from_values — pure, no env access.
// =============================================================================

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg.bind_addr, SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.bind_addr.port(), DEFAULT_PORT);
    assert_eq!(cfg.bind_addr.ip(), DEFAULT_HOST);
}

#[test]
fn parses_host_and_port() {
    let cfg = ServerConfig::from_values(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.bind_addr, "127.0.0.1:8080".parse().unwrap());
}

#[test]
fn parses_ipv6_host() {
    let cfg = ServerConfig::from_values(Some("::1"), Some("3001")).unwrap();
    assert_eq!(cfg.bind_addr, "[::1]:3001".parse().unwrap());
}

#[test]
fn rejects_non_numeric_port() {
    assert_eq!(
        ServerConfig::from_values(None, Some("http")),
        Err(ConfigError::InvalidPort { value: "http".to_owned() })
    );
}

#[test]
fn rejects_zero_and_out_of_range_port() {
    assert!(matches!(ServerConfig::from_values(None, Some("0")), Err(ConfigError::InvalidPort { .. })));
    assert!(matches!(ServerConfig::from_values(None, Some("70000")), Err(ConfigError::InvalidPort { .. })));
}

#[test]
fn rejects_hostname() {
    assert_eq!(
        ServerConfig::from_values(Some("localhost"), None),
        Err(ConfigError::InvalidHost { value: "localhost".to_owned() })
    );
}

#[test]
fn error_messages_name_the_variable() {
    let err = ConfigError::InvalidPort { value: "x".to_owned() };
    assert!(err.to_string().starts_with("invalid PORT"));
    let err = ConfigError::InvalidHost { value: "x".to_owned() };
    assert!(err.to_string().starts_with("invalid HOST"));
}

// =============================================================================
// from_env — the only test touching the real process env.
// =============================================================================

#[test]
fn from_env_reads_port() {
    unsafe {
        std::env::remove_var("HOST");
        std::env::set_var("PORT", "4123");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.bind_addr.port(), 4123);
    unsafe { std::env::remove_var("PORT") };
}
