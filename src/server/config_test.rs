use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }
}

#[test]
fn parse_port_defaults_when_missing_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
}

#[test]
fn parse_host_accepts_ipv4_and_ipv6() {
    assert_eq!(parse_host(Some("127.0.0.1")).unwrap().to_string(), "127.0.0.1");
    assert_eq!(parse_host(Some("::1")).unwrap().to_string(), "::1");
    assert!(matches!(parse_host(Some("localhost")), Err(ConfigError::InvalidHost(_))));
}

#[test]
fn parse_host_defaults_when_missing_or_blank() {
    assert_eq!(parse_host(None).unwrap().to_string(), DEFAULT_HOST);
    assert_eq!(parse_host(Some("   ")).unwrap().to_string(), DEFAULT_HOST);
}

#[test]
fn from_env_uses_defaults_and_overrides() {
    unsafe { clear_host_env() };
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");

    unsafe {
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "8080");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");

    unsafe { clear_host_env() };
}
