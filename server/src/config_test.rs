use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORTAL_BACKEND_URL", "https://api.example.test/")])).unwrap();
    assert_eq!(
        cfg,
        ServerConfig {
            port: DEFAULT_PORT,
            backend_url: "https://api.example.test".to_owned(),
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    );
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORTAL_BACKEND_URL", "http://localhost:5000"),
        ("PORT", "8080"),
        ("PORTAL_PROXY_TIMEOUT_SECS", " 5 "),
        ("PORTAL_CONNECT_TIMEOUT_SECS", ""),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.proxy_timeout_secs, 5);
    assert_eq!(cfg.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
}

#[test]
fn missing_backend_is_an_error() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "3000")])),
        Err(ConfigError::Missing { var: "PORTAL_BACKEND_URL" })
    );
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORTAL_BACKEND_URL", "  ")])),
        Err(ConfigError::Missing { var: "PORTAL_BACKEND_URL" })
    );
}

#[test]
fn backend_without_scheme_is_invalid() {
    let err = ServerConfig::from_lookup(lookup(&[("PORTAL_BACKEND_URL", "api.example.test")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORTAL_BACKEND_URL", .. }));
}

#[test]
fn unparsable_port_is_invalid() {
    let err = ServerConfig::from_lookup(lookup(&[("PORTAL_BACKEND_URL", "http://x"), ("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid config: PORT=\"eighty\"");
}
