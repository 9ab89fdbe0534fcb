mod support;

use std::path::PathBuf;
use std::time::Duration;

use gemserve::config::Config;
use support::DocRoot;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.listen_addr(), "127.0.0.1:1965");
    assert_eq!(cfg.index_file, "index.gmi");
    assert!(!cfg.auto_index);
    assert!(cfg.mime_types.is_empty());
    assert_eq!(cfg.max_request_bytes, 1026);
    assert_eq!(cfg.read_timeout(), Duration::from_secs(10));
}

#[test]
fn test_config_from_yaml() {
    let yaml = r#"
BIND: 0.0.0.0
PORT: 1966
DOCUMENT_ROOT: /srv/gemini
INDEX_FILE: index.gemini
AUTO_INDEX: true
MIME_TYPES:
  text/gemini:
    - .gmi
    - .gemini
CERT_FILE: /etc/gemserve/cert.pem
KEY_FILE: /etc/gemserve/key.pem
MAX_CONNECTIONS: 8
READ_TIMEOUT_SECS: 3
"#;
    let cfg = Config::from_yaml(yaml).unwrap();

    assert_eq!(cfg.listen_addr(), "0.0.0.0:1966");
    assert_eq!(cfg.document_root, PathBuf::from("/srv/gemini"));
    assert_eq!(cfg.index_file, "index.gemini");
    assert!(cfg.auto_index);
    assert_eq!(cfg.mime_types["text/gemini"], vec![".gmi", ".gemini"]);
    assert_eq!(cfg.cert_file, PathBuf::from("/etc/gemserve/cert.pem"));
    assert_eq!(cfg.max_connections, 8);
    assert_eq!(cfg.read_timeout(), Duration::from_secs(3));
    // Unset keys keep their defaults
    assert_eq!(cfg.max_request_bytes, 1026);
}

#[test]
fn test_config_partial_yaml_uses_defaults() {
    let cfg = Config::from_yaml("AUTO_INDEX: true\n").unwrap();

    assert!(cfg.auto_index);
    assert_eq!(cfg.listen_addr(), "127.0.0.1:1965");
}

#[test]
fn test_config_rejects_invalid_values() {
    assert!(Config::from_yaml("PORT: not-a-port\n").is_err());
    assert!(Config::from_yaml("MAX_CONNECTIONS: 0\n").is_err());
}

#[test]
fn test_config_load_from_env() {
    let dir = DocRoot::new();
    dir.file("settings.yaml", b"PORT: 2000\nAUTO_INDEX: true\n");
    let path = dir.path().join("settings.yaml");

    unsafe {
        std::env::set_var("GEMSERVE_CONFIG", &path);
        std::env::remove_var("LISTEN");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr(), "127.0.0.1:2000");
    assert!(cfg.auto_index);

    unsafe {
        std::env::set_var("LISTEN", "0.0.0.0:3000");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr(), "0.0.0.0:3000");

    unsafe {
        std::env::remove_var("LISTEN");
        std::env::set_var("GEMSERVE_CONFIG", dir.path().join("missing.yaml"));
    }
    assert!(Config::load().is_err());

    unsafe {
        std::env::remove_var("GEMSERVE_CONFIG");
    }
}
