use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings.yaml";

/// Server settings, read once at startup and shared read-only.
///
/// Keys in the YAML file are upper case (`DOCUMENT_ROOT`, `AUTO_INDEX`, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct Config {
    pub bind: String,
    pub port: u16,
    pub document_root: PathBuf,
    pub index_file: String,
    pub auto_index: bool,
    /// Content type -> extensions, consulted before the built-in table
    pub mime_types: HashMap<String, Vec<String>>,
    pub cert_file: PathBuf,
    pub key_file: PathBuf,
    pub max_connections: usize,
    pub read_timeout_secs: u64,
    pub max_request_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 1965,
            document_root: PathBuf::from("public"),
            index_file: "index.gmi".to_string(),
            auto_index: false,
            mime_types: HashMap::new(),
            cert_file: PathBuf::from("cert.pem"),
            key_file: PathBuf::from("key.pem"),
            max_connections: 64,
            read_timeout_secs: 10,
            // 1024-byte URL plus CRLF
            max_request_bytes: 1026,
        }
    }
}

impl Config {
    /// Loads the settings file named by `GEMSERVE_CONFIG` (default
    /// `settings.yaml`). `LISTEN` overrides the listen address.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("GEMSERVE_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file {path}"))?;

        let mut cfg = Self::from_yaml(&text)
            .with_context(|| format!("parsing config file {path}"))?;

        if let Ok(listen) = std::env::var("LISTEN") {
            let (bind, port) = listen
                .rsplit_once(':')
                .with_context(|| format!("LISTEN must be host:port, got {listen}"))?;
            cfg.bind = bind.to_string();
            cfg.port = port
                .parse()
                .with_context(|| format!("invalid port in LISTEN: {port}"))?;
        }
        Ok(cfg)
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(text)?;
        anyhow::ensure!(cfg.max_connections > 0, "MAX_CONNECTIONS must be positive");
        anyhow::ensure!(cfg.max_request_bytes > 0, "MAX_REQUEST_BYTES must be positive");
        Ok(cfg)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}
