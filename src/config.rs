use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::http::connection::DEFAULT_READ_CHUNK_SIZE;
use crate::http::session::{SessionConfig, DEFAULT_INITIAL_CAPACITY};

/// Environment variable naming a YAML config file.
pub const CONFIG_ENV: &str = "TINYWEB_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub backlog: u32,
    pub read_chunk_size: usize,
    pub initial_buffer_capacity: usize,
    pub max_request_bytes: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            backlog: 8,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
            initial_buffer_capacity: DEFAULT_INITIAL_CAPACITY,
            max_request_bytes: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory static files are served from; no trailing `/`.
    pub doc_root: Option<String>,
}

impl Config {
    /// Loads the config file named by `TINYWEB_CONFIG` or `path` (defaults
    /// when neither is given), then applies `LISTEN` and `DOC_ROOT`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV);
        let path = from_env.as_deref().map(Path::new).or(path);

        let mut cfg = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = listen_addr;
        }
        if let Ok(doc_root) = std::env::var("DOC_ROOT") {
            cfg.static_files.doc_root = Some(doc_root);
        }

        cfg.normalize();
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        let mut cfg: Config = serde_yaml::from_str(text)?;
        cfg.normalize();
        Ok(cfg)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            initial_buffer_capacity: self.server.initial_buffer_capacity,
            max_request_bytes: self.server.max_request_bytes,
        }
    }

    fn normalize(&mut self) {
        self.static_files.doc_root = self
            .static_files
            .doc_root
            .take()
            .filter(|root| !root.is_empty())
            .map(|root| match root.trim_end_matches('/') {
                "" => "/".to_string(),
                trimmed => trimmed.to_string(),
            });
    }
}
