use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SembedConfig {
    pub server: ServerConfig,
    pub embedding: EmbeddingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub provider: String,
    pub model: String,
    pub cache_dir: String,
}

impl Default for SembedConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            embedding: EmbeddingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3002,
            log_level: "info".into(),
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        let cache_dir = default_sembed_dir()
            .join("models")
            .to_string_lossy()
            .into_owned();
        Self {
            provider: "local".into(),
            model: "all-roberta-large-v1".into(),
            cache_dir,
        }
    }
}

/// Returns `~/.sembed/`
pub fn default_sembed_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".sembed")
}

/// Returns the default config file path: `~/.sembed/config.toml`
pub fn default_config_path() -> PathBuf {
    default_sembed_dir().join("config.toml")
}

impl SembedConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            SembedConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    /// (SEMBED_HOST, SEMBED_PORT, SEMBED_MODEL, SEMBED_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SEMBED_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("SEMBED_PORT") {
            match val.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!(value = %val, "ignoring invalid SEMBED_PORT"),
            }
        }
        if let Ok(val) = std::env::var("SEMBED_MODEL") {
            self.embedding.model = val;
        }
        if let Ok(val) = std::env::var("SEMBED_LOG_LEVEL") {
            self.server.log_level = val;
        }
    }

    /// The socket address string the server binds, e.g. `0.0.0.0:3002`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
