use crate::error::{CondensateError, Result};
use crate::types::EntityBounds;
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CONDENSATE_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CondensateConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cosmetic pause before the entity scan, in milliseconds. Only timestamps move.
    #[serde(default)]
    pub scan_delay_ms: u64,
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
    #[serde(default)]
    pub bounds: EntityBounds,
}

impl EngineConfig {
    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scan_delay_ms)
    }

    pub fn vocabulary(&self) -> Result<Vocabulary> {
        Vocabulary::from_config(&self.vocabulary)
    }
}

/// Additions to the built-in word lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyConfig {
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
    #[serde(default)]
    pub extra_tech_terms: Vec<String>,
    #[serde(default)]
    pub extra_salience_markers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    8088
}

impl CondensateConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.engine.vocabulary()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            CondensateError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// `$CONDENSATE_CONFIG` first, then the per-user and working-directory
    /// locations. Defaults when none exists.
    pub fn discover() -> Result<Self> {
        if let Ok(explicit) = std::env::var(CONFIG_ENV) {
            return Self::load(explicit);
        }
        for path in Self::default_paths() {
            if path.exists() {
                return Self::load(&path);
            }
        }
        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::home_dir().map(|h| h.join(".condensate").join("config.toml")),
            dirs::config_dir().map(|c| c.join("condensate").join("config.toml")),
            Some(PathBuf::from("condensate.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
