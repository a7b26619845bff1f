use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub media: MediaConfig,
    pub documents: DocumentsConfig,
}

/// Data directory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Override the default data directory.
    pub data_dir: Option<PathBuf>,
}

/// Media library configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Upper bound for a single upload, in megabytes.
    pub max_upload_mb: u64,
}

/// Document studio configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    /// Category a document falls back to when its template is unknown.
    pub default_category: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            media: MediaConfig::default(),
            documents: DocumentsConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { data_dir: None }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self { max_upload_mb: 25 }
    }
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            default_category: "1".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/launchdesk/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, with the same fallback
    /// behavior as [`load`](Self::load).
    pub fn load_from(config_path: &Path) -> Self {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e}; using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {}; using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Resolved data directory (override or XDG default).
    pub fn data_dir(&self) -> PathBuf {
        self.data
            .data_dir
            .clone()
            .unwrap_or_else(|| {
                dirs::data_dir()
                    .map(|d| d.join("launchdesk"))
                    .unwrap_or_else(|| PathBuf::from("data"))
            })
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("launchdesk").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

impl MediaConfig {
    /// The upload cap expressed in bytes, saturating on absurd configs.
    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}
