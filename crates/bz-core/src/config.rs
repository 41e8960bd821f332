use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::compression::CompressionOptions;
use crate::validation::UploadRules;

/// Top-level configuration loaded from `~/.bazaar/config.toml`.
///
/// Every section falls back to its defaults, so a partial file only needs the
/// keys it changes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub compression: CompressionOptions,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load config from `~/.bazaar/config.toml`, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(path)
        } else {
            let cfg = Config::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }

    /// Load from a specific path.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let cfg: Config = toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        self.validate()?;
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Semantic validation for settings that are not fully expressible via type checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.upload.validate()?;
        self.compression
            .validate()
            .map_err(|e| ConfigError::Validation(format!("compression: {e}")))?;
        self.display.validate()?;
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bazaar")
            .join("config.toml")
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Section structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Comma-separated accept list, e.g. `image/*,.pdf`.
    #[serde(default = "default_accept")]
    pub accept: String,
    #[serde(default = "default_upload_max_mb")]
    pub max_size_mb: f64,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_hint")]
    pub hint: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            accept: default_accept(),
            max_size_mb: default_upload_max_mb(),
            placeholder: default_placeholder(),
            hint: default_hint(),
        }
    }
}

impl UploadConfig {
    pub fn rules(&self) -> UploadRules {
        UploadRules::new(&self.accept, self.max_size_mb)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_size_mb > 0.0) {
            return Err(ConfigError::Validation(format!(
                "upload.max_size_mb must be positive, got {}",
                self.max_size_mb
            )));
        }
        Ok(())
    }
}

fn default_accept() -> String {
    "image/*".into()
}
fn default_upload_max_mb() -> f64 {
    10.0
}
fn default_placeholder() -> String {
    "Upload a file".into()
}
fn default_hint() -> String {
    "PNG, JPG up to 10MB".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Seller badges shown on a card before the rest are hidden.
    #[serde(default = "default_max_seller_badges")]
    pub max_seller_badges: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            max_seller_badges: default_max_seller_badges(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_symbol.is_empty() {
            return Err(ConfigError::Validation(
                "display.currency_symbol must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_currency_symbol() -> String {
    "\u{20B9}".into()
}
fn default_max_seller_badges() -> usize {
    2
}
