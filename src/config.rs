//! # Configuration
//!
//! [`CartConfig`] is read from a TOML file, then selected fields are overridden from
//! the environment, then validated.
//!
//! | Source | Name |
//! |---|---|
//! | file path | `CART_CONFIG` (default `cart.toml`; a missing file means defaults) |
//! | `storage_key` | `CART_STORAGE_KEY` |
//! | `storage_path` | `CART_STORAGE_PATH` |
//! | `buffer_size` | `CART_BUFFER_SIZE` |
//!
//! ```toml
//! storage_key = "@GoMarketplace"
//! storage_path = "data/cart.json"
//! buffer_size = 32
//! missing_item = "ignore"          # or "reject"
//! persist_snapshot = "current"     # or "prior_on_resize"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::cart_actor::{CartSettings, MissingItemPolicy, PersistSnapshot};
use crate::storage::CART_STORAGE_KEY;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    pub storage_key: String,
    pub storage_path: PathBuf,
    pub buffer_size: usize,
    pub missing_item: MissingItemPolicy,
    pub persist_snapshot: PersistSnapshot,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: CART_STORAGE_KEY.to_string(),
            storage_path: PathBuf::from("cart.json"),
            buffer_size: 32,
            missing_item: MissingItemPolicy::default(),
            persist_snapshot: PersistSnapshot::default(),
        }
    }
}

impl CartConfig {
    /// Load from the file named by `CART_CONFIG`, apply environment overrides and
    /// validate.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("CART_CONFIG").unwrap_or_else(|_| "cart.toml".to_string());
        let mut cfg = Self::load_from_file(&path)?;
        cfg.apply_overrides(|name| std::env::var(name).ok())?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a TOML file. A file that does not exist yields the defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Override fields from variables resolved through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("CART_STORAGE_KEY") {
            self.storage_key = key;
        }
        if let Some(path) = lookup("CART_STORAGE_PATH") {
            self.storage_path = PathBuf::from(path);
        }
        if let Some(size) = lookup("CART_BUFFER_SIZE") {
            self.buffer_size = size.trim().parse().map_err(|e| ConfigError::Invalid {
                field: "buffer_size",
                reason: format!("{size:?}: {e}"),
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "storage_key",
                reason: "must not be empty".to_string(),
            });
        }
        if self.buffer_size == 0 {
            return Err(ConfigError::Invalid {
                field: "buffer_size",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// The subset of the configuration the cart actor runs with.
    pub fn settings(&self) -> CartSettings {
        CartSettings {
            storage_key: self.storage_key.clone(),
            missing_item: self.missing_item,
            persist_snapshot: self.persist_snapshot,
        }
    }
}
