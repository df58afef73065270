//! TOML-based configuration for the mapping components.
//!
//! The migration tool reads one TOML config file; this crate owns the
//! `[identity]` section. Unknown sections are ignored so the same file can
//! feed the engine and CLI crates.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::ConfigError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// The slice of the tool configuration consumed by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Identity mapping settings.
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Minimum tracing level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            identity: IdentityConfig::default(),
            log_level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Identity mapping configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Path to the plain-text user mapping file, one `source=dest` pair per
    /// line. A missing file yields an empty mapping table.
    #[serde(default)]
    pub mapping_file: Option<PathBuf>,

    /// Domain rewrite rule of the form `sourceDomain=destDomain`, applied
    /// when no explicit mapping exists for a user.
    #[serde(default)]
    pub domain_rule: Option<String>,
}

impl AppConfig {
    /// Load an [`AppConfig`] from a TOML file at the given path.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading configuration");

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        debug!("configuration parsed successfully");
        Ok(config)
    }
}
