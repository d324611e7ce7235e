//! Settings types and loading.
//!
//! The main entry point is [`Settings::load`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File looked up (from the working directory upwards) when no explicit
/// config path is given.
pub const CONFIG_FILE_NAME: &str = "linkit.yaml";

/// Prefix for environment overrides, e.g. `LINKIT_MAX_RETRIES`.
pub const ENV_PREFIX: &str = "LINKIT_";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A layer could not be read or did not match the settings shape.
    #[error("failed to load settings: {0}")]
    Extract(#[from] figment::Error),

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue {
        /// The configuration key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Runtime settings for invoking the external CLI.
///
/// Immutable once loaded; every field has a default so partial files work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Program to execute.
    #[serde(default = "default_program")]
    pub program: String,

    /// Attempt budget per call when retries are enabled.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base backoff delay; attempt `n` waits `n * retry_delay_ms`.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            program: default_program(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

fn default_program() -> String {
    "linear".to_string()
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

impl Settings {
    /// Load settings from defaults, a YAML file, and the environment.
    ///
    /// With `config_path` set the file must exist. Without it,
    /// [`CONFIG_FILE_NAME`] is used when present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] for a missing explicit file,
    /// [`ConfigError::Extract`] for unreadable or ill-typed layers, and
    /// [`ConfigError::InvalidValue`] when validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let file = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                path.to_path_buf()
            }
            None => PathBuf::from(CONFIG_FILE_NAME),
        };

        let settings: Settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Yaml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.program.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "program".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.max_retries == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_retries".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
