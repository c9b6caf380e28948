//! Orchestrator configuration.
//!
//! Values come from defaults, a serialized document, or the process
//! environment:
//!
//! | Variable | Field | Default |
//! |---|---|---|
//! | `JOBTRACK_GENERATOR_TIMEOUT_MS` | `generator_timeout_ms` | `30000` |
//! | `JOBTRACK_SERIALIZE_PER_APPLICATION` | `serialize_per_application` | `false` |

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the generator timeout in milliseconds.
pub const GENERATOR_TIMEOUT_ENV: &str = "JOBTRACK_GENERATOR_TIMEOUT_MS";

/// Environment variable enabling per-application serialization.
pub const SERIALIZE_PER_APPLICATION_ENV: &str = "JOBTRACK_SERIALIZE_PER_APPLICATION";

const DEFAULT_GENERATOR_TIMEOUT_MS: u64 = 30_000;

/// Errors returned while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Raw value.
        value: String,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// The generator timeout is zero.
    #[error("generator timeout must be greater than zero")]
    ZeroGeneratorTimeout,
}

/// Tunables for [`crate::orchestrator::Orchestrator`].
///
/// Deserialization applies [`OrchestratorConfig::validate`], so a document
/// with a zero timeout is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOrchestratorConfig")]
pub struct OrchestratorConfig {
    /// Upper bound on one generator call, in milliseconds. Calls that run
    /// longer are treated as failed generations.
    pub generator_timeout_ms: u64,
    /// Hold a per-application lock across each mutating operation so that
    /// at most one operation mutates a given application at a time.
    pub serialize_per_application: bool,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            generator_timeout_ms: DEFAULT_GENERATOR_TIMEOUT_MS,
            serialize_per_application: false,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawOrchestratorConfig {
    generator_timeout_ms: u64,
    serialize_per_application: bool,
}

impl Default for RawOrchestratorConfig {
    fn default() -> Self {
        let defaults = OrchestratorConfig::default();
        Self {
            generator_timeout_ms: defaults.generator_timeout_ms,
            serialize_per_application: defaults.serialize_per_application,
        }
    }
}

impl TryFrom<RawOrchestratorConfig> for OrchestratorConfig {
    type Error = ConfigError;

    fn try_from(raw: RawOrchestratorConfig) -> Result<Self, Self::Error> {
        let config = Self {
            generator_timeout_ms: raw.generator_timeout_ms,
            serialize_per_application: raw.serialize_per_application,
        };
        config.validate()?;
        Ok(config)
    }
}

impl OrchestratorConfig {
    /// Loads configuration from the environment, using defaults for unset
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unparsable
    /// value or the resulting configuration is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = read_var(GENERATOR_TIMEOUT_ENV) {
            config.generator_timeout_ms =
                raw.parse().map_err(|_| ConfigError::InvalidValue {
                    key: GENERATOR_TIMEOUT_ENV,
                    value: raw.clone(),
                    reason: "expected a whole number of milliseconds",
                })?;
        }

        if let Some(raw) = read_var(SERIALIZE_PER_APPLICATION_ENV) {
            config.serialize_per_application =
                parse_flag(&raw).ok_or_else(|| ConfigError::InvalidValue {
                    key: SERIALIZE_PER_APPLICATION_ENV,
                    value: raw.clone(),
                    reason: "expected true/false, 1/0, yes/no, or on/off",
                })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Sets the generator timeout.
    ///
    /// Sub-millisecond durations truncate to zero and fail
    /// [`Self::validate`].
    #[must_use]
    pub fn with_generator_timeout(mut self, timeout: Duration) -> Self {
        self.generator_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Enables or disables per-application serialization.
    #[must_use]
    pub const fn with_serialize_per_application(mut self, enabled: bool) -> Self {
        self.serialize_per_application = enabled;
        self
    }

    /// Checks invariants that deserialization cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroGeneratorTimeout`] for a zero timeout.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.generator_timeout_ms == 0 {
            return Err(ConfigError::ZeroGeneratorTimeout);
        }
        Ok(())
    }

    /// Returns the generator timeout as a [`Duration`].
    #[must_use]
    pub const fn generator_timeout(&self) -> Duration {
        Duration::from_millis(self.generator_timeout_ms)
    }
}

fn read_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
