//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SHIBA_OTP_DELAY_MS` - Simulated OTP send/verify latency (default: 1500)
//! - `SHIBA_CONTRACT_DELAY_MS` - Simulated contract submission latency (default: 2000)
//! - `SHIBA_LOG` - Tracing filter directives (falls back to `RUST_LOG`,
//!   then `shiba_storefront=info`)
//! - `SHIBA_LOG_JSON` - Emit JSON log lines when `true` or `1` (default: false)

use std::time::Duration;

use thiserror::Error;

use crate::services::{SimulatedAuthService, SimulatedContractService};

/// Default tracing filter when neither `SHIBA_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "shiba_storefront=info,shiba_cli=info";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Delay before the simulated OTP service answers.
    pub otp_delay: Duration,
    /// Delay before the simulated contract service answers.
    pub contract_delay: Duration,
    /// Tracing filter directives.
    pub log_filter: String,
    /// Emit structured JSON logs instead of text.
    pub log_json: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            otp_delay: SimulatedAuthService::DEFAULT_DELAY,
            contract_delay: SimulatedContractService::DEFAULT_DELAY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_json: false,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a delay is not a whole number of milliseconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a delay is not a whole number of milliseconds.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let otp_delay = get_millis(&lookup, "SHIBA_OTP_DELAY_MS", defaults.otp_delay)?;
        let contract_delay =
            get_millis(&lookup, "SHIBA_CONTRACT_DELAY_MS", defaults.contract_delay)?;
        let log_filter = lookup("SHIBA_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or(defaults.log_filter);
        let log_json = get_flag(&lookup, "SHIBA_LOG_JSON")?;

        Ok(Self {
            otp_delay,
            contract_delay,
            log_filter,
            log_json,
        })
    }

    /// OTP service configured with this delay.
    #[must_use]
    pub const fn auth_service(&self) -> SimulatedAuthService {
        SimulatedAuthService::new(self.otp_delay)
    }

    /// Contract service configured with this delay.
    #[must_use]
    pub const fn contract_service(&self) -> SimulatedContractService {
        SimulatedContractService::new(self.contract_delay)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a millisecond duration, or fall back to `default` if unset.
fn get_millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Duration,
) -> Result<Duration, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a boolean flag; unset means `false`.
fn get_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<bool, ConfigError> {
    match lookup(key).as_deref().map(str::trim) {
        None | Some("" | "0" | "false") => Ok(false),
        Some("1" | "true") => Ok(true),
        Some(other) => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected true or false, got {other}"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.otp_delay, Duration::from_millis(1500));
        assert_eq!(config.contract_delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_delays_from_env() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("SHIBA_OTP_DELAY_MS", "0"),
            ("SHIBA_CONTRACT_DELAY_MS", " 250 "),
        ]))
        .unwrap();
        assert_eq!(config.otp_delay, Duration::ZERO);
        assert_eq!(config.contract_delay, Duration::from_millis(250));
        assert_eq!(config.auth_service().delay(), Duration::ZERO);
    }

    #[test]
    fn test_invalid_delay() {
        let err = StorefrontConfig::from_lookup(lookup(&[("SHIBA_OTP_DELAY_MS", "fast")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "SHIBA_OTP_DELAY_MS"));
    }

    #[test]
    fn test_log_filter_precedence() {
        let config =
            StorefrontConfig::from_lookup(lookup(&[("RUST_LOG", "debug")])).unwrap();
        assert_eq!(config.log_filter, "debug");

        let config = StorefrontConfig::from_lookup(lookup(&[
            ("RUST_LOG", "debug"),
            ("SHIBA_LOG", "shiba_storefront=trace"),
        ]))
        .unwrap();
        assert_eq!(config.log_filter, "shiba_storefront=trace");
    }

    #[test]
    fn test_log_json_flag() {
        let config = StorefrontConfig::from_lookup(lookup(&[("SHIBA_LOG_JSON", "1")])).unwrap();
        assert!(config.log_json);

        let err = StorefrontConfig::from_lookup(lookup(&[("SHIBA_LOG_JSON", "yes")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "SHIBA_LOG_JSON"));
    }
}
