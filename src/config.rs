//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file picked up the same way.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the address book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level for the tracing filter (default: "error")
    pub log_level: String,

    /// How many times a field prompt is retried after a validation
    /// failure before the operation is abandoned (default: 3)
    pub max_input_attempts: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `MAX_INPUT_ATTEMPTS`: Prompt retries per field, at least 1 (default: 3)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let max_input_attempts = Self::parse_env_usize("MAX_INPUT_ATTEMPTS", 3)?;
        if max_input_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_INPUT_ATTEMPTS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        Ok(Config {
            log_level,
            max_input_attempts,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            max_input_attempts: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "error");
        assert_eq!(config.max_input_attempts, 3);
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("LOG_LEVEL");
        env::remove_var("MAX_INPUT_ATTEMPTS");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "error");
        assert_eq!(config.max_input_attempts, 3);
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "debug");
        guard.set("MAX_INPUT_ATTEMPTS", "5");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.max_input_attempts, 5);
    }

    #[test]
    #[serial]
    fn test_config_rejects_zero_attempts() {
        let mut guard = EnvGuard::new();
        guard.set("MAX_INPUT_ATTEMPTS", "0");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "MAX_INPUT_ATTEMPTS");
        }
    }

    #[test]
    #[serial]
    fn test_config_rejects_non_numeric_attempts() {
        let mut guard = EnvGuard::new();
        guard.set("MAX_INPUT_ATTEMPTS", "many");

        let result = Config::from_env();
        assert!(result.is_err());
    }
}
