//! Configuration management for the assistant.
//!
//! Only ambient settings live here: the logging level and the prompt text.
//! Contacts themselves are never configured or persisted.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Prompt written before every line read.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for the assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt shown before each command (default: "Enter a command: ")
    pub prompt: String,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_PROMPT`: Prompt text (default: "Enter a command: ")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        if prompt.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_PROMPT".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = Self::parse_log_level("LOG_LEVEL", "error")?;

        Ok(Config { prompt, log_level })
    }

    /// Parse an environment variable as a tracing level name with a default value.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_lowercase();
                match level.as_str() {
                    "off" | "error" | "warn" | "info" | "debug" | "trace" => Ok(level),
                    _ => Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!(
                            "Must be one of off, error, warn, info, debug, trace, got: {}",
                            val
                        ),
                    }),
                }
            }
            Err(_) => Ok(default.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

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
        assert_eq!(config.prompt, "Enter a command: ");
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ASSISTANT_PROMPT", "> ");
        guard.set("LOG_LEVEL", "DEBUG");

        let config = Config::from_env().unwrap();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_prompt() {
        let mut guard = EnvGuard::new();
        guard.set("ASSISTANT_PROMPT", "   ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "ASSISTANT_PROMPT"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_LOG_LEVEL", "warn");

        assert_eq!(Config::parse_log_level("TEST_LOG_LEVEL", "error").unwrap(), "warn");
        assert_eq!(Config::parse_log_level("NONEXISTENT", "error").unwrap(), "error");
    }

    #[test]
    #[serial]
    fn test_parse_log_level_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_LOG_LEVEL_INVALID", "loud");

        assert!(Config::parse_log_level("TEST_LOG_LEVEL_INVALID", "error").is_err());
    }
}
