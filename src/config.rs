//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! All variables are optional and fall back to sensible defaults:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `FORECAST_DAYS_DEFAULT` - Forecast window when a request does not
//!   specify one (default: 5)
//! - `FORECAST_DAYS_MAX` - Largest forecast window a request may ask for
//!   (default: 14, upper bound: 31)
//!
//! A `.env` file is honored in development (loaded in `main.rs` via
//! `dotenvy::dotenv()` before configuration is read).

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Forecast window used when a request omits the `days` parameter.
    pub forecast_days_default: u16,
    /// Largest forecast window a single request may ask for.
    pub forecast_days_max: u16,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let forecast_days_default = env::var("FORECAST_DAYS_DEFAULT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let forecast_days_max = env::var("FORECAST_DAYS_MAX")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(14);

        Self {
            listen_addr,
            log_level,
            log_format,
            forecast_days_default,
            forecast_days_max,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - the forecast window bounds are zero, inconsistent, or above 31
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        // Validate forecast window bounds
        if self.forecast_days_default == 0 {
            anyhow::bail!("FORECAST_DAYS_DEFAULT must be at least 1");
        }

        if self.forecast_days_max == 0 || self.forecast_days_max > 31 {
            anyhow::bail!(
                "FORECAST_DAYS_MAX must be between 1 and 31, got {}",
                self.forecast_days_max
            );
        }

        if self.forecast_days_default > self.forecast_days_max {
            anyhow::bail!(
                "FORECAST_DAYS_DEFAULT ({}) must not exceed FORECAST_DAYS_MAX ({})",
                self.forecast_days_default,
                self.forecast_days_max
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Forecast window: {} days (max {})",
            self.forecast_days_default,
            self.forecast_days_max
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            forecast_days_default: 5,
            forecast_days_max: 14,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();

        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        // Test invalid forecast windows
        config.forecast_days_default = 0;
        assert!(config.validate().is_err());

        config.forecast_days_default = 5;
        config.forecast_days_max = 0;
        assert!(config.validate().is_err());

        config.forecast_days_max = 60;
        assert!(config.validate().is_err());

        config.forecast_days_max = 3;
        assert!(config.validate().is_err());

        config.forecast_days_max = 14;
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("FORECAST_DAYS_DEFAULT");
            env::remove_var("FORECAST_DAYS_MAX");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.forecast_days_default, 5);
        assert_eq!(config.forecast_days_max, 14);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("LOG_FORMAT", "json");
            env::set_var("FORECAST_DAYS_DEFAULT", "7");
            env::set_var("FORECAST_DAYS_MAX", "21");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.log_format, "json");
        assert_eq!(config.forecast_days_default, 7);
        assert_eq!(config.forecast_days_max, 21);

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("FORECAST_DAYS_DEFAULT");
            env::remove_var("FORECAST_DAYS_MAX");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_unparsable_window() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("FORECAST_DAYS_DEFAULT", "not-a-number");
        }

        let config = Config::from_env();
        assert_eq!(config.forecast_days_default, 5);

        // Cleanup
        unsafe {
            env::remove_var("FORECAST_DAYS_DEFAULT");
        }
    }
}
