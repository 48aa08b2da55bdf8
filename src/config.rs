//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `SESSION_SIGNING_SECRET` - HMAC key used to hash session tokens before
//!   storage. Must be non-empty.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IP from forwarding headers (default: `false`)
//! - `SESSION_TTL_SECONDS` - Lifetime of issued sessions (default: 86400)
//! - `DEMO_EMAIL` / `DEMO_PASSWORD` - Credentials of the seeded demo account

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Lifetime of issued dashboard/API sessions in seconds.
    pub session_ttl_seconds: u64,
    /// HMAC signing secret used to hash session tokens before storage.
    /// Loaded from `SESSION_SIGNING_SECRET`. Must be non-empty.
    pub session_signing_secret: String,
    /// Email of the seeded demo account.
    pub demo_email: String,
    /// Password of the seeded demo account.
    pub demo_password: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SESSION_SIGNING_SECRET` is missing.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let session_ttl_seconds = env::var("SESSION_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86_400);

        let session_signing_secret =
            env::var("SESSION_SIGNING_SECRET").context("SESSION_SIGNING_SECRET must be set")?;

        let demo_email =
            env::var("DEMO_EMAIL").unwrap_or_else(|_| "demo@quickvendor.app".to_string());
        let demo_password = env::var("DEMO_PASSWORD").unwrap_or_else(|_| "demo-password".to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            session_ttl_seconds,
            session_signing_secret,
            demo_email,
            demo_password,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `session_ttl_seconds` is zero
    /// - `session_signing_secret` is empty
    /// - `demo_password` is shorter than 8 characters
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.session_ttl_seconds == 0 {
            anyhow::bail!("SESSION_TTL_SECONDS must be greater than 0");
        }

        if self.session_signing_secret.is_empty() {
            anyhow::bail!("SESSION_SIGNING_SECRET must not be empty");
        }

        if self.demo_password.len() < 8 {
            anyhow::bail!("DEMO_PASSWORD must be at least 8 characters");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Session TTL: {}s", self.session_ttl_seconds);
        tracing::info!("  Demo account: {}", self.demo_email);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
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
            behind_proxy: false,
            session_ttl_seconds: 86_400,
            session_signing_secret: "test-secret".to_string(),
            demo_email: "demo@quickvendor.app".to_string(),
            demo_password: "demo-password".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.session_ttl_seconds = 0;
        assert!(config.validate().is_err());

        config.session_ttl_seconds = 3600;

        config.session_signing_secret = String::new();
        assert!(config.validate().is_err());

        config.session_signing_secret = "secret".to_string();

        config.demo_password = "short".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_requires_signing_secret() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("SESSION_SIGNING_SECRET");
        }

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SESSION_SIGNING_SECRET", "test-secret");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("SESSION_TTL_SECONDS");
            env::remove_var("DEMO_EMAIL");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.session_ttl_seconds, 86_400);
        assert_eq!(config.demo_email, "demo@quickvendor.app");

        // Cleanup
        unsafe {
            env::remove_var("SESSION_SIGNING_SECRET");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SESSION_SIGNING_SECRET", "test-secret");
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("SESSION_TTL_SECONDS", "3600");
            env::set_var("BEHIND_PROXY", "true");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.session_ttl_seconds, 3600);
        assert!(config.behind_proxy);

        // Cleanup
        unsafe {
            env::remove_var("SESSION_SIGNING_SECRET");
            env::remove_var("LISTEN");
            env::remove_var("SESSION_TTL_SECONDS");
            env::remove_var("BEHIND_PROXY");
        }
    }
}
