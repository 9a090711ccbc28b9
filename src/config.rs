//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export LOG_FORMAT="json"
//! export PLATFORM_PRECEDENCE="detected"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IPs from proxy headers (default: `false`)
//! - `PLATFORM_PRECEDENCE` - `detected` or `manual` (default: `detected`)
//! - `PLATFORM_MATCH_MODE` - `substring` or `host` (default: `substring`)
//! - `RATE_LIMIT_REPLENISH_MS` - Milliseconds per replenished request (default: 100)
//! - `RATE_LIMIT_BURST` - Burst size per client IP (default: 100)

use anyhow::{Context, Result};
use std::env;

use crate::api::middleware::rate_limit::RateLimitSettings;
use crate::domain::{MatchMode, Precedence};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Whether URL detection or the manual platform tag wins on conflict.
    pub precedence: Precedence,
    /// How domain patterns are compared against URLs.
    pub match_mode: MatchMode,
    pub rate_limit_replenish_ms: u64,
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
            precedence: Precedence::Detected,
            match_mode: MatchMode::Substring,
            rate_limit_replenish_ms: 100,
            rate_limit_burst: 100,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PLATFORM_PRECEDENCE` or `PLATFORM_MATCH_MODE` is
    /// set to an unknown value.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.behind_proxy);

        let precedence = match env::var("PLATFORM_PRECEDENCE") {
            Ok(value) => value
                .parse()
                .context("Failed to parse PLATFORM_PRECEDENCE")?,
            Err(_) => defaults.precedence,
        };

        let match_mode = match env::var("PLATFORM_MATCH_MODE") {
            Ok(value) => value
                .parse()
                .context("Failed to parse PLATFORM_MATCH_MODE")?,
            Err(_) => defaults.match_mode,
        };

        let rate_limit_replenish_ms = env::var("RATE_LIMIT_REPLENISH_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.rate_limit_replenish_ms);

        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.rate_limit_burst);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            precedence,
            match_mode,
            rate_limit_replenish_ms,
            rate_limit_burst,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - either rate limit value is zero
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

        if self.rate_limit_replenish_ms == 0 {
            anyhow::bail!("RATE_LIMIT_REPLENISH_MS must be greater than 0");
        }

        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be greater than 0");
        }

        Ok(())
    }

    /// Rate limiter settings derived from this configuration.
    pub fn rate_limit(&self) -> RateLimitSettings {
        RateLimitSettings {
            replenish_ms: self.rate_limit_replenish_ms,
            burst: self.rate_limit_burst,
            behind_proxy: self.behind_proxy,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Platform precedence: {}", self.precedence);
        tracing::info!("  Match mode: {}", self.match_mode);
        tracing::info!(
            "  Rate limit: 1 request / {}ms, burst {} (behind proxy: {})",
            self.rate_limit_replenish_ms,
            self.rate_limit_burst,
            self.behind_proxy
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
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
