//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export PORT="8080"
//! export HOST="localhost"
//! ```
//!
//! The base URL used for short links is built as `http://{HOST}:{PORT}`.
//!
//! ## Optional Variables
//!
//! - `PORT` - Listen port (default: `8080`)
//! - `HOST` - Host name used in short URLs (default: `localhost`)
//! - `BIND_ADDR` - Interface to bind (default: `0.0.0.0`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! Variables that are set but empty fall back to their defaults.

use anyhow::Result;
use std::env;

const DEFAULT_PORT: &str = "8080";
const DEFAULT_HOST: &str = "localhost";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: String,
    pub host: String,
    pub bind_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            host: DEFAULT_HOST.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            port: env_or("PORT", DEFAULT_PORT),
            host: env_or("HOST", DEFAULT_HOST),
            bind_addr: env_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            log_level: env_or("RUST_LOG", "info"),
            log_format: env_or("LOG_FORMAT", "text"),
        }
    }

    /// Base URL prepended to every short code.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Socket address the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `port` is not a number between 1 and 65535
    /// - `host` is empty or contains whitespace or `/`
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        match self.port.parse::<u16>() {
            Ok(0) | Err(_) => anyhow::bail!(
                "PORT must be a number between 1 and 65535, got '{}'",
                self.port
            ),
            Ok(_) => {}
        }

        if self.host.is_empty() || self.host.contains(|c: char| c.is_whitespace() || c == '/') {
            anyhow::bail!("HOST must be a bare host name, got '{}'", self.host);
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Base URL: {}", self.base_url());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
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
