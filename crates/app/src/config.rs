//! Configuration
//!
//! Flattened into the CLI; every option can also come from the environment
//! or a `.env` file.

use std::time::Duration;

use clap::{Args, ValueEnum};
use rusty_money::iso::{self, Currency};
use storefront_cart::images::DEFAULT_PLACEHOLDER;
use thiserror::Error;

use crate::{client::HttpCartServiceConfig, identity::StaticIdentity};

/// Errors raised while interpreting configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The currency code is not a known ISO 4217 code.
    #[error("unknown currency code {0:?}")]
    UnknownCurrency(String),
}

/// Storefront connection and display settings.
#[derive(Debug, Clone, Args)]
pub struct StorefrontConfig {
    /// Storefront origin serving `/api/cart` and `/images/`
    #[arg(long, env = "STOREFRONT_ORIGIN", default_value = "http://localhost:5000")]
    pub origin: String,

    /// ISO 4217 currency used to display amounts
    #[arg(long, env = "STOREFRONT_CURRENCY", default_value = "USD")]
    pub currency: String,

    /// Image shown when an item image is missing or fails to load
    #[arg(long, env = "STOREFRONT_PLACEHOLDER_IMAGE", default_value = DEFAULT_PLACEHOLDER)]
    pub placeholder_image: String,

    /// Signed-in user; anonymous when omitted
    #[arg(long, env = "STOREFRONT_USER")]
    pub user: Option<String>,

    /// HTTP timeout in seconds; requests wait indefinitely when omitted
    #[arg(long, env = "STOREFRONT_TIMEOUT_SECONDS")]
    pub timeout_seconds: Option<u64>,
}

impl StorefrontConfig {
    /// Looks up the configured display currency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownCurrency`] for unrecognised codes.
    pub fn currency(&self) -> Result<&'static Currency, ConfigError> {
        iso::find(&self.currency.to_ascii_uppercase())
            .ok_or_else(|| ConfigError::UnknownCurrency(self.currency.clone()))
    }

    /// Settings for the HTTP cart service.
    pub fn service_config(&self) -> HttpCartServiceConfig {
        HttpCartServiceConfig {
            origin: self.origin.clone(),
            timeout: self.timeout_seconds.map(Duration::from_secs),
        }
    }

    /// The configured identity.
    pub fn identity(&self) -> StaticIdentity {
        StaticIdentity::from(self.user.clone())
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
