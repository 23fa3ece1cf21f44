use crate::core::{AppError, Result};
use crate::modules::gateways::PayfastProviderConfig;
use serde::Deserialize;
use std::env;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub payfast: PayfastProviderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            payfast: PayfastProviderConfig {
                merchant_id: env::var("PAYFAST_MERCHANT_ID").map_err(|_| {
                    AppError::Configuration("PAYFAST_MERCHANT_ID not set".to_string())
                })?,
                merchant_key: env::var("PAYFAST_MERCHANT_KEY").map_err(|_| {
                    AppError::Configuration("PAYFAST_MERCHANT_KEY not set".to_string())
                })?,
                passphrase: env::var("PAYFAST_PASSPHRASE").unwrap_or_default(),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        self.payfast.validate()
    }
}
