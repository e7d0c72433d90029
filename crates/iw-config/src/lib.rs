//! # iw-config
//!
//! Runtime settings, layered as: built-in defaults, then `DATABASE_URL`,
//! then `INKWELL_*` environment variables. A `.env` file in the working
//! directory is loaded into the environment first when present.

use config::{Config, Environment};
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:inkwell.db?mode=rwc";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

/// Deployment mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    /// One shared database connection, verbose logs.
    #[default]
    Development,
    Production,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app_env: AppEnv,
    pub host: String,
    pub port: u16,
    pub database_url: SecretString,
    /// Pool cap in production; development always uses one connection.
    pub database_max_connections: u32,
}

impl Settings {
    /// Reads `.env` (if any) and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err.into());
            }
        }

        Self::build(
            std::env::var("DATABASE_URL").ok(),
            Environment::with_prefix("INKWELL"),
        )
    }

    fn build(database_url: Option<String>, env: Environment) -> Result<Self, ConfigError> {
        let settings: Self = Config::builder()
            .set_default("app_env", "development")?
            .set_default("host", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default(
                "database_url",
                database_url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            )?
            .set_default("database_max_connections", 5)?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Connections the process-wide pool may open.
    pub fn pool_size(&self) -> u32 {
        match self.app_env {
            AppEnv::Development => 1,
            AppEnv::Production => self.database_max_connections.max(1),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env == AppEnv::Production
    }
}
