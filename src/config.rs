mod cors;
mod server;

pub use cors::{CorsConfig, Environment};
pub use server::ServerConfig;

use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::env;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// The environment is read exactly once here; the resulting snapshot is
    /// immutable for the lifetime of the process. Range checks are left to
    /// [`Config::validate`] so CLI overrides can be applied first.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::Configuration(format!("Invalid PORT: {}", value)))?,
            None => DEFAULT_PORT,
        };

        let environment = Environment::from_node_env(lookup("NODE_ENV").as_deref());
        let frontend_origin = lookup("FRONTEND_ORIGIN");

        Ok(Config {
            server: ServerConfig { host, port },
            cors: CorsConfig {
                environment,
                frontend_origin,
            },
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> AppResult<()> {
        self.server.validate().map_err(AppError::Configuration)
    }
}
