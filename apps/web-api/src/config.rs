//! Configuration for the web API

use color_eyre::Section;
use core_config::{
    AppInfo, FromEnv, app_info, env_optional, security::SecurityConfig, server::ServerConfig,
};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub security: SecurityConfig,
    /// `None` keeps products in memory.
    pub database: Option<PostgresConfig>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let security = SecurityConfig::from_env()
            .suggestion("ACCESS_POLICY only accepts permit_all")?;

        let database = match env_optional("DATABASE_URL") {
            Some(_) => Some(PostgresConfig::from_env()?),
            None => None,
        };

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            security,
            database,
        })
    }

    /// Defaults with in-memory products.
    pub fn in_memory() -> Self {
        Self {
            app: app_info!(),
            environment: Environment::Development,
            server: ServerConfig::default(),
            security: SecurityConfig::default(),
            database: None,
        }
    }
}
