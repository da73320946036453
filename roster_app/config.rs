use dotenvy::dotenv;
use std::env;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const MAX_DB_CONNECTIONS: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub db_max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self::from_vars(
            env::var("PORT").ok(),
            env::var("ROSTER_DB_MAX_CONNECTIONS").ok(),
        )
    }

    /// Builds the config from raw variable values; missing or unparseable
    /// values fall back to the defaults.
    pub fn from_vars(port: Option<String>, db_max_connections: Option<String>) -> Self {
        let port = port
            .and_then(|val| val.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let db_max_connections = db_max_connections
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
            .clamp(1, MAX_DB_CONNECTIONS);

        Self {
            port,
            db_max_connections,
        }
    }
}
