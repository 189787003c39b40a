// Immutable runtime configuration, resolved once at startup.
//
// Purpose
// - Replace scattered environment lookups with one struct handed to the
//   composition root.
//
// Boundaries
// - Only reads the environment; no file or network access.

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://comment_board.db";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("invalid SCHEMA_SYNC value: {0} (expected \"before-listen\" or \"background\")")]
    InvalidSchemaSync(String),

    #[error("invalid WATCH_TEMPLATES value: {0} (expected \"true\" or \"false\")")]
    InvalidWatchTemplates(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// When the schema synchronization runs relative to opening the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaSyncMode {
    /// Sync completes (or fails and is logged) before the socket binds.
    BeforeListen,
    /// Sync is spawned onto the runtime and races the listener.
    Background,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub env: Environment,
    pub database_url: String,
    pub views_dir: PathBuf,
    pub public_dir: PathBuf,
    pub schema_sync: SchemaSyncMode,
    pub watch_templates: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary lookup, so tests never have to
    /// mutate the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let env = match lookup("APP_ENV").as_deref() {
            Some("production") => Environment::Production,
            _ => Environment::Development,
        };

        let schema_sync = match lookup("SCHEMA_SYNC").as_deref() {
            None | Some("before-listen") => SchemaSyncMode::BeforeListen,
            Some("background") => SchemaSyncMode::Background,
            Some(other) => return Err(ConfigError::InvalidSchemaSync(other.to_string())),
        };

        let watch_templates = match lookup("WATCH_TEMPLATES").as_deref() {
            Some("true") => true,
            Some("false") => false,
            Some(other) => return Err(ConfigError::InvalidWatchTemplates(other.to_string())),
            None => !env.is_production(),
        };

        Ok(Self {
            port,
            env,
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            views_dir: lookup("VIEWS_DIR").map_or_else(|| "views".into(), PathBuf::from),
            public_dir: lookup("PUBLIC_DIR").map_or_else(|| "public".into(), PathBuf::from),
            schema_sync,
            watch_templates,
        })
    }
}
