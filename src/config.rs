use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::TodoError;

/// Optional config file read from the working directory.
pub const CONFIG_FILE: &str = "config.toml";
/// Prefix for environment overrides, e.g. `TODO_DATABASE_URL`, `TODO_TRANSPORTS__FORM`.
pub const ENV_PREFIX: &str = "TODO_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub listen_addr: String,
    pub loglevel: String,
    pub transports: Transports,
}

/// Which transport adapters get mounted on the router.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transports {
    pub json: bool,
    pub form: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://todo.db".to_string(),
            max_connections: 5,
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            transports: Transports::default(),
        }
    }
}

impl Default for Transports {
    fn default() -> Self {
        Self {
            json: true,
            form: true,
        }
    }
}

impl Config {
    /// Defaults, then `config.toml`, then `TODO_*` environment variables.
    pub fn load() -> Result<Self, TodoError> {
        Self::from_figment(
            Figment::from(Serialized::defaults(Config::default()))
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self, TodoError> {
        let cfg: Config = figment.extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), TodoError> {
        if !self.transports.json && !self.transports.form {
            return Err(TodoError::NoTransport);
        }
        if self.max_connections == 0 {
            return Err(TodoError::InvalidConfig(
                "max_connections must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
