//! Layered application settings.
//!
//! Values are resolved in order: built-in defaults, an optional settings file
//! (`trivia.toml` / `trivia.yaml` / `trivia.json` in the working directory, or
//! an explicit path), then `TRIVIA_<SECTION>__<KEY>` environment variables.
//! A `.env` file is loaded into the environment first.

use std::path::Path;
use std::str::FromStr;

use config::{Config, ConfigError, Environment, File, Source};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::sqlite::SqliteConnectOptions;

#[derive(Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
}

#[derive(Deserialize, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(Deserialize)]
pub struct DatabaseSettings {
    pub url: SecretString,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_connections: u32,
    pub create_if_missing: bool,
    /// Apply pending migrations when the server starts.
    pub migrate: bool,
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("trivia").required(false),
        };
        Self::from_sources(file, environment())
    }

    fn from_sources<S>(file: S, env: Environment) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        Config::builder()
            .set_default("application.host", "127.0.0.1")?
            .set_default("application.port", "5000")?
            .set_default("database.url", "sqlite:trivia.db")?
            .set_default("database.max_connections", "5")?
            .set_default("database.create_if_missing", true)?
            .set_default("database.migrate", true)?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

/// `TRIVIA_DATABASE__URL` sets `database.url`.
fn environment() -> Environment {
    Environment::with_prefix("TRIVIA")
        .prefix_separator("_")
        .separator("__")
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> Result<SqliteConnectOptions, sqlx::Error> {
        Ok(SqliteConnectOptions::from_str(self.url.expose_secret())?
            .create_if_missing(self.create_if_missing))
    }
}
