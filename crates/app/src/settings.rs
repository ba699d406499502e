//! Application settings, read from `settings.toml`.
//!
//! See the `settings.toml` at the repository root for a commented example.

use config::{Config, ConfigError, File};
use serde::Deserialize;

/// Which database the server opens.
///
/// `database = "memory"` for a throwaway in-memory store, or
/// `database = { sqlite = "expenses.db" }` for a file-backed one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    pub database: Database,
    pub seed: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("settings"))
            .build()?;

        settings.try_deserialize()
    }
}
