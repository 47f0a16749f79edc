use serde::Deserialize;

/// Configuration options for the catalog service.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Path of the SQLite database file.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Interface the HTTP server binds to.
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_database_url() -> String {
    "app.db".to_string()
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            address: default_address(),
            port: default_port(),
        }
    }
}

#[cfg(feature = "server")]
impl ServerConfig {
    /// Read `config/default.yaml` (if present) and overlay `APP_*` environment
    /// variables on top of it.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config/default")
    }

    /// Same as [`Self::load`] with an explicit base file (extension optional).
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
