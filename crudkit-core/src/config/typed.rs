use super::{ConfigError, CrudConfig};

/// Trait for strongly-typed configuration sections.
///
/// ```ignore
/// impl ConfigProperties for MailConfig {
///     fn from_config(config: &CrudConfig) -> Result<Self, ConfigError> {
///         Ok(Self { host: config.get("app.mail.host")? })
///     }
/// }
/// ```
pub trait ConfigProperties: Sized {
    /// Construct from a `CrudConfig` instance.
    fn from_config(config: &CrudConfig) -> Result<Self, ConfigError>;
}

/// Listening address and store location of a crudkit server.
///
/// | Key | Fallback key | Default |
/// |-----|--------------|---------|
/// | `app.host` | | `0.0.0.0` |
/// | `app.port` | `port` (`PORT`) | `5000` |
/// | `app.database.url` | `database.url` (`DATABASE_URL`) | `sqlite::memory:` |
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 5000;

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: Self::DEFAULT_PORT,
            database_url: "sqlite::memory:".to_string(),
        }
    }
}

impl ConfigProperties for ServerConfig {
    fn from_config(config: &CrudConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match config.get::<u16>("app.port") {
            Err(ConfigError::NotFound(_)) => config.get_or("port", defaults.port),
            other => other?,
        };
        let database_url = match config.get::<String>("app.database.url") {
            Err(ConfigError::NotFound(_)) => config.get_or("database.url", defaults.database_url),
            other => other?,
        };
        Ok(Self {
            host: config.get_or("app.host", defaults.host),
            port,
            database_url,
        })
    }
}
