use std::time::Duration;
use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use crate::utils::logs::parse_level;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration holds the resolved settings for the catalog service. It is built once at
// startup and handed to whoever needs it; nothing looks settings up by key afterwards.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub service_name: String,
    pub version: String,
    pub listen_addr: String,
    pub port: u16,
    pub request_timeout_ms: u64,
    pub log_level: String,
}

impl Configuration {
    pub fn new(service_name: &str) -> Self {
        Configuration {
            service_name: service_name.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            port: DEFAULT_PORT,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    // Overlays BOOK_LISTEN_ADDR, BOOK_PORT, BOOK_REQUEST_TIMEOUT_MS and BOOK_LOG_LEVEL (the
    // prefix is the upper-cased service name) from the process environment onto the defaults.
    pub fn from_env(service_name: &str) -> Result<Self, ConfigError> {
        Self::load(service_name, Self::environment(service_name))
    }

    pub fn environment(service_name: &str) -> Environment {
        Environment::with_prefix(service_name.to_uppercase().as_str())
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    // Values that do not parse fail the load instead of silently falling back to a default.
    pub fn load(service_name: &str, environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Configuration::new(service_name);
        let mut config: Configuration = Config::builder()
            .set_default("listen_addr", defaults.listen_addr.as_str())?
            .set_default("port", defaults.port as i64)?
            .set_default("request_timeout_ms", defaults.request_timeout_ms as i64)?
            .set_default("log_level", defaults.log_level.as_str())?
            .add_source(environment)
            .set_override("service_name", defaults.service_name.as_str())?
            .set_override("version", defaults.version.as_str())?
            .build()?
            .try_deserialize()?;
        config.log_level = config.log_level.to_lowercase();
        if parse_level(config.log_level.as_str()).is_none() {
            return Err(ConfigError::Message(
                format!("invalid log_level {:?} for {}", config.log_level, service_name)));
        }
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.listen_addr, self.port)
    }
}
