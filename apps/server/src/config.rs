//! Server configuration
//!
//! Values are layered, later sources overriding earlier ones:
//! 1. Built-in defaults ([`Config::default`])
//! 2. Optional config file: `medscope.{toml,yaml,json}` in the working
//!    directory, or the path named by `MEDSCOPE_CONFIG` (required if set)
//! 3. Environment variables, e.g. `MEDSCOPE__SERVER__PORT=9000`
//!
//! A `.env` file is read before any of this, so its entries behave like
//! real environment variables.

use config::{Environment, File};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const CONFIG_PATH_ENV: &str = "MEDSCOPE_CONFIG";
const DEFAULT_CONFIG_NAME: &str = "medscope";
const ENV_PREFIX: &str = "MEDSCOPE";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_ROTATIONS: [&str; 4] = ["daily", "hourly", "minutely", "never"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub analytics: AnalyticsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins. `"*"` allows any origin; an empty list emits
    /// no CORS headers at all.
    pub cors_origins: Vec<String>,
    pub max_request_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            cors_origins: vec!["*".into()],
            max_request_body_size: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the JSON dataset files.
    pub directory: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Service radius reported by the geographic coverage view.
    pub service_radius_km: u32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            service_radius_km: 25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub file_enabled: bool,
    pub file_directory: PathBuf,
    pub file_prefix: String,
    /// One of `daily`, `hourly`, `minutely`, `never`.
    pub file_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
            file_enabled: false,
            file_directory: PathBuf::from("logs"),
            file_prefix: "medscope".into(),
            file_rotation: "daily".into(),
        }
    }
}

impl Config {
    /// Load configuration from defaults, the optional config file and the
    /// environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        let _ = dotenvy::dotenv();

        let file = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => File::with_name(&path).required(true),
            Err(_) => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        config::Config::builder()
            .add_source(config::Config::try_from(&Config::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins"),
            )
            .build()?
            .try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be non-zero".into());
        }
        if self.data.directory.as_os_str().is_empty() {
            return Err("data.directory must not be empty".into());
        }
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            ));
        }
        if !LOG_ROTATIONS.contains(&self.logging.file_rotation.as_str()) {
            return Err(format!(
                "logging.file_rotation must be one of {}, got '{}'",
                LOG_ROTATIONS.join(", "),
                self.logging.file_rotation
            ));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("Invalid listen address '{addr}': {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.analytics.service_radius_km, 25);
        assert_eq!(config.server.cors_origins, vec!["*".to_string()]);
        assert_eq!(config.socket_addr().unwrap().port(), 8000);
    }

    #[test]
    fn rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().unwrap_err().contains("server.port"));
    }

    #[test]
    fn rejects_empty_data_directory() {
        let mut config = Config::default();
        config.data.directory = PathBuf::new();
        assert!(config.validate().unwrap_err().contains("data.directory"));
    }

    #[test]
    fn rejects_unknown_log_settings() {
        let mut config = Config::default();
        config.logging.level = "loud".into();
        assert!(config.validate().unwrap_err().contains("logging.level"));

        let mut config = Config::default();
        config.logging.file_rotation = "weekly".into();
        assert!(config.validate().unwrap_err().contains("file_rotation"));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = Config::default();
        config.logging.level = "DEBUG".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let parsed: Config = config::Config::builder()
            .add_source(config::Config::try_from(&Config::default()).unwrap())
            .add_source(config::File::from_str(
                "[server]\nport = 9100\n[analytics]\nservice_radius_km = 40\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(parsed.server.port, 9100);
        assert_eq!(parsed.server.host, "0.0.0.0");
        assert_eq!(parsed.analytics.service_radius_km, 40);
        assert_eq!(parsed.logging.file_rotation, "daily");
    }
}
