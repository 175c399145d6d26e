//! Service configuration management

use anyhow::{Context, Result};
use mfl_fetcher::MflConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::error::ServiceError;

/// Environment variables named `RANKINGS__<SECTION>__<KEY>` override file values
pub const ENV_PREFIX: &str = "RANKINGS";
pub const ENV_SEPARATOR: &str = "__";

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// League connection settings
    pub mfl: MflConfig,

    /// HTTP server settings
    pub server: ServerConfig,

    /// Table rendering settings
    pub render: RenderConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Table rendering settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Show team IDs instead of team and owner names unless a request asks otherwise
    pub hide_team_names: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty)
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 8080 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid server address {}:{}", self.host, self.port))
    }
}

/// Load configuration from defaults, an optional TOML file and the environment
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig> {
    let defaults = config::Config::try_from(&ServiceConfig::default())
        .context("Failed to build default configuration")?;

    let mut builder = config::Config::builder().add_source(defaults);

    if let Some(path) = path {
        tracing::debug!("Loading configuration from file: {:?}", path);
        builder = builder.add_source(config::File::from(path).required(true));
    }

    let mut config: ServiceConfig = builder
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR))
        .build()
        .context("Failed to read configuration")?
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    config.mfl.resolve_api_key();
    validate_config(&config)?;

    Ok(config)
}

/// Validate configuration
pub fn validate_config(config: &ServiceConfig) -> Result<(), ServiceError> {
    if config.mfl.league_id.trim().is_empty() {
        return Err(ServiceError::Config("League ID must not be empty".to_string()));
    }

    if config.mfl.season.trim().is_empty() {
        return Err(ServiceError::Config("Season must not be empty".to_string()));
    }

    if config.mfl.request_timeout_secs == 0 || config.mfl.scrape_timeout_secs == 0 {
        return Err(ServiceError::Config("Timeouts must be at least one second".to_string()));
    }

    match config.logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => {
            return Err(ServiceError::Config(format!(
                "Invalid log level: {}",
                config.logging.level
            )))
        }
    }

    match config.logging.format.as_str() {
        "json" | "pretty" => {}
        _ => {
            return Err(ServiceError::Config(format!(
                "Invalid log format: {}",
                config.logging.format
            )))
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};

    // Tests that read RANKINGS__* variables hold this lock
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn isolated_env() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let prefix = format!("{ENV_PREFIX}{ENV_SEPARATOR}");
        for (key, _) in std::env::vars() {
            if key.starts_with(&prefix) {
                std::env::remove_var(key);
            }
        }
        guard
    }

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = ServiceConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.server.socket_addr().unwrap().port(), 8080);
        assert!(!config.render.hide_team_names);
    }

    #[test]
    fn test_load_from_file() {
        let _env = isolated_env();
        let file = config_file(
            r#"
[mfl]
season = "2024"
league_id = "42"

[server]
port = 3000

[render]
hide_team_names = true

[logging]
format = "json"
"#,
        );

        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.mfl.season, "2024");
        assert_eq!(config.mfl.league_id, "42");
        assert_eq!(config.mfl.scrape_timeout_secs, 90);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.render.hide_team_names);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_environment_overrides() {
        let _env = isolated_env();
        let file = config_file(
            r#"
[mfl]
league_id = "42"

[server]
port = 3000
"#,
        );

        std::env::set_var("RANKINGS__MFL__LEAGUE_ID", "999");
        std::env::set_var("RANKINGS__SERVER__PORT", "3001");
        let from_file = load_config(Some(file.path()));
        let from_defaults = load_config(None);
        std::env::remove_var("RANKINGS__MFL__LEAGUE_ID");
        std::env::remove_var("RANKINGS__SERVER__PORT");

        let config = from_file.unwrap();
        assert_eq!(config.mfl.league_id, "999");
        assert_eq!(config.server.port, 3001);

        let config = from_defaults.unwrap();
        assert_eq!(config.mfl.league_id, "999");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.mfl.season, "2023");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/rankings.toml"))).is_err());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut config = ServiceConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(matches!(validate_config(&config), Err(ServiceError::Config(_))));

        let mut config = ServiceConfig::default();
        config.logging.format = "xml".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = ServiceConfig::default();
        config.mfl.league_id = " ".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = ServiceConfig::default();
        config.mfl.request_timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_server_address() {
        let server = ServerConfig { host: "not a host".to_string(), port: 80 };
        assert!(server.socket_addr().is_err());
    }
}
