//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub tracker: TrackerConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory static files are served from
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_dir: default_public_dir(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Visit tracker (cookie counter) configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Cookie lifetime in seconds
    #[serde(default = "default_max_age_secs")]
    pub max_age_secs: i64,
}

fn default_cookie_name() -> String {
    "visit_count".to_string()
}

fn default_max_age_secs() -> i64 {
    900
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            max_age_secs: default_max_age_secs(),
        }
    }
}

/// Catalog data configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// JSON file the exploit listing is indexed from
    #[serde(default = "default_exploit_data")]
    pub exploit_data: PathBuf,

    /// Quiet interval before a requested reindex actually runs (ms)
    #[serde(default = "default_reindex_debounce")]
    pub reindex_debounce_ms: u64,
}

fn default_exploit_data() -> PathBuf {
    PathBuf::from("data/exploits.json")
}

fn default_reindex_debounce() -> u64 {
    300
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            exploit_data: default_exploit_data(),
            reindex_debounce_ms: default_reindex_debounce(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("wagon").join("config.toml")),
            Some(PathBuf::from("/etc/wagon/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("WAGON_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("WAGON_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(dir) = std::env::var("WAGON_PUBLIC_DIR") {
            self.server.public_dir = PathBuf::from(dir);
        }

        if let Ok(path) = std::env::var("WAGON_EXPLOIT_DATA") {
            self.catalog.exploit_data = PathBuf::from(path);
        }

        if let Ok(level) = std::env::var("WAGON_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("WAGON_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Wagon Configuration
#
# Environment variables override these settings:
# - WAGON_HOST
# - WAGON_PORT
# - WAGON_PUBLIC_DIR
# - WAGON_EXPLOIT_DATA
# - WAGON_LOG_LEVEL
# - WAGON_LOG_FORMAT

[server]
# Server host
host = "0.0.0.0"

# Server port
port = 8080

# Directory static files are served from
public_dir = "public"

[tracker]
# Name of the visit counter cookie
cookie_name = "visit_count"

# Cookie lifetime in seconds
max_age_secs = 900

[catalog]
# JSON file the exploit listing is indexed from
exploit_data = "data/exploits.json"

# Quiet interval before a requested reindex actually runs (ms)
reindex_debounce_ms = 300

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_template_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.tracker.cookie_name, "visit_count");
        assert_eq!(config.catalog.reindex_debounce_ms, 300);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[server]\nport = 9090\n").unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.tracker.max_age_secs, 900);
        assert_eq!(
            config.catalog.exploit_data,
            PathBuf::from("data/exploits.json")
        );
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
