//! Configuration management for the component registry

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,

    /// Registry source configuration
    pub registry: RegistryConfig,

    /// API configuration
    pub api: ApiConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Offline build configuration (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildConfig>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Registry source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Project root directory; manifest file paths resolve against this
    #[serde(default = "default_project_root")]
    pub project_root: PathBuf,

    /// Manifest document path (relative to `project_root`)
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    /// Public base URL used to derive `meta.source` for served components
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Single origin allowed by the CORS policy
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,

    /// Request timeout in seconds, applied to every route
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Offline build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for generated registry files
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Base URL embedded in generated `meta.source` and index URLs
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_project_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_manifest_file() -> String {
    "registry.json".to_string()
}

fn default_base_url() -> String {
    std::env::var("REGISTRY_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

fn default_allowed_origin() -> String {
    "https://v0.dev".to_string()
}

const fn default_request_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Load configuration from environment and files
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("REGISTRY").separator("_"))
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })
    }

    /// Absolute path of the manifest document
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.registry.project_root.join(&self.registry.manifest_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        let project_root = PathBuf::from(
            std::env::var("REGISTRY_PROJECT_ROOT").unwrap_or_else(|_| ".".to_string()),
        );

        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            registry: RegistryConfig {
                project_root,
                manifest_file: default_manifest_file(),
                base_url: default_base_url(),
            },
            api: ApiConfig {
                allowed_origin: default_allowed_origin(),
                request_timeout: default_request_timeout(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
            build: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);

        assert_eq!(config.registry.manifest_file, "registry.json");
        assert!(!config.registry.base_url.is_empty());

        assert_eq!(config.api.allowed_origin, "https://v0.dev");
        assert_eq!(config.api.request_timeout, 30);

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");

        assert!(config.build.is_none());
    }

    #[test]
    fn test_manifest_path_joins_project_root() {
        let mut config = Config::default();
        config.registry.project_root = PathBuf::from("/srv/registry");

        assert_eq!(
            config.manifest_path(),
            PathBuf::from("/srv/registry/registry.json")
        );
    }

    #[test]
    fn test_server_config() {
        let server_config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };

        assert_eq!(server_config.host, "127.0.0.1");
        assert_eq!(server_config.port, 3000);
    }

    #[test]
    fn test_build_config_default() {
        let build_config = BuildConfig::default();

        assert_eq!(build_config.out_dir, PathBuf::from("public"));
        assert!(!build_config.base_url.is_empty());
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).expect("serialize config");
        let parsed: Config = serde_json::from_str(&json).expect("deserialize config");

        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.registry.manifest_file, config.registry.manifest_file);
        assert_eq!(parsed.api.allowed_origin, config.api.allowed_origin);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let json = r#"{
            "server": {},
            "registry": {},
            "api": {},
            "logging": {}
        }"#;

        let config: Config = serde_json::from_str(json).expect("deserialize sparse config");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.api.allowed_origin, "https://v0.dev");
    }
}
