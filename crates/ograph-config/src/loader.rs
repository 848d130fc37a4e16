//! Configuration loading utilities

use crate::Config;
use ograph_common::Result as OGraphResult;
use std::env;
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for ograph_common::OGraphError {
    fn from(err: ConfigError) -> Self {
        ograph_common::OGraphError::config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from the default locations
    ///
    /// Tries `OGRAPH_CONFIG_PATH`, then `ograph.yaml` / `ograph.yml` in the
    /// working directory, and falls back to defaults with environment
    /// overrides applied.
    pub fn load() -> OGraphResult<Config> {
        let config = if let Ok(config_path) = env::var("OGRAPH_CONFIG_PATH") {
            Self::load_config(&config_path)?
        } else if Path::new("ograph.yaml").exists() {
            Self::load_config("ograph.yaml")?
        } else if Path::new("ograph.yml").exists() {
            Self::load_config("ograph.yml")?
        } else {
            let mut config = Config::default();
            Self::apply_env_overrides(&mut config)?;
            config
                .validate_all()
                .map_err(ConfigError::ValidationError)?;
            config
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> OGraphResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        // Server configuration overrides
        if let Ok(host) = env::var("SERVER_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = env::var("SERVER_PORT") {
            config.server.port = port.parse().map_err(|e| ConfigError::EnvParseError {
                var: "SERVER_PORT".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(n_max) = env::var("DEFAULT_N_MAX") {
            config.server.default_n_max =
                n_max.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "DEFAULT_N_MAX".to_string(),
                    source: Box::new(e),
                })?;
        }

        // Graph configuration overrides
        if let Ok(width) = env::var("GRAPH_WIDTH") {
            config.graph.width = width.parse().map_err(|e| ConfigError::EnvParseError {
                var: "GRAPH_WIDTH".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(height) = env::var("GRAPH_HEIGHT") {
            config.graph.height = height.parse().map_err(|e| ConfigError::EnvParseError {
                var: "GRAPH_HEIGHT".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(bg_color) = env::var("GRAPH_BACKGROUND_COLOR") {
            config.graph.background_color = bg_color;
        }

        if let Ok(primary_color) = env::var("GRAPH_PRIMARY_COLOR") {
            config.graph.primary_color = primary_color;
        }

        // Artifact archive overrides
        if let Ok(enabled) = env::var("ARTIFACT_ENABLED") {
            config.artifact.enabled = enabled.parse().map_err(|e| ConfigError::EnvParseError {
                var: "ARTIFACT_ENABLED".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(dir) = env::var("ARTIFACT_DIR") {
            config.artifact.dir = dir;
        }

        // Logging configuration overrides
        if let Ok(level) = env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(file) = env::var("LOG_FILE") {
            config.logging.file = Some(file);
        }

        Ok(())
    }
}
