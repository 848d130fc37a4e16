//! Application configuration structures

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Graph rendering settings
    pub graph: GraphSettings,

    /// On-disk artifact archive settings
    pub artifact: ArtifactConfig,

    /// Logging configuration
    pub logging: LoggingSettings,
}

impl Config {
    /// Validate every configuration section
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        self.server.validate()?;
        self.graph.validate()?;
        self.artifact.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the server to
    #[validate(length(min = 1, message = "Host cannot be empty"))]
    pub host: String,

    /// Port to listen on
    #[validate(range(min = 1, message = "Port must be at least 1"))]
    pub port: u16,

    /// Default maximum input size when a request omits `n_max`
    #[validate(range(
        min = 1,
        max = 1_000_000,
        message = "Default n_max must be between 1 and 1000000"
    ))]
    pub default_n_max: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            default_n_max: 100,
        }
    }
}

/// Graph rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GraphSettings {
    /// Graph width in pixels
    #[validate(range(min = 100, max = 4000, message = "Width must be between 100 and 4000 pixels"))]
    pub width: u32,

    /// Graph height in pixels
    #[validate(range(
        min = 100,
        max = 4000,
        message = "Height must be between 100 and 4000 pixels"
    ))]
    pub height: u32,

    /// Background color (hex format)
    #[validate(regex(
        path = "crate::validation::HEX_COLOR_REGEX",
        message = "Background color must be a valid hex color"
    ))]
    pub background_color: String,

    /// Curve color (hex format)
    #[validate(regex(
        path = "crate::validation::HEX_COLOR_REGEX",
        message = "Primary color must be a valid hex color"
    ))]
    pub primary_color: String,

    /// Font family for chart text
    pub font_family: String,

    /// Font size for axis labels
    #[validate(range(min = 8, max = 72, message = "Font size must be between 8 and 72"))]
    pub font_size: u32,

    /// Whether to show grid lines
    pub show_grid: bool,

    /// Whether to show the series legend
    pub show_legend: bool,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            background_color: "#FFFFFF".to_string(),
            primary_color: "#1F77B4".to_string(),
            font_family: "sans-serif".to_string(),
            font_size: 14,
            show_grid: true,
            show_legend: true,
        }
    }
}

/// Opt-in on-disk archive of rendered graphs
///
/// When enabled, each successful render is also written under `dir` with a
/// unique per-request file name, so concurrent requests never collide.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Whether to persist rendered graphs to disk
    pub enabled: bool,

    /// Directory for archived graphs, created if absent
    #[validate(length(min = 1, message = "Artifact directory cannot be empty"))]
    pub dir: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: "output".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[validate(custom(
        function = "crate::validation::validate_log_level",
        message = "Log level must be one of: trace, debug, info, warn, error"
    ))]
    pub level: String,

    /// Optional log file path
    pub file: Option<String>,

    /// Whether to use colored console output
    pub colored: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            colored: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate_all().is_ok());
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.default_n_max, 100);
        assert_eq!(config.graph.width, 1000);
        assert!(!config.artifact.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_invalid_color_rejected() {
        let mut config = Config::default();
        config.graph.primary_color = "blue".to_string();
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        let mut config = Config::default();
        config.graph.width = 10;
        assert!(config.validate_all().is_err());
    }
}
