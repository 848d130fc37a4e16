//! Error types and utilities for ograph

use thiserror::Error;

/// Result type alias for ograph operations
pub type Result<T> = std::result::Result<T, OGraphError>;

/// Main error type for ograph operations
///
/// Input errors (an unrecognized complexity string, an invalid request
/// parameter) are separate variants from internal failures so callers can
/// map them to the right HTTP status without inspecting message strings.
#[derive(Error, Debug)]
pub enum OGraphError {
    /// The requested complexity string does not match any known growth class
    #[error("Unsupported complexity: {input}")]
    UnsupportedComplexity {
        /// The normalized (lowercased, whitespace-stripped) input
        input: String,
    },

    /// Validation errors for user input or request parameters
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Graph generation and plotting errors
    #[error("Graph error: {message}")]
    Graph {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl OGraphError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new unsupported-complexity error for a normalized input
    pub fn unsupported_complexity(input: impl Into<String>) -> Self {
        Self::UnsupportedComplexity {
            input: input.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error was caused by bad caller input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedComplexity { .. } | Self::Validation { .. }
        )
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to OGraphError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for OGraphError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let error = OGraphError::new("test message");
        assert!(error.to_string().contains("test message"));

        let config_error = OGraphError::config("config issue");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.to_string().contains("config issue"));

        let graph_error = OGraphError::graph("backend gone");
        assert!(graph_error.to_string().contains("Graph error"));

        let validation_error = OGraphError::validation_field("Invalid input", "n_max");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(validation_error.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_unsupported_complexity_message() {
        let error = OGraphError::unsupported_complexity("bogus");
        assert_eq!(error.to_string(), "Unsupported complexity: bogus");
        assert!(error.is_client_error());
    }

    #[test]
    fn test_client_error_classification() {
        assert!(OGraphError::validation("bad n_max").is_client_error());
        assert!(!OGraphError::graph("backend failure").is_client_error());
        assert!(!OGraphError::new("anything else").is_client_error());
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped_error = OGraphError::with_source("Failed to read file", io_error);

        assert!(wrapped_error.to_string().contains("Failed to read file"));
        assert!(wrapped_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let ograph_error: OGraphError = io_error.into();

        assert!(ograph_error.to_string().contains("I/O error"));
        assert!(ograph_error.source().is_some());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_error() -> Result<String> {
            Err(OGraphError::new("failure"))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }
}
