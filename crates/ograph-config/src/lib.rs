//! Configuration management for the ograph service

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{ArtifactConfig, Config, GraphSettings, LoggingSettings, ServerConfig};
