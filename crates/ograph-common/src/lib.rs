//! Common error types and logging utilities for the ograph service

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{OGraphError, Result};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
