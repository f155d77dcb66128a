//! Error types for the surface CLI.

use surface_core::types::SurfaceError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Referenced file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Table file could not be parsed
    #[error("Table parse error: {0}")]
    TableParse(String),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Surface construction or evaluation failed
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),

    /// Writing results failed
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use surface_core::types::InterpolationError;

    #[test]
    fn test_surface_error_display() {
        let err = CliError::from(SurfaceError::from(InterpolationError::OutOfBounds {
            x: 7.0,
            min: 0.7,
            max: 6.0,
        }));
        assert_eq!(
            err.to_string(),
            "Surface error: Query point 7 outside valid domain (0.7, 6)"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: CliError = ConfigError::Validation(vec!["bad".to_string()]).into();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("bad"));
    }
}
