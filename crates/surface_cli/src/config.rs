//! CLI configuration management.
//!
//! Loads settings from a TOML file, applies `SURFACE_*` environment
//! overrides and validates the result.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use surface_core::math::interpolators::{ConstraintForm, SegmentOffset};
use surface_core::math::solvers::SolverConfig;
use surface_core::surface::SurfaceConfig;
use thiserror::Error;
use tracing::debug;

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Environment variable holds an unusable value
    #[error("Environment variable error: {0}")]
    Env(String),

    /// Invalid log level string
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Every query path
    Trace,
    /// Solver convergence and model construction
    Debug,
    /// Progress and summaries
    #[default]
    Info,
    /// Check failures only
    Warn,
    /// Errors only
    Error,
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level
    pub log_level: LogLevel,

    /// Gauss-Seidel precision for row splines
    pub spline_precision: f64,

    /// Sweep ceiling for row splines; unbounded when absent
    pub spline_max_iterations: Option<usize>,

    /// Row-spline evaluation convention
    pub spline_offset: SegmentOffset,

    /// Row-spline smoothness rows
    pub spline_form: ConstraintForm,

    /// Table file; the built-in table is used when absent
    pub table: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        let solver: SolverConfig<f64> = SolverConfig::spline();
        Self {
            log_level: LogLevel::default(),
            spline_precision: solver.precision,
            spline_max_iterations: solver.max_iterations,
            spline_offset: SegmentOffset::default(),
            spline_form: ConstraintForm::default(),
            table: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `path` if it exists, otherwise return the default configuration.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Result<Self, ConfigError> {
        if let Ok(level) = std::env::var("SURFACE_LOG_LEVEL") {
            self.log_level = level.parse()?;
        }

        if let Ok(precision) = std::env::var("SURFACE_SPLINE_PRECISION") {
            self.spline_precision = precision.parse().map_err(|_| {
                ConfigError::Env(format!("SURFACE_SPLINE_PRECISION='{}' is not a number", precision))
            })?;
        }

        if let Ok(max_iterations) = std::env::var("SURFACE_SPLINE_MAX_ITERATIONS") {
            self.spline_max_iterations = match max_iterations.trim() {
                "" | "none" => None,
                value => Some(value.parse().map_err(|_| {
                    ConfigError::Env(format!(
                        "SURFACE_SPLINE_MAX_ITERATIONS='{}' is not a count",
                        value
                    ))
                })?),
            };
        }

        if let Ok(table) = std::env::var("SURFACE_TABLE") {
            self.table = Some(PathBuf::from(table));
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !(self.spline_precision.is_finite() && self.spline_precision > 0.0) {
            errors.push(format!(
                "spline_precision must be a positive number, got {}",
                self.spline_precision
            ));
        }

        if self.spline_max_iterations == Some(0) {
            errors.push("spline_max_iterations must be greater than 0".to_string());
        }

        if let Some(table) = &self.table {
            if table.as_os_str().is_empty() {
                errors.push("table path cannot be empty".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }

    /// Surface settings described by this configuration.
    pub fn surface_config(&self) -> SurfaceConfig<f64> {
        SurfaceConfig::default()
            .with_spline_solver(SolverConfig {
                precision: self.spline_precision,
                max_iterations: self.spline_max_iterations,
            })
            .with_spline_offset(self.spline_offset)
            .with_spline_form(self.spline_form)
    }
}
