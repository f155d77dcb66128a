//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to the supplied writer and log progress through `tracing`.

pub mod check;
pub mod query;
pub mod sample;
pub mod show;

use crate::CliError;

/// Output formats for tabular command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Table,
    /// One CSV record per sample
    Csv,
    /// JSON array of samples
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}
