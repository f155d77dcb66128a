//! Table files.
//!
//! A table is a TOML document with `axis_a`, `axis_m` and a row-major
//! `values` matrix, plus an optional `name`.

use serde::Deserialize;
use std::path::Path;
use surface_core::surface::GridTable;
use tracing::info;

use crate::{CliError, Result};

/// Built-in lift-coefficient table used when no table file is given.
pub const BUILTIN_TABLE: &str = include_str!("../data/cya.toml");

/// Contents of a table file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableFile {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Row coordinates
    pub axis_a: Vec<f64>,
    /// Column coordinates
    pub axis_m: Vec<f64>,
    /// `values[i][j]` at `(axis_a[i], axis_m[j])`
    pub values: Vec<Vec<f64>>,
}

/// A validated table together with its display name
#[derive(Debug, Clone)]
pub struct NamedTable {
    /// Display name
    pub name: String,
    /// Validated grid
    pub grid: GridTable<f64>,
}

impl TableFile {
    /// Parse table TOML
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::TableParse(e.to_string()))
    }

    /// Validate into a grid, falling back to `default_name` when unnamed.
    pub fn into_named(self, default_name: &str) -> Result<NamedTable> {
        let name = self.name.unwrap_or_else(|| default_name.to_string());
        let grid = GridTable::from_rows(self.axis_a, self.axis_m, self.values)?;
        Ok(NamedTable { name, grid })
    }
}

/// Load the table at `path`, or the built-in table when `path` is `None`.
pub fn load_table(path: Option<&Path>) -> Result<NamedTable> {
    let table = match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.display().to_string()));
            }
            let content = std::fs::read_to_string(path)?;
            let default_name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "table".to_string());
            TableFile::parse(&content)?.into_named(&default_name)?
        }
        None => TableFile::parse(BUILTIN_TABLE)?.into_named("builtin")?,
    };

    let (rows, columns) = table.grid.shape();
    info!(name = %table.name, rows, columns, "table loaded");
    Ok(table)
}
