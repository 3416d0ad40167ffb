//! Driver configuration.
//!
//! Controls where scanning starts, how faults are handled, and how records
//! are printed. Every field has a default, so a config file only needs the
//! keys it changes. Command-line flags override file values.
//!
//! # Example YAML
//!
//! ```yaml
//! start_index: 0
//! on_fault: skip
//! format: json
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or saving a [`DriverConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Reaction to a missing value or an unrecognized argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FaultPolicy {
    /// Report the offending argument and stop with a nonzero status.
    #[default]
    Abort,
    /// Report the offending argument and keep scanning.
    Skip,
}

/// How scanned records are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Index of the first argument to scan.
    pub start_index: usize,
    pub on_fault: FaultPolicy,
    pub format: OutputFormat,
}

impl DriverConfig {
    /// Loads configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        start_index: Option<usize>,
        on_fault: Option<FaultPolicy>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(start_index) = start_index {
            self.start_index = start_index;
        }
        if let Some(on_fault) = on_fault {
            self.on_fault = on_fault;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
