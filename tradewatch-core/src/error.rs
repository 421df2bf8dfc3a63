//! Error types for the fallible edges: config files, step names, table export.

use std::path::PathBuf;

use thiserror::Error;

/// Unknown investigation step name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown investigation step '{0}' (expected one of: data_gathering, pattern_analysis, risk_assessment, recommendation)")]
pub struct ParseStepError(pub String);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),
}
