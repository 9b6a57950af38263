// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a file from being processed at all.
///
/// The `Display` text of each variant is what gets logged, so the leading
/// phrases are part of the log contract.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read CSV file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parsing error in {}: {source}", .path.display())]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Missing required headers in CSV: {}", .missing.join(", "))]
    MissingHeaders { missing: Vec<String> },
}

/// A POST that never produced an HTTP response.
#[derive(Debug, Error)]
#[error("request to {url} failed: {message}")]
pub struct TransportError {
    pub url: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid endpoint URL {value:?}: {source}")]
    InvalidEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },
}
