//! Error types for the aggregator and its data loaders.
//!
//! The aggregator itself only ever fails with [`AggregatorError`]; unknown
//! skills and empty inputs are valid and produce empty results instead.

use thiserror::Error;

/// Errors returned by the pure recommendation and metrics operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregatorError {
    /// A caller-supplied argument violates a precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised while loading catalogs and rosters from TOML.
#[derive(Debug, Error)]
pub enum DataError {
    /// The source file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed to load
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not valid TOML for the expected schema.
    #[error("failed to parse: {0}")]
    Parse(#[from] toml::de::Error),

    /// The file parsed but its content breaks a data rule.
    #[error("invalid data: {0}")]
    Invalid(String),
}

impl DataError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
