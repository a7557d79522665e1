//! Centralised error types used across the crate.

use thiserror::Error;

/// Precise configuration faults.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be at least 1")]
    ZeroDimension(&'static str),
    #[error("got {labels} labels for {values} values")]
    LabelCountMismatch { labels: usize, values: usize },
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("value for `{label}` is not a finite number ({value})")]
    NonFinite { label: String, value: f64 },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
