//! Error types for mb-core

use std::fmt;

use thiserror::Error;

use crate::config::ConfigError;

/// Broad category of a [`BenchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchErrorKind {
    /// Invalid benchmark configuration
    Config,
    /// A builder was finalized without a required field
    MissingConfig,
    /// Worker or aggregator task failure
    Orchestration,
    /// The async runtime could not be created
    Runtime,
}

impl fmt::Display for BenchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BenchErrorKind::Config => "configuration",
            BenchErrorKind::MissingConfig => "missing configuration",
            BenchErrorKind::Orchestration => "orchestration",
            BenchErrorKind::Runtime => "runtime",
        };
        f.write_str(name)
    }
}

/// Core error type
#[derive(Error, Debug)]
#[error("{kind} error: {message}")]
pub struct BenchError {
    /// Error category
    pub kind: BenchErrorKind,
    /// Human readable detail
    pub message: String,
}

impl BenchError {
    /// Create an error of the given kind
    pub fn new(kind: BenchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Invalid configuration
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(BenchErrorKind::Config, message)
    }

    /// Required builder field was never set
    pub fn missing_config(field: &str) -> Self {
        Self::new(
            BenchErrorKind::MissingConfig,
            format!("required field `{field}` was not set"),
        )
    }

    /// Engine task failure
    pub fn orchestration(message: impl Into<String>) -> Self {
        Self::new(BenchErrorKind::Orchestration, message)
    }

    /// Runtime construction failure
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(BenchErrorKind::Runtime, message)
    }
}

impl From<ConfigError> for BenchError {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

impl From<std::io::Error> for BenchError {
    fn from(err: std::io::Error) -> Self {
        Self::runtime(err.to_string())
    }
}

/// Result type alias
pub type BenchResult<T> = std::result::Result<T, BenchError>;
