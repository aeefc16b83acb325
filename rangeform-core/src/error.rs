//! Structured error types for parameter construction and document I/O.
//!
//! These are displayable in both CLI and TUI contexts.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by strict parameter construction.
///
/// The lenient path never produces these: malformed numbers become `0.0`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("missing attribute '{attribute}'")]
    MissingAttribute { attribute: String },

    #[error("attribute '{attribute}' is not a decimal number: {value:?}")]
    MalformedAttribute { attribute: String, value: String },

    #[error("degenerate range: max ({max}) must be greater than min ({min})")]
    DegenerateRange { min: f64, max: f64 },

    #[error("unknown parameter kind '{kind}'")]
    UnknownKind { kind: String },
}

/// Errors raised while reading or writing a parameter document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse parameter document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize parameter document: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("no parameter named '{name}'")]
    NoSuchParameter { name: String },
}
