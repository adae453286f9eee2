// crates/engine/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StampError {
    #[error("{} not found!", path.display())]
    FileNotFound { path: PathBuf },

    #[error("{marker} comment not found in {}", path.display())]
    MarkerNotFound { path: PathBuf, marker: String },

    #[error("{declaration} line not found after marker in {}", path.display())]
    DeclarationNotFound { path: PathBuf, declaration: String },

    #[error("Failed to {operation} '{}': {source}", path.display())]
    Io {
        operation: IoOperation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid timestamp '{value}': expected 14 ASCII digits")]
    InvalidTimestamp { value: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// The filesystem step an [`StampError::Io`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    Inspect,
    Read,
    Write,
}

impl std::fmt::Display for IoOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Inspect => "inspect",
            Self::Read => "read",
            Self::Write => "write",
        })
    }
}

/// Flat classification of [`StampError`], handy for callers and tests that
/// only care about which way stamping failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampErrorKind {
    FileNotFound,
    MarkerNotFound,
    DeclarationNotFound,
    IoFailure,
    InvalidTimestamp,
    Config,
}

impl StampError {
    pub(crate) fn io(operation: IoOperation, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> StampErrorKind {
        match self {
            Self::FileNotFound { .. } => StampErrorKind::FileNotFound,
            Self::MarkerNotFound { .. } => StampErrorKind::MarkerNotFound,
            Self::DeclarationNotFound { .. } => StampErrorKind::DeclarationNotFound,
            Self::Io { .. } => StampErrorKind::IoFailure,
            Self::InvalidTimestamp { .. } => StampErrorKind::InvalidTimestamp,
            Self::Config(_) => StampErrorKind::Config,
        }
    }
}

impl From<crate::config::StampConfigBuilderError> for StampError {
    fn from(err: crate::config::StampConfigBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StampError>;
