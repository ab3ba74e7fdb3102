// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for vsh

use thiserror::Error;

/// Result type alias
pub type VshResult<T> = Result<T, VshError>;

/// Main error type
#[derive(Error, Debug)]
pub enum VshError {
    #[error("Cannot load archive: {0}")]
    Load(String),

    #[error("No such file or directory: {0}")]
    NotFound(String),

    #[error("{0}")]
    Usage(String),

    #[error("Not valid UTF-8 text: {0}")]
    Decode(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VshError {
    /// Errors the dispatcher reports and then carries on from.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            VshError::NotFound(_) | VshError::Usage(_) | VshError::Decode(_)
        )
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, VshError::Usage(_))
    }
}

impl From<zip::result::ZipError> for VshError {
    fn from(err: zip::result::ZipError) -> Self {
        VshError::Load(err.to_string())
    }
}

impl From<toml::de::Error> for VshError {
    fn from(err: toml::de::Error) -> Self {
        VshError::Config(err.message().to_string())
    }
}

impl From<serde_json::Error> for VshError {
    fn from(err: serde_json::Error) -> Self {
        VshError::Serialization(err.to_string())
    }
}
