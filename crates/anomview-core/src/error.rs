//! Error types for anomview-core.
//!
//! `Display` of every user-facing variant is exactly the text shown on
//! screen, so views render errors with `to_string()`.

use thiserror::Error;

/// Rejections produced by the upload gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("Please select a file.")]
    NoFileSelected,

    #[error("The selected file is empty. Please choose a valid file.")]
    EmptyFile,

    #[error("Invalid file type. Only CSV and Excel files are allowed.")]
    InvalidType,

    #[error("File size exceeds the 5MB limit.")]
    TooLarge,

    #[error("Please select a file to upload.")]
    NothingToSubmit,
}

#[derive(Error, Debug)]
pub enum AnomviewError {
    #[error(transparent)]
    Gate(#[from] GateError),

    /// Upload failed; `message` is the server's text or a fallback.
    #[error("{message}")]
    Upload { message: String },

    /// Fetching or reading results failed; domain and transport failures
    /// share this variant on purpose.
    #[error("{message}")]
    Results { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid route: {0}")]
    InvalidRoute(String),
}

impl AnomviewError {
    pub fn upload(message: impl Into<String>) -> Self {
        AnomviewError::Upload {
            message: message.into(),
        }
    }

    pub fn results(message: impl Into<String>) -> Self {
        AnomviewError::Results {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnomviewError>;
