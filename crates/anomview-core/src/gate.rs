//! Upload gate: validates a picked file and holds it until submission.

use crate::error::GateError;
use crate::models::{FileCandidate, FileExtension, UploadedFile};

/// Largest accepted upload, inclusive.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Shown between a successful upload and the redirect.
pub const UPLOAD_ACCEPTED_MESSAGE: &str = "File uploaded successfully. Redirecting...";

/// Check a candidate in order: presence, emptiness, type, size.
pub fn validate(candidate: Option<&FileCandidate>) -> Result<UploadedFile, GateError> {
    let candidate = candidate.ok_or(GateError::NoFileSelected)?;
    if candidate.size == 0 {
        return Err(GateError::EmptyFile);
    }
    let extension = FileExtension::from_filename(&candidate.name).ok_or(GateError::InvalidType)?;
    if candidate.size > MAX_UPLOAD_BYTES {
        return Err(GateError::TooLarge);
    }
    Ok(UploadedFile {
        name: candidate.name.clone(),
        size: candidate.size,
        extension,
    })
}

/// Form state of the upload screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadGate {
    held: Option<UploadedFile>,
    message: Option<String>,
}

impl UploadGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a selection event. Returns true when the file is now held.
    pub fn select(&mut self, candidate: Option<FileCandidate>) -> bool {
        match validate(candidate.as_ref()) {
            Ok(file) => {
                tracing::debug!(name = %file.name, size = file.size, "file accepted");
                self.held = Some(file);
                self.message = None;
                true
            }
            // An empty selection keeps whatever was held before.
            Err(GateError::NoFileSelected) => {
                self.message = Some(GateError::NoFileSelected.to_string());
                false
            }
            Err(e) => {
                self.held = None;
                self.message = Some(e.to_string());
                false
            }
        }
    }

    /// The file to send, or the message explaining why there is none.
    pub fn submission(&mut self) -> Result<&UploadedFile, GateError> {
        match self.held {
            Some(ref file) => Ok(file),
            None => {
                self.message = Some(GateError::NothingToSubmit.to_string());
                Err(GateError::NothingToSubmit)
            }
        }
    }

    /// Record the outcome of an upload. The held file is released on success.
    pub fn finish_upload<T, E: std::fmt::Display>(&mut self, outcome: &Result<T, E>) {
        match outcome {
            Ok(_) => {
                self.held = None;
                self.message = Some(UPLOAD_ACCEPTED_MESSAGE.to_string());
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    pub fn held(&self) -> Option<&UploadedFile> {
        self.held.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
