//! Error types for post-dr-comment

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for post-dr-comment
#[derive(Debug, Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Attachment file not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Repository argument is not of the form owner/repo
    #[error("Invalid repository '{0}': expected owner/repo")]
    InvalidRepository(String),

    /// Transport-level failure (connection, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The Hub responded with a non-success status
    #[error("Hub API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The Hub rejected an attachment upload server-side. This usually means
    /// the file is too large or of an unsupported type.
    #[error("Attachment '{name}' rejected by the Hub (HTTP {status})")]
    AttachmentRejected { name: String, status: u16 },
}

impl Error {
    /// Whether this error is an attachment size/type rejection.
    pub fn is_attachment_rejected(&self) -> bool {
        matches!(self, Error::AttachmentRejected { .. })
    }
}

/// Result type alias for post-dr-comment
pub type Result<T> = std::result::Result<T, Error>;
