use thiserror::Error;

use crate::i18n::bytes_to_size;

/// Result type for upload operations
pub type UploadResult<T> = Result<T, UploadError>;

/// Errors that can occur while orchestrating an upload
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("File type not allowed")]
    FileTypeNotAllowed,

    #[error("File too large (maximum size {})", bytes_to_size(*.max_bytes))]
    FileTooLarge { max_bytes: u64 },

    #[error("No upload backend configured")]
    NoEndpoint,

    #[error("No preset backend registered under '{name}'")]
    UnknownPreset { name: String },

    #[error("Upload failed: {reason}")]
    Failed { reason: String },

    #[error("Upload backend error: {source}")]
    Backend {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("HTTP transport error: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("Response decode error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl UploadError {
    /// Create a backend error from any error type
    pub fn backend<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend {
            source: Box::new(error),
        }
    }

    /// Create an upload failed error from a plain reason
    pub fn failed<S: Into<String>>(reason: S) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    /// Create an unknown preset error
    pub fn unknown_preset<S: Into<String>>(name: S) -> Self {
        Self::UnknownPreset { name: name.into() }
    }

    /// Whether this error was produced by the validation pipeline,
    /// before any backend was consulted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            UploadError::NoFileSelected
                | UploadError::FileTypeNotAllowed
                | UploadError::FileTooLarge { .. }
        )
    }
}
