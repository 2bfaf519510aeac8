use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A file handed to the orchestrator: an opaque byte payload plus an
/// optional MIME type. Cloning is cheap (the payload is reference-counted),
/// so lifecycle events can carry the file without copying it.
#[derive(Debug, Clone)]
pub struct FileInput {
    pub data: Bytes,
    pub mime: Option<String>,
}

impl FileInput {
    pub fn new<B: Into<Bytes>>(data: B) -> Self {
        Self {
            data: data.into(),
            mime: None,
        }
    }

    pub fn with_mime<S: Into<String>>(mut self, mime: S) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Payload size in bytes
    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// UI states a session moves through across an upload attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Upload-entry view (file picker)
    Upload,
    /// An upload is in flight
    Uploading,
    /// Terminal view after an attempt concluded
    Uploaded,
}

/// Fallback file and original filename carried by a session between
/// attempts. The file picker writes this; the orchestrator only reads it.
#[derive(Debug, Clone, Default)]
pub struct SessionMeta {
    pub file: Option<FileInput>,
    pub original_file_name: Option<String>,
}

impl SessionMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: FileInput) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_original_file_name<S: Into<String>>(mut self, name: S) -> Self {
        self.original_file_name = Some(name.into());
        self
    }
}
