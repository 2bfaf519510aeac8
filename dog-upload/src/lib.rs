//! # dog-upload: Upload orchestration for DogRS widgets
//!
//! `dog-upload` takes a host-selected file, validates it against the host's
//! policy, synthesizes naming metadata, hands it to exactly one of several
//! interchangeable upload backends, and reports lifecycle events back to the
//! embedding UI. It owns the control flow of a single-file upload; rendering,
//! string tables, file pickers, and concrete backend SDKs stay on the host's
//! side of the trait seams.
//!
//! ## Key Features
//!
//! - **Three interchangeable strategies**: a named preset backend, a
//!   host-supplied async callable, or a generic HTTP endpoint - selected with
//!   fixed precedence, one consulted per attempt
//! - **Host-owned policy**: file-type and file-size checks are predicates the
//!   host wires in; the orchestrator only sequences them
//! - **Lifecycle events**: `uploadStarted` / `fileUploaded` / `uploadError`
//!   over a fire-and-forget broadcast hub
//! - **Single settlement**: every attempt resolves or rejects exactly once,
//!   and the session's uploading flag is released on every terminal path
//!
//! ## Quick Start
//!
//! ```rust
//! use dog_upload::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> UploadResult<()> {
//! // 1. Configure a session with a host-supplied upload function
//! let settings = UploadSettings::new().with_upload_function(|_file, metadata| async move {
//!     Ok(format!("https://cdn.example.com/{}", metadata.name))
//! });
//! let session = UploadSession::new(settings);
//!
//! // 2. Watch lifecycle events (optional)
//! let mut events = session.subscribe();
//!
//! // 3. Upload a file
//! let file = FileInput::new(&b"hello"[..]).with_mime("text/plain");
//! let url = Uploader::new().upload(Some(file), &session).await?;
//! assert!(url.as_str().unwrap().starts_with("https://cdn.example.com/"));
//! assert_eq!(events.recv().await.unwrap().name(), "uploadStarted");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │     Host widget      │  ← pages, picker, policy, i18n
//! ├──────────────────────┤
//! │       Uploader       │  ← validate → metadata → dispatch → settle
//! ├──────────────────────┤
//! │ Preset │ Fn │ HTTP   │  ← interchangeable backends
//! └──────────────────────┘
//! ```
//!
//! The `UploadSession` is the long-lived piece: it carries settings, the
//! fallback file, i18n templates, the event hub, and the `is_uploading` /
//! `page` state the orchestrator mutates during a call. One session serves
//! many attempts, one at a time.

pub mod endpoint;
mod error;
mod events;
mod i18n;
mod metadata;
pub mod preset;
mod session;
mod settings;
mod strategy;
mod types;
mod uploader;

pub use endpoint::EndpointTransport;
pub use error::{UploadError, UploadResult};
pub use events::{UploadEvent, UploadEventHub};
pub use i18n::{bytes_to_size, ErrorMessages, FILESIZE_TOKEN};
pub use metadata::UploadMetadata;
pub use preset::{PresetBackend, PresetRegistry};
pub use session::{DefaultSessionHost, SessionHost, UploadSession};
pub use settings::{EndpointConfig, PresetConfig, UploadFn, UploadSettings};
pub use strategy::UploadStrategy;
pub use types::{FileInput, Page, SessionMeta};
pub use uploader::Uploader;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        FileInput, Page, SessionHost, UploadError, UploadEvent, UploadResult, UploadSession,
        UploadSettings, Uploader,
    };
}
