use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::session::UploadingGuard;
use crate::{
    EndpointConfig, EndpointTransport, FileInput, Page, PresetBackend, PresetConfig,
    PresetRegistry, UploadError, UploadEvent, UploadFn, UploadMetadata, UploadResult,
    UploadSession, UploadStrategy,
};

/// Orchestrates one upload attempt end to end: validation, state
/// transitions, pacing delay, metadata synthesis, strategy dispatch, and
/// settlement. Exactly one backend call is made per invocation; there is
/// no retry and no fallback across strategies.
pub struct Uploader {
    presets: PresetRegistry,
    transport: EndpointTransport,
}

impl Uploader {
    pub fn new() -> Self {
        Self {
            presets: PresetRegistry::new(),
            transport: EndpointTransport::new(),
        }
    }

    /// Create an uploader with a prepared preset registry.
    pub fn with_presets(presets: PresetRegistry) -> Self {
        Self {
            presets,
            transport: EndpointTransport::new(),
        }
    }

    pub fn with_transport(mut self, transport: EndpointTransport) -> Self {
        self.transport = transport;
        self
    }

    /// Register a preset backend under a given name.
    pub fn register_preset<S>(&mut self, name: S, backend: Arc<dyn PresetBackend>)
    where
        S: Into<String>,
    {
        self.presets.register(name, backend);
    }

    /// Run one upload attempt. `file` falls back to the session's
    /// `meta.file` when absent. The returned value is the backend's URL
    /// (preset and function strategies) or the endpoint's JSON-decoded
    /// response body.
    #[instrument(skip_all)]
    pub async fn upload(
        &self,
        file: Option<FileInput>,
        session: &UploadSession,
    ) -> UploadResult<serde_json::Value> {
        let file = match file.or_else(|| session.meta().file) {
            Some(file) => file,
            None => {
                session.show_error(&session.i18n().no_file_selected);
                return Err(UploadError::NoFileSelected);
            }
        };

        if !session.is_file_type_allowed(&file) {
            session.show_error(&session.i18n().file_type_not_allowed);
            return Err(UploadError::FileTypeNotAllowed);
        }

        if !session.is_file_size_allowed(&file) {
            let max_bytes = session.settings().max_file_size;
            session.show_error(&session.i18n().file_too_large_message(max_bytes));
            return Err(UploadError::FileTooLarge { max_bytes });
        }

        let guard = UploadingGuard::acquire(session);
        session.change_page(Page::Uploading);
        session.emit(UploadEvent::started(file.clone()));
        info!(size = file.len(), mime = ?file.mime, "upload started");

        let delay = session.settings().minimum_delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let metadata =
            UploadMetadata::synthesize(&file, session.meta().original_file_name.as_deref());
        debug!(name = %metadata.name, "synthesized upload metadata");

        let strategy = UploadStrategy::select(session.settings());
        debug!(strategy = strategy.name(), "dispatching");

        let outcome = match strategy {
            UploadStrategy::Preset(config) => {
                self.dispatch_preset(&config, &file, &metadata, session).await
            }
            UploadStrategy::Function(upload_fn) => {
                self.dispatch_function(&upload_fn, &file, &metadata, session)
                    .await
            }
            UploadStrategy::Endpoint(endpoint) => {
                self.dispatch_endpoint(&endpoint, &file, session).await
            }
            UploadStrategy::Unconfigured => {
                session.show_error(&session.i18n().no_endpoint);
                Err(UploadError::NoEndpoint)
            }
        };

        drop(guard);
        outcome
    }

    /// Preset dispatch lands on the terminal page regardless of outcome
    /// and never calls the error display.
    async fn dispatch_preset(
        &self,
        config: &PresetConfig,
        file: &FileInput,
        metadata: &UploadMetadata,
        session: &UploadSession,
    ) -> UploadResult<serde_json::Value> {
        let result = match self.presets.get(&config.preset) {
            Some(backend) => backend.upload(&config.options, file, metadata).await,
            None => Err(UploadError::unknown_preset(&config.preset)),
        };

        let outcome = match result {
            Ok(url) => {
                let value = serde_json::Value::String(url);
                session.update_value(&value);
                session.emit(UploadEvent::uploaded(value.clone()));
                Ok(value)
            }
            Err(error) => {
                warn!(preset = %config.preset, %error, "preset upload failed");
                session.emit(UploadEvent::errored(error.to_string()));
                Err(error)
            }
        };

        session.change_page(Page::Uploaded);
        outcome
    }

    /// Function dispatch sets the terminal page inline with resolution;
    /// a rejection surfaces through the error display and resets the page
    /// to the upload-entry view.
    async fn dispatch_function(
        &self,
        upload_fn: &UploadFn,
        file: &FileInput,
        metadata: &UploadMetadata,
        session: &UploadSession,
    ) -> UploadResult<serde_json::Value> {
        match upload_fn(file.clone(), metadata.clone()).await {
            Ok(url) => {
                let value = serde_json::Value::String(url);
                session.update_value(&value);
                session.emit(UploadEvent::uploaded(value.clone()));
                session.change_page(Page::Uploaded);
                Ok(value)
            }
            Err(error) => {
                warn!(%error, "upload function rejected");
                session.emit(UploadEvent::errored(error.to_string()));
                session.show_error(&error.to_string());
                session.change_page(Page::Upload);
                Err(error)
            }
        }
    }

    /// Endpoint dispatch lands on the terminal page regardless of outcome.
    /// Its failure path emits `fileUploaded` with the error text as the
    /// payload; the returned error carries the real signal.
    async fn dispatch_endpoint(
        &self,
        endpoint: &EndpointConfig,
        file: &FileInput,
        session: &UploadSession,
    ) -> UploadResult<serde_json::Value> {
        let result = self
            .transport
            .send(endpoint, &session.settings().headers, file)
            .await;

        let outcome = match result {
            Ok(value) => {
                session.emit(UploadEvent::uploaded(value.clone()));
                Ok(value)
            }
            Err(error) => {
                warn!(url = %endpoint.url, %error, "endpoint upload failed");
                session.emit(UploadEvent::uploaded(serde_json::Value::String(
                    error.to_string(),
                )));
                Err(error)
            }
        };

        session.change_page(Page::Uploaded);
        outcome
    }
}

impl Default for Uploader {
    fn default() -> Self {
        Self::new()
    }
}
