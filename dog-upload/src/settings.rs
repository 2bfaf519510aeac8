use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;

use crate::{FileInput, UploadMetadata, UploadResult};

/// Host-supplied upload callable: receives the file and its synthesized
/// metadata and resolves with the uploaded URL.
pub type UploadFn = Arc<
    dyn Fn(FileInput, UploadMetadata) -> BoxFuture<'static, UploadResult<String>> + Send + Sync,
>;

/// Preset strategy configuration: a registered backend name plus the
/// options payload forwarded to it untouched.
#[derive(Debug, Clone)]
pub struct PresetConfig {
    pub preset: String,
    pub options: serde_json::Value,
}

impl PresetConfig {
    pub fn new<S: Into<String>>(preset: S) -> Self {
        Self {
            preset: preset.into(),
            options: serde_json::Value::Null,
        }
    }

    pub fn with_options(mut self, options: serde_json::Value) -> Self {
        self.options = options;
        self
    }
}

/// Generic HTTP endpoint descriptor. A bare URL string normalizes into a
/// descriptor with the default method and no extra headers.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub url: String,
    /// HTTP method; POST when absent
    pub method: Option<String>,
    /// Endpoint-specific headers, overlaid on the session-level defaults
    pub headers: HashMap<String, String>,
}

impl EndpointConfig {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            method: None,
            headers: HashMap::new(),
        }
    }

    pub fn with_method<S: Into<String>>(mut self, method: S) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl From<&str> for EndpointConfig {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for EndpointConfig {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}

/// Session configuration consumed by the orchestrator. At most one of
/// `upload_preset`, `upload_function`, and `endpoint` is consulted per
/// call, in that order.
#[derive(Clone)]
pub struct UploadSettings {
    pub upload_preset: Option<PresetConfig>,
    pub upload_function: Option<UploadFn>,
    pub endpoint: Option<EndpointConfig>,
    /// Deliberate pacing pause before dispatch; not a timeout or backoff
    pub minimum_delay: Duration,
    /// Used when formatting the file-too-large message; the size policy
    /// itself is the host's predicate
    pub max_file_size: u64,
    /// Default request headers for the endpoint strategy
    pub headers: HashMap<String, String>,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            upload_preset: None,
            upload_function: None,
            endpoint: None,
            minimum_delay: Duration::ZERO,
            max_file_size: 5 * 1024 * 1024 * 1024,
            headers: HashMap::new(),
        }
    }
}

impl UploadSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preset(mut self, preset: PresetConfig) -> Self {
        self.upload_preset = Some(preset);
        self
    }

    /// Configure the function strategy from a plain async closure.
    pub fn with_upload_function<F, Fut>(mut self, upload_fn: F) -> Self
    where
        F: Fn(FileInput, UploadMetadata) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = UploadResult<String>> + Send + 'static,
    {
        let wrapped: UploadFn =
            Arc::new(move |file, metadata| Box::pin(upload_fn(file, metadata)));
        self.upload_function = Some(wrapped);
        self
    }

    pub fn with_endpoint<E: Into<EndpointConfig>>(mut self, endpoint: E) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_minimum_delay(mut self, delay: Duration) -> Self {
        self.minimum_delay = delay;
        self
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl fmt::Debug for UploadSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadSettings")
            .field("upload_preset", &self.upload_preset)
            .field(
                "upload_function",
                &self.upload_function.as_ref().map(|_| "<callable>"),
            )
            .field("endpoint", &self.endpoint)
            .field("minimum_delay", &self.minimum_delay)
            .field("max_file_size", &self.max_file_size)
            .field("headers", &self.headers)
            .finish()
    }
}
