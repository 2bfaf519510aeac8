use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::{FileInput, UploadMetadata, UploadResult};

/// Contract implemented by named preset backends (cloud storage SDKs and
/// the like). The orchestrator makes exactly one call per attempt and
/// never retries.
#[async_trait]
pub trait PresetBackend: Send + Sync {
    /// Upload the file and return its public URL. `options` is the
    /// configuration payload the host attached to the preset, untouched.
    async fn upload(
        &self,
        options: &serde_json::Value,
        file: &FileInput,
        metadata: &UploadMetadata,
    ) -> UploadResult<String>;
}

/// Maps preset names to backend implementations.
pub struct PresetRegistry {
    backends: HashMap<String, Arc<dyn PresetBackend>>,
}

impl PresetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            backends: HashMap::new(),
        }
    }

    /// Register a backend under a given preset name.
    pub fn register<S>(&mut self, name: S, backend: Arc<dyn PresetBackend>)
    where
        S: Into<String>,
    {
        self.backends.insert(name.into(), backend);
    }

    /// Look up a backend by preset name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn PresetBackend>> {
        self.backends.get(name)
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
