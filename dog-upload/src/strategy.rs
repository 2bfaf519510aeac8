use std::fmt;

use crate::settings::{EndpointConfig, PresetConfig, UploadFn, UploadSettings};

/// The backend strategy chosen for one dispatch. Exactly one variant is
/// consulted per call; selection is re-read from settings every time and
/// never cached on the session.
#[derive(Clone)]
pub enum UploadStrategy {
    /// Named, registered backend implementation with its options payload
    Preset(PresetConfig),
    /// Host-supplied upload callable
    Function(UploadFn),
    /// Generic HTTP endpoint transport
    Endpoint(EndpointConfig),
    /// Nothing configured; the call fails without contacting any backend
    Unconfigured,
}

impl UploadStrategy {
    /// Precedence: preset, then function, then endpoint; first match wins.
    pub fn select(settings: &UploadSettings) -> Self {
        if let Some(preset) = &settings.upload_preset {
            UploadStrategy::Preset(preset.clone())
        } else if let Some(upload_fn) = &settings.upload_function {
            UploadStrategy::Function(upload_fn.clone())
        } else if let Some(endpoint) = &settings.endpoint {
            UploadStrategy::Endpoint(endpoint.clone())
        } else {
            UploadStrategy::Unconfigured
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UploadStrategy::Preset(_) => "preset",
            UploadStrategy::Function(_) => "function",
            UploadStrategy::Endpoint(_) => "endpoint",
            UploadStrategy::Unconfigured => "unconfigured",
        }
    }
}

impl fmt::Debug for UploadStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadStrategy::Preset(config) => f.debug_tuple("Preset").field(config).finish(),
            UploadStrategy::Function(_) => f.debug_tuple("Function").field(&"<callable>").finish(),
            UploadStrategy::Endpoint(config) => f.debug_tuple("Endpoint").field(config).finish(),
            UploadStrategy::Unconfigured => f.write_str("Unconfigured"),
        }
    }
}
