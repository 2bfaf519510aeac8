use chrono::{DateTime, Utc};
use tokio::sync::broadcast;

use crate::FileInput;

/// Buffered capacity of the event channel; slow subscribers lag rather
/// than block emission.
const EVENT_BUFFER: usize = 64;

/// Lifecycle notifications emitted while an upload runs.
///
/// One asymmetry is load-bearing: the endpoint strategy emits
/// `FileUploaded` on its failure path too, carrying the error text as the
/// payload. Subscribers that need the real failure signal must watch the
/// call's returned error, not this event.
#[derive(Debug, Clone)]
pub enum UploadEvent {
    /// Validation passed and backend dispatch is about to begin
    UploadStarted { file: FileInput, at: DateTime<Utc> },
    /// A backend produced a value
    FileUploaded {
        value: serde_json::Value,
        at: DateTime<Utc>,
    },
    /// A backend rejected the upload
    UploadError { message: String, at: DateTime<Utc> },
}

impl UploadEvent {
    pub fn started(file: FileInput) -> Self {
        Self::UploadStarted {
            file,
            at: Utc::now(),
        }
    }

    pub fn uploaded(value: serde_json::Value) -> Self {
        Self::FileUploaded {
            value,
            at: Utc::now(),
        }
    }

    pub fn errored<S: Into<String>>(message: S) -> Self {
        Self::UploadError {
            message: message.into(),
            at: Utc::now(),
        }
    }

    /// Wire-level event name, stable across releases
    pub fn name(&self) -> &'static str {
        match self {
            UploadEvent::UploadStarted { .. } => "uploadStarted",
            UploadEvent::FileUploaded { .. } => "fileUploaded",
            UploadEvent::UploadError { .. } => "uploadError",
        }
    }
}

/// Fire-and-forget hub for upload lifecycle events. Emission never fails
/// and never waits: without subscribers events are dropped on the floor.
pub struct UploadEventHub {
    tx: broadcast::Sender<UploadEvent>,
}

impl UploadEventHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_BUFFER);
        Self { tx }
    }

    /// Subscribe to lifecycle events
    pub fn subscribe(&self) -> broadcast::Receiver<UploadEvent> {
        self.tx.subscribe()
    }

    /// Emit an event; delivery is best effort
    pub fn emit(&self, event: UploadEvent) {
        let _ = self.tx.send(event);
    }
}

impl Default for UploadEventHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_without_subscribers_is_silent() {
        let hub = UploadEventHub::new();
        hub.emit(UploadEvent::errored("nobody listening"));
    }

    #[tokio::test]
    async fn test_subscribers_receive_in_order() {
        let hub = UploadEventHub::new();
        let mut rx = hub.subscribe();

        hub.emit(UploadEvent::started(FileInput::new(&b"x"[..])));
        hub.emit(UploadEvent::uploaded(serde_json::json!("https://x/y")));

        assert_eq!(rx.recv().await.unwrap().name(), "uploadStarted");
        assert_eq!(rx.recv().await.unwrap().name(), "fileUploaded");
    }

    #[test]
    fn test_event_names() {
        assert_eq!(UploadEvent::errored("x").name(), "uploadError");
        assert_eq!(
            UploadEvent::uploaded(serde_json::Value::Null).name(),
            "fileUploaded"
        );
    }
}
