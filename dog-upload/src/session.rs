use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    ErrorMessages, FileInput, Page, SessionMeta, UploadEvent, UploadEventHub, UploadSettings,
};

/// Collaborator surface the host wires into a session: the file policy
/// predicates, the error display, the page renderer, and the value sink.
/// All calls are synchronous and fire-and-forget from the orchestrator's
/// point of view.
pub trait SessionHost: Send + Sync {
    /// Whether the widget accepts this file's type
    fn is_file_type_allowed(&self, file: &FileInput) -> bool;

    /// Whether the widget accepts this file's size
    fn is_file_size_allowed(&self, file: &FileInput) -> bool;

    /// Surface an error message to the user
    fn show_error(&self, message: &str);

    /// Render the given page
    fn change_page(&self, page: Page);

    /// Deliver the uploaded value to the widget's bound input
    fn update_value(&self, value: &serde_json::Value);
}

/// Permissive host that accepts every file and ignores UI callbacks.
/// Useful for headless embedding and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSessionHost;

impl SessionHost for DefaultSessionHost {
    fn is_file_type_allowed(&self, _file: &FileInput) -> bool {
        true
    }

    fn is_file_size_allowed(&self, _file: &FileInput) -> bool {
        true
    }

    fn show_error(&self, _message: &str) {}

    fn change_page(&self, _page: Page) {}

    fn update_value(&self, _value: &serde_json::Value) {}
}

/// Long-lived context for one widget instance. A session outlives any
/// single upload attempt; during a call the orchestrator is the only
/// writer of `is_uploading` and `page`.
///
/// The session does not reject concurrent calls itself: `is_uploading` is
/// advisory and hosts are expected to disable their trigger control while
/// it reads true.
pub struct UploadSession {
    settings: UploadSettings,
    meta: Mutex<SessionMeta>,
    i18n: ErrorMessages,
    host: Arc<dyn SessionHost>,
    events: UploadEventHub,
    is_uploading: AtomicBool,
    page: Mutex<Page>,
}

impl UploadSession {
    /// Create a session with the permissive default host.
    pub fn new(settings: UploadSettings) -> Self {
        Self::with_host(settings, Arc::new(DefaultSessionHost))
    }

    /// Create a session wired to a host collaborator.
    pub fn with_host(settings: UploadSettings, host: Arc<dyn SessionHost>) -> Self {
        Self {
            settings,
            meta: Mutex::new(SessionMeta::default()),
            i18n: ErrorMessages::default(),
            host,
            events: UploadEventHub::new(),
            is_uploading: AtomicBool::new(false),
            page: Mutex::new(Page::Upload),
        }
    }

    pub fn with_meta(self, meta: SessionMeta) -> Self {
        *self.meta.lock() = meta;
        self
    }

    pub fn with_i18n(mut self, i18n: ErrorMessages) -> Self {
        self.i18n = i18n;
        self
    }

    pub fn settings(&self) -> &UploadSettings {
        &self.settings
    }

    pub fn i18n(&self) -> &ErrorMessages {
        &self.i18n
    }

    /// Snapshot of the fallback file and original filename.
    pub fn meta(&self) -> SessionMeta {
        self.meta.lock().clone()
    }

    /// Set the fallback file used when a call passes no explicit file.
    pub fn set_file(&self, file: Option<FileInput>) {
        self.meta.lock().file = file;
    }

    pub fn set_original_file_name(&self, name: Option<String>) {
        self.meta.lock().original_file_name = name;
    }

    /// Subscribe to this session's lifecycle events.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<UploadEvent> {
        self.events.subscribe()
    }

    pub fn is_uploading(&self) -> bool {
        self.is_uploading.load(Ordering::SeqCst)
    }

    pub fn page(&self) -> Page {
        *self.page.lock()
    }

    /// Record the new page and forward it to the host renderer.
    pub fn change_page(&self, page: Page) {
        *self.page.lock() = page;
        self.host.change_page(page);
    }

    pub(crate) fn set_uploading(&self, value: bool) {
        self.is_uploading.store(value, Ordering::SeqCst);
    }

    pub(crate) fn emit(&self, event: UploadEvent) {
        self.events.emit(event);
    }

    pub(crate) fn show_error(&self, message: &str) {
        self.host.show_error(message);
    }

    pub(crate) fn update_value(&self, value: &serde_json::Value) {
        self.host.update_value(value);
    }

    pub(crate) fn is_file_type_allowed(&self, file: &FileInput) -> bool {
        self.host.is_file_type_allowed(file)
    }

    pub(crate) fn is_file_size_allowed(&self, file: &FileInput) -> bool {
        self.host.is_file_size_allowed(file)
    }
}

/// Sets the session's uploading flag on acquisition and clears it when
/// dropped, so every terminal path releases it.
pub(crate) struct UploadingGuard<'a> {
    session: &'a UploadSession,
}

impl<'a> UploadingGuard<'a> {
    pub(crate) fn acquire(session: &'a UploadSession) -> Self {
        session.set_uploading(true);
        Self { session }
    }
}

impl Drop for UploadingGuard<'_> {
    fn drop(&mut self) {
        self.session.set_uploading(false);
    }
}
