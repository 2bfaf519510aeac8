/// Placeholder replaced by the formatted maximum size in the
/// `file_too_large` template.
pub const FILESIZE_TOKEN: &str = "_FILESIZE_";

/// Error message templates surfaced through the host's error display.
/// Hosts swap these for localized tables; the orchestrator only reads them.
#[derive(Debug, Clone)]
pub struct ErrorMessages {
    pub no_file_selected: String,
    pub file_type_not_allowed: String,
    pub file_too_large: String,
    pub no_endpoint: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            no_file_selected: "Please select a file".to_string(),
            file_type_not_allowed: "This file type is not allowed".to_string(),
            file_too_large: "This file is too large, the maximum size is _FILESIZE_"
                .to_string(),
            no_endpoint: "No upload backend has been configured".to_string(),
        }
    }
}

impl ErrorMessages {
    /// The `file_too_large` template with the size placeholder filled in.
    pub fn file_too_large_message(&self, max_bytes: u64) -> String {
        self.file_too_large
            .replace(FILESIZE_TOKEN, &bytes_to_size(max_bytes))
    }
}

/// Human-readable byte size: 1024-based units with integer rounding.
pub fn bytes_to_size(bytes: u64) -> String {
    const SIZES: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).log(1024.0).floor() as usize).min(SIZES.len() - 1);
    let value = (bytes as f64 / 1024f64.powi(exponent as i32)).round();
    format!("{} {}", value, SIZES[exponent])
}
