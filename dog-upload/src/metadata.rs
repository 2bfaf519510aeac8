use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::FileInput;

const SUFFIX_LEN: usize = 10;
const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Naming and type descriptor synthesized once per upload attempt and
/// handed to the backend alongside the file. Purely a labeling aid: the
/// random suffix is collision-resistant for filename disambiguation, not
/// cryptographically strong, and nothing here is cached between attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadMetadata {
    /// Synthesized filename, always ending in a dot-separated extension
    /// (the literal `null` when no subtype can be determined)
    pub name: String,
    /// Raw MIME string of the file, if it carried one
    pub mime: Option<String>,
    /// Subtype portion of the MIME string (text after `/`)
    pub subtype: Option<String>,
}

impl UploadMetadata {
    /// Derive metadata for one attempt. When the session knows the original
    /// filename, its lowercased stem (text before the first dot) prefixes
    /// the random suffix.
    pub fn synthesize(file: &FileInput, original_file_name: Option<&str>) -> Self {
        let subtype = file
            .mime
            .as_deref()
            .and_then(mime_subtype)
            .map(str::to_string);

        let mut name = String::new();
        if let Some(original) = original_file_name {
            let stem = original.split('.').next().unwrap_or(original);
            name.push_str(&stem.to_lowercase());
            name.push('-');
        }
        name.push_str(&random_suffix(SUFFIX_LEN));
        name.push('.');
        name.push_str(subtype.as_deref().unwrap_or("null"));

        Self {
            name,
            mime: file.mime.clone(),
            subtype,
        }
    }
}

/// Subtype portion of a MIME string, or None when the string is malformed.
fn mime_subtype(mime: &str) -> Option<&str> {
    match mime.split_once('/') {
        Some((_, subtype)) if !subtype.is_empty() => Some(subtype),
        _ => None,
    }
}

/// Fixed-length suffix drawn from the lowercase digit+letter alphabet,
/// independent of locale or number formatting.
fn random_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_file() -> FileInput {
        FileInput::new(&b"\x89PNG"[..]).with_mime("image/png")
    }

    #[test]
    fn test_name_shape_without_original_filename() {
        let metadata = UploadMetadata::synthesize(&png_file(), None);
        let (stem, extension) = metadata.name.split_once('.').unwrap();
        assert_eq!(extension, "png");
        assert_eq!(stem.len(), SUFFIX_LEN);
        assert!(stem
            .bytes()
            .all(|b| SUFFIX_ALPHABET.contains(&b)));
        assert_eq!(metadata.mime.as_deref(), Some("image/png"));
        assert_eq!(metadata.subtype.as_deref(), Some("png"));
    }

    #[test]
    fn test_original_filename_stem_is_lowercased_prefix() {
        let metadata = UploadMetadata::synthesize(&png_file(), Some("Holiday.Trip.PNG"));
        assert!(metadata.name.starts_with("holiday-"));
        assert!(metadata.name.ends_with(".png"));
        // stem + '-' + suffix + ".png"
        assert_eq!(metadata.name.len(), "holiday-".len() + SUFFIX_LEN + ".png".len());
    }

    #[test]
    fn test_missing_mime_falls_back_to_null_extension() {
        let file = FileInput::new(&b"data"[..]);
        let metadata = UploadMetadata::synthesize(&file, None);
        assert!(metadata.name.ends_with(".null"));
        assert!(metadata.mime.is_none());
        assert!(metadata.subtype.is_none());
    }

    #[test]
    fn test_malformed_mime_falls_back_to_null_extension() {
        for mime in ["imagepng", "image/", "/"] {
            let file = FileInput::new(&b"data"[..]).with_mime(mime);
            let metadata = UploadMetadata::synthesize(&file, None);
            assert!(metadata.name.ends_with(".null"), "mime {:?}", mime);
            assert!(metadata.subtype.is_none(), "mime {:?}", mime);
        }
    }

    #[test]
    fn test_consecutive_names_differ() {
        let file = png_file();
        let first = UploadMetadata::synthesize(&file, None);
        let second = UploadMetadata::synthesize(&file, None);
        assert_ne!(first.name, second.name);
    }
}
