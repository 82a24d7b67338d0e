//! Content descriptor persisted per reference token.

use crate::{ContentKind, FileHandle};
use serde::{Deserialize, Serialize};

/// Display name used when the source item carries none.
pub const FALLBACK_NAME: &str = "Unknown";

/// Display name synthesized for photos, which never carry one.
pub const PHOTO_FALLBACK_NAME: &str = "photo.jpg";

/// The unit of truth stored in the reference ledger.
///
/// A descriptor is written exactly once per successful ingestion and never
/// mutated afterward. Optional fields default on deserialization so ledger
/// files written by older variants (or with fields yet to come) stay
/// readable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContentDescriptor {
    /// Kind of content; drives redemption dispatch
    pub kind: ContentKind,
    /// Platform handle sufficient to re-deliver the content
    pub content_handle: FileHandle,
    /// Human-readable name
    #[serde(default = "default_display_name")]
    pub display_name: String,
    /// Size in bytes; `0` when unknown
    #[serde(default)]
    pub size_bytes: u64,
}

fn default_display_name() -> String {
    FALLBACK_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{
            "kind": "document",
            "content_handle": "BQACAgQAAx",
            "display_name": "report.pdf",
            "size_bytes": 2097152,
            "uploaded_by": 42,
            "checksum": "abc"
        }"#;
        let descriptor: ContentDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.display_name, "report.pdf");
        assert_eq!(descriptor.size_bytes, 2_097_152);
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"kind": "photo", "content_handle": "AgACAgQAAx"}"#;
        let descriptor: ContentDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.display_name, FALLBACK_NAME);
        assert_eq!(descriptor.size_bytes, 0);
    }
}
