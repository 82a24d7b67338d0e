//! Content kind enumeration.

use serde::{Deserialize, Serialize};

/// Kind of relayed content.
///
/// Drives redemption dispatch: each kind maps to the matching typed send
/// operation on the transport, with `Unknown` falling back to the document
/// path as the most generic deliverable form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Document content (PDF, ZIP, APK, etc.)
    #[display("document")]
    Document,
    /// Video content (MP4, WebM, etc.)
    #[display("video")]
    Video,
    /// Audio content (MP3, OGG, etc.)
    #[display("audio")]
    Audio,
    /// Photo content
    #[display("photo")]
    Photo,
    /// Animation content (GIF, silent MP4)
    #[display("animation")]
    Animation,
    /// Unrecognized historical encoding; delivered as a document
    #[serde(other)]
    #[display("unknown")]
    Unknown,
}

impl ContentKind {
    /// Convert to the lowercase string representation used in the ledger file.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Document => "document",
            ContentKind::Video => "video",
            ContentKind::Audio => "audio",
            ContentKind::Photo => "photo",
            ContentKind::Animation => "animation",
            ContentKind::Unknown => "unknown",
        }
    }
}

impl std::str::FromStr for ContentKind {
    type Err = std::convert::Infallible;

    /// Parse a kind string. Unrecognized encodings normalize to
    /// [`ContentKind::Unknown`] rather than failing, so records written by
    /// older variants stay readable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "document" => ContentKind::Document,
            "video" => ContentKind::Video,
            "audio" => ContentKind::Audio,
            "photo" => ContentKind::Photo,
            "animation" => ContentKind::Animation,
            _ => ContentKind::Unknown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn round_trips_through_str() {
        for kind in ContentKind::iter() {
            let parsed: ContentKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn unrecognized_encoding_normalizes_to_unknown() {
        let parsed: ContentKind = "MessageMediaType.DOCUMENT_LEGACY".parse().unwrap();
        assert_eq!(parsed, ContentKind::Unknown);
    }

    #[test]
    fn serde_uses_lowercase_strings() {
        let json = serde_json::to_string(&ContentKind::Video).unwrap();
        assert_eq!(json, "\"video\"");
        let kind: ContentKind = serde_json::from_str("\"photo\"").unwrap();
        assert_eq!(kind, ContentKind::Photo);
    }

    #[test]
    fn serde_unknown_variant_falls_back() {
        let kind: ContentKind = serde_json::from_str("\"sticker\"").unwrap();
        assert_eq!(kind, ContentKind::Unknown);
    }
}
