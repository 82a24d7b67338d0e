//! Inbound item types and payload resolution.

use crate::{ContentKind, FileHandle, FALLBACK_NAME, PHOTO_FALLBACK_NAME};
use derive_getters::Getters;

/// A single media payload attached to an inbound item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
pub struct MediaPayload {
    /// Platform content handle.
    handle: FileHandle,

    /// Original file name, when the platform reports one.
    #[builder(default)]
    file_name: Option<String>,

    /// Reported size in bytes, when known.
    #[builder(default)]
    size_bytes: Option<u64>,
}

/// One quality variant of a photo payload.
///
/// Platforms expose photos as a sequence of renditions ordered by ascending
/// quality; ingestion picks the highest one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoVariant {
    /// Platform content handle for this rendition
    pub handle: FileHandle,
    /// Ordering key; higher means better quality
    pub quality: u32,
}

impl PhotoVariant {
    /// Create a photo variant.
    pub fn new(handle: FileHandle, quality: u32) -> Self {
        Self { handle, quality }
    }
}

/// An inbound message carrying at most one content payload per kind slot.
///
/// Mirrors how the platform surfaces a received message: a struct of
/// optional media fields, of which at most one is populated in practice.
/// [`InboundItem::resolve_payload`] applies a fixed precedence when more
/// than one is.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
pub struct InboundItem {
    /// Document payload.
    #[builder(default)]
    document: Option<MediaPayload>,

    /// Video payload.
    #[builder(default)]
    video: Option<MediaPayload>,

    /// Audio payload.
    #[builder(default)]
    audio: Option<MediaPayload>,

    /// Animation payload.
    #[builder(default)]
    animation: Option<MediaPayload>,

    /// Photo quality variants, ascending quality order.
    #[builder(default)]
    photo: Vec<PhotoVariant>,

    /// Optional caption accompanying the content.
    #[builder(default)]
    caption: Option<String>,
}

/// The payload an ingestion derives from an inbound item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPayload {
    /// Kind derived from the populated payload slot
    pub kind: ContentKind,
    /// Handle of the selected payload
    pub handle: FileHandle,
    /// Display name with deterministic fallback applied
    pub display_name: String,
    /// Size in bytes, `0` when unreported
    pub size_bytes: u64,
}

impl InboundItem {
    /// Resolve the item's content payload.
    ///
    /// Precedence is fixed, most specific to most generic: document, video,
    /// audio, animation, photo. Name fallbacks are deterministic: `"Unknown"`
    /// when absent, `"photo.jpg"` for photos. Size defaults to `0` when
    /// unreported. Returns `None` when the item carries no supported payload.
    pub fn resolve_payload(&self) -> Option<ResolvedPayload> {
        let slots = [
            (ContentKind::Document, &self.document),
            (ContentKind::Video, &self.video),
            (ContentKind::Audio, &self.audio),
            (ContentKind::Animation, &self.animation),
        ];

        for (kind, slot) in slots {
            if let Some(payload) = slot {
                return Some(ResolvedPayload {
                    kind,
                    handle: payload.handle.clone(),
                    display_name: payload
                        .file_name
                        .clone()
                        .unwrap_or_else(|| FALLBACK_NAME.to_string()),
                    size_bytes: payload.size_bytes.unwrap_or(0),
                });
            }
        }

        self.best_photo().map(|variant| ResolvedPayload {
            kind: ContentKind::Photo,
            handle: variant.handle.clone(),
            display_name: PHOTO_FALLBACK_NAME.to_string(),
            size_bytes: 0,
        })
    }

    /// Highest-quality photo variant, if any.
    ///
    /// Variants arrive in ascending quality order, so this is the last one;
    /// selecting by key keeps it correct even if that ordering slips.
    pub fn best_photo(&self) -> Option<&PhotoVariant> {
        self.photo.iter().max_by_key(|variant| variant.quality)
    }
}
