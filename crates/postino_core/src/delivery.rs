//! Delivery instruction emitted by redemption.

use crate::{ContentDescriptor, ContentKind, FileHandle};

/// What a successful redemption instructs the transport to send.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeliveryInstruction {
    /// Kind selecting the typed send operation
    pub kind: ContentKind,
    /// Handle of the stored content
    pub content_handle: FileHandle,
    /// Name shown to the recipient
    pub display_name: String,
}

impl From<&ContentDescriptor> for DeliveryInstruction {
    fn from(descriptor: &ContentDescriptor) -> Self {
        Self {
            kind: descriptor.kind,
            content_handle: descriptor.content_handle.clone(),
            display_name: descriptor.display_name.clone(),
        }
    }
}
