//! Domain types for the Postino relay.
//!
//! This crate defines the vocabulary shared by the rest of the workspace:
//! content kinds, the descriptor persisted per reference token, inbound items
//! with their payload-precedence resolution, delivery instructions, and the
//! derived share link.
//!
//! # Example
//!
//! ```
//! use postino_core::{BotIdentity, ContentKind, InboundItemBuilder, MediaPayloadBuilder, FileHandle};
//!
//! let item = InboundItemBuilder::default()
//!     .document(Some(
//!         MediaPayloadBuilder::default()
//!             .handle(FileHandle("BQACAgQAAx".to_string()))
//!             .file_name(Some("report.pdf".to_string()))
//!             .size_bytes(Some(2_097_152))
//!             .build()
//!             .expect("valid payload"),
//!     ))
//!     .build()
//!     .expect("valid item");
//!
//! let payload = item.resolve_payload().expect("document payload");
//! assert_eq!(payload.kind, ContentKind::Document);
//! assert_eq!(payload.display_name, "report.pdf");
//!
//! let identity = BotIdentity::new("FileToLinksBot");
//! let link = identity.share_link(&"12345".into());
//! assert_eq!(link, "https://t.me/FileToLinksBot?start=12345");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod delivery;
mod descriptor;
mod format;
mod handle;
mod item;
mod kind;
mod link;

pub use delivery::DeliveryInstruction;
pub use descriptor::{ContentDescriptor, FALLBACK_NAME, PHOTO_FALLBACK_NAME};
pub use format::format_size_mb;
pub use handle::{ChatId, FileHandle, MessageRef, ReferenceToken, StoreLocator, UserId};
pub use item::{
    InboundItem, InboundItemBuilder, MediaPayload, MediaPayloadBuilder, PhotoVariant,
    ResolvedPayload,
};
pub use kind::ContentKind;
pub use link::{BotIdentity, DEFAULT_PLATFORM_HOST};
