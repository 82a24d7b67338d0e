//! Postino - File-to-Link Relay
//!
//! Postino converts content sent through a messaging platform into durable,
//! shareable reference tokens. Any holder of a token can later redeem it to
//! receive the original content back, optionally gated on channel membership
//! and optionally delivered ephemerally.
//!
//! # How it works
//!
//! An inbound item is forwarded into a durable storage chat; the locator of
//! the forwarded copy becomes the reference token, the descriptor (kind,
//! content handle, display name, size) is written through the reference
//! ledger, and a share link of the shape
//! `https://<host>/<bot>?start=<token>` is handed back. Redeeming the link
//! looks the token up and re-delivers the content by handle, without ever
//! copying bytes.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use postino::{BotIdentity, ChatId, JsonFileLedger, Relay};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> postino::PostinoResult<()> {
//!     let transport = Arc::new(MyPlatformClient::connect().await?);
//!     let ledger = Arc::new(JsonFileLedger::load("files.json").await?);
//!
//!     let relay = Relay::new(
//!         transport,
//!         ledger,
//!         BotIdentity::new("FileToLinksBot"),
//!         ChatId(-1001),
//!     );
//!
//!     let receipt = relay.handle_upload(&item, origin).await?;
//!     println!("{}", receipt.message());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Postino is organized as a workspace with focused crates:
//!
//! - `postino_core` - Domain types (kinds, descriptors, items, links)
//! - `postino_error` - Error types
//! - `postino_ledger` - Durable token-to-descriptor ledger
//! - `postino_relay` - Ingestion/redemption resolvers, gate, purge policy
//! - `postino_server` - Configuration and keepalive endpoint
//!
//! This crate (`postino`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use postino_core::{
    format_size_mb, BotIdentity, ChatId, ContentDescriptor, ContentKind, DeliveryInstruction,
    FileHandle, InboundItem, InboundItemBuilder, MediaPayload, MediaPayloadBuilder, MessageRef,
    PhotoVariant, ReferenceToken, ResolvedPayload, StoreLocator, UserId,
};
pub use postino_error::{
    ConfigError, LedgerError, LedgerErrorKind, PostinoError, PostinoErrorKind, PostinoResult,
    TransportError, TransportErrorKind,
};
pub use postino_ledger::{JsonFileLedger, MemoryLedger, ReferenceLedger};
pub use postino_relay::{
    ingest, redeem, schedule_purge, send_delivery, start_argument, AccessGate, AlwaysAuthorized,
    EphemeralPolicy, MembershipGate, MembershipStatus, MessagingTransport, MintedReference,
    PurgeHandle, RedeemReply, RedemptionOutcome, Relay, UploadReceipt,
};
pub use postino_server::{keepalive_router, EphemeralConfig, GateConfig, RelayConfig};
