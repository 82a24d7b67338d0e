//! Durable reference ledger for the Postino relay.
//!
//! The ledger is the persistent mapping from reference token to content
//! descriptor. Entries are written exactly once per successful ingestion and
//! never mutated afterward; the only operations are lookup, upsert, and a
//! durable flush of the whole mapping.
//!
//! # Backends
//!
//! - [`JsonFileLedger`]: the production backend. Loaded wholesale at startup,
//!   rewritten wholesale on every flush with the atomic temp-file + rename
//!   discipline, so a reader never observes a partially-written file.
//! - [`MemoryLedger`]: non-durable backend for tests and embedding.
//!
//! # Example
//!
//! ```no_run
//! use postino_core::{ContentDescriptor, ContentKind, FileHandle, ReferenceToken};
//! use postino_ledger::{JsonFileLedger, ReferenceLedger};
//!
//! # async fn example() -> postino_error::PostinoResult<()> {
//! let ledger = JsonFileLedger::load("files.json").await?;
//!
//! let token = ReferenceToken("8842".to_string());
//! let descriptor = ContentDescriptor {
//!     kind: ContentKind::Document,
//!     content_handle: FileHandle("BQACAgQAAx".to_string()),
//!     display_name: "report.pdf".to_string(),
//!     size_bytes: 2_097_152,
//! };
//!
//! ledger.put(token.clone(), descriptor).await?;
//! ledger.flush().await?;
//! assert!(ledger.get(&token).await.is_some());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use postino_core::{ContentDescriptor, ReferenceToken};
use postino_error::PostinoResult;

mod json;
mod memory;

pub use json::JsonFileLedger;
pub use memory::MemoryLedger;

/// Trait for pluggable reference ledger backends.
///
/// The contract every backend upholds:
/// - `put` is an unconditional upsert; tokens derive from append-only store
///   locators and are not expected to collide, so no uniqueness check is
///   enforced at this layer.
/// - `get` is a pure lookup with no side effects.
/// - `flush` durably persists the full mapping and is invoked after every
///   `put`; a flush failure must propagate to the caller, since an
///   un-flushed put means the token would be unresolvable after restart.
#[async_trait::async_trait]
pub trait ReferenceLedger: Send + Sync {
    /// Look up the descriptor for a token. `None` when absent.
    async fn get(&self, token: &ReferenceToken) -> Option<ContentDescriptor>;

    /// Insert or replace the descriptor for a token.
    async fn put(&self, token: ReferenceToken, descriptor: ContentDescriptor)
    -> PostinoResult<()>;

    /// Durably persist the full mapping.
    async fn flush(&self) -> PostinoResult<()>;

    /// Number of entries currently held.
    async fn len(&self) -> usize;

    /// Whether the ledger holds no entries.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
