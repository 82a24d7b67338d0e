//! In-memory ledger backend.

use crate::ReferenceLedger;
use postino_core::{ContentDescriptor, ReferenceToken};
use postino_error::PostinoResult;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Non-durable ledger for tests and embedding.
///
/// Same contract as the file backend, minus durability: `flush` is a no-op
/// and everything is lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    entries: RwLock<HashMap<String, ContentDescriptor>>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ReferenceLedger for MemoryLedger {
    async fn get(&self, token: &ReferenceToken) -> Option<ContentDescriptor> {
        self.entries.read().await.get(token.as_str()).cloned()
    }

    async fn put(
        &self,
        token: ReferenceToken,
        descriptor: ContentDescriptor,
    ) -> PostinoResult<()> {
        self.entries.write().await.insert(token.0, descriptor);
        Ok(())
    }

    async fn flush(&self) -> PostinoResult<()> {
        Ok(())
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
