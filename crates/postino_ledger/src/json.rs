//! JSON-file ledger backend.

use crate::ReferenceLedger;
use postino_core::{ContentDescriptor, ReferenceToken};
use postino_error::{LedgerError, LedgerErrorKind, PostinoResult};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::{Mutex, RwLock};

/// File-backed ledger, the production backend.
///
/// The whole mapping lives in memory behind a read-write lock and is loaded
/// once at startup; every flush serializes a snapshot and replaces the file
/// atomically (temp file + rename), so a crash or a concurrent reader never
/// observes a half-written file. Concurrent flushes are serialized by a
/// dedicated mutex so their temp files cannot clobber each other.
pub struct JsonFileLedger {
    path: PathBuf,
    entries: RwLock<HashMap<String, ContentDescriptor>>,
    flush_lock: Mutex<()>,
}

impl JsonFileLedger {
    /// Load the ledger from `path`.
    ///
    /// An absent file yields an empty ledger (first-run behavior), never an
    /// error. A present but unreadable or unparsable file does error: silently
    /// starting empty would orphan every previously minted token.
    #[tracing::instrument(skip(path))]
    pub async fn load(path: impl Into<PathBuf>) -> PostinoResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                LedgerError::new(LedgerErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                LedgerError::new(LedgerErrorKind::Parse(format!("{}: {}", path.display(), e)))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(LedgerError::new(LedgerErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
                .into());
            }
        };

        tracing::info!(
            path = %path.display(),
            entries = entries.len(),
            "Loaded reference ledger"
        );

        Ok(Self {
            path,
            entries: RwLock::new(entries),
            flush_lock: Mutex::new(()),
        })
    }
}

#[async_trait::async_trait]
impl ReferenceLedger for JsonFileLedger {
    #[tracing::instrument(skip(self), fields(token = %token))]
    async fn get(&self, token: &ReferenceToken) -> Option<ContentDescriptor> {
        self.entries.read().await.get(token.as_str()).cloned()
    }

    #[tracing::instrument(skip(self, descriptor), fields(token = %token, kind = %descriptor.kind))]
    async fn put(
        &self,
        token: ReferenceToken,
        descriptor: ContentDescriptor,
    ) -> PostinoResult<()> {
        let mut entries = self.entries.write().await;
        if let Some(previous) = entries.insert(token.0.clone(), descriptor) {
            // Tokens derive from append-only store locators; an overwrite
            // means a collision we chose to tolerate, not to hide.
            tracing::warn!(
                token = %token,
                previous_kind = %previous.kind,
                "Replaced existing ledger entry"
            );
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn flush(&self) -> PostinoResult<()> {
        // Snapshot under the flush lock so a stale snapshot can never win
        // the final rename over a newer one.
        let _guard = self.flush_lock.lock().await;

        let snapshot = {
            let entries = self.entries.read().await;
            serde_json::to_vec(&*entries)
                .map_err(|e| LedgerError::new(LedgerErrorKind::Serialize(e.to_string())))?
        };

        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, &snapshot).await.map_err(|e| {
            LedgerError::new(LedgerErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            LedgerError::new(LedgerErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            bytes = snapshot.len(),
            "Flushed reference ledger"
        );

        Ok(())
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
