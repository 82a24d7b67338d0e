//! Deferred purge of ephemeral deliveries.

use crate::MessagingTransport;
use postino_core::MessageRef;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Ephemeral delivery policy.
///
/// When set on the relay, every delivered copy is purged after `delay`,
/// together with the redemption request message that asked for it. The
/// ledger entry is untouched; the token stays redeemable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EphemeralPolicy {
    /// How long a delivered copy lives before the purge
    pub delay: Duration,
}

impl EphemeralPolicy {
    /// The observed production delay.
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(120);

    /// Create a policy with an explicit delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for EphemeralPolicy {
    fn default() -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
        }
    }
}

/// Handle on a scheduled purge.
#[derive(Debug)]
pub struct PurgeHandle {
    task: tokio::task::JoinHandle<()>,
}

impl PurgeHandle {
    /// Cancel the purge timer.
    ///
    /// Used when the delivered message was already removed independently, to
    /// avoid a redundant double-delete.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Whether the purge has run (or was cancelled).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the purge to run. Cancellation is not an error.
    pub async fn wait(self) {
        let _ = self.task.await;
    }
}

/// Schedule the deferred purge of a delivery.
///
/// After the policy delay, deletes the delivered copy and the originating
/// request message. This is advisory cleanup of the delivery instance only;
/// deletion failures are logged and never propagated.
pub fn schedule_purge<T>(
    transport: Arc<T>,
    policy: &EphemeralPolicy,
    delivered: MessageRef,
    request: MessageRef,
) -> PurgeHandle
where
    T: MessagingTransport + ?Sized + 'static,
{
    let delay = policy.delay;
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        for message in [delivered, request] {
            if let Err(e) = transport.delete_message(message).await {
                warn!(
                    chat = %message.chat,
                    message_id = message.message_id,
                    error = %e,
                    "Purge delete failed"
                );
            }
        }
        debug!("Purged ephemeral delivery");
    });

    PurgeHandle { task }
}
