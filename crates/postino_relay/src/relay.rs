//! The relay service wiring transport, ledger, gate, and policies.

use crate::{
    ingest, redeem, schedule_purge, start_argument, AccessGate, AlwaysAuthorized, EphemeralPolicy,
    MessagingTransport, MintedReference, PurgeHandle, RedemptionOutcome,
};
use postino_core::{format_size_mb, BotIdentity, ChatId, InboundItem, MessageRef, ReferenceToken, UserId};
use postino_error::PostinoResult;
use postino_ledger::ReferenceLedger;
use std::sync::Arc;
use tracing::info;

/// Reply shown when a token misses the ledger.
pub const NOT_FOUND_MESSAGE: &str = "File not found or expired.";

/// Reply shown when the access gate denies a requester.
pub const ACCESS_DENIED_MESSAGE: &str =
    "You must join the required channel before redeeming links.";

/// Reply shown for a bare `/start` with no token argument.
pub const WELCOME_MESSAGE: &str =
    "Send me a file and I'll generate a shareable link for it. \
     Open a share link to receive the file back.";

/// Receipt for a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    /// The minted reference
    pub minted: MintedReference,
}

impl UploadReceipt {
    /// User-facing confirmation text with the share link.
    pub fn message(&self) -> String {
        let descriptor = &self.minted.descriptor;
        format!(
            "File uploaded!\n\
             Name: {}\n\
             Size: {}\n\
             Type: {}\n\
             Link: {}",
            descriptor.display_name,
            format_size_mb(descriptor.size_bytes),
            descriptor.kind,
            self.minted.link,
        )
    }
}

/// Reply to a `/start` command.
#[derive(Debug)]
pub enum RedeemReply {
    /// No token argument; show the welcome output
    Welcome,
    /// The access gate denied the requester
    Denied,
    /// The token missed the ledger
    NotFound,
    /// The content was delivered
    Delivered {
        /// The delivered message
        message: MessageRef,
        /// Handle on the scheduled purge, when the ephemeral policy is set
        purge: Option<PurgeHandle>,
    },
}

impl RedeemReply {
    /// User-facing text for the non-delivery replies.
    pub fn message_text(&self) -> Option<&'static str> {
        match self {
            RedeemReply::Welcome => Some(WELCOME_MESSAGE),
            RedeemReply::Denied => Some(ACCESS_DENIED_MESSAGE),
            RedeemReply::NotFound => Some(NOT_FOUND_MESSAGE),
            RedeemReply::Delivered { .. } => None,
        }
    }
}

/// The relay service.
///
/// Owns the collaborators and exposes the two request pipelines: uploads
/// (ingestion) and `/start` redemptions. Each call is a sequential pipeline;
/// concurrent calls interleave freely on the runtime.
pub struct Relay<T: ?Sized> {
    transport: Arc<T>,
    ledger: Arc<dyn ReferenceLedger>,
    gate: Arc<dyn AccessGate>,
    identity: BotIdentity,
    storage_chat: ChatId,
    ephemeral: Option<EphemeralPolicy>,
}

impl<T> Relay<T>
where
    T: MessagingTransport + ?Sized + 'static,
{
    /// Create a relay with no access gate and no ephemeral policy.
    pub fn new(
        transport: Arc<T>,
        ledger: Arc<dyn ReferenceLedger>,
        identity: BotIdentity,
        storage_chat: ChatId,
    ) -> Self {
        Self {
            transport,
            ledger,
            gate: Arc::new(AlwaysAuthorized),
            identity,
            storage_chat,
            ephemeral: None,
        }
    }

    /// Wire in an access gate.
    pub fn with_gate(mut self, gate: Arc<dyn AccessGate>) -> Self {
        self.gate = gate;
        self
    }

    /// Enable the ephemeral delivery policy.
    pub fn with_ephemeral(mut self, policy: EphemeralPolicy) -> Self {
        self.ephemeral = Some(policy);
        self
    }

    /// The bot identity share links are derived from.
    pub fn identity(&self) -> &BotIdentity {
        &self.identity
    }

    /// Handle an inbound content upload.
    ///
    /// Runs the ingestion pipeline and assembles the user-facing receipt.
    /// Any failure left the ledger unmutated (transport failure) or must be
    /// reported as a failure (flush failure); either way no link is handed
    /// out for an unresolvable token.
    #[tracing::instrument(skip(self, item))]
    pub async fn handle_upload(
        &self,
        item: &InboundItem,
        origin: MessageRef,
    ) -> PostinoResult<UploadReceipt> {
        let minted = ingest(
            self.transport.as_ref(),
            self.ledger.as_ref(),
            &self.identity,
            self.storage_chat,
            item,
            origin,
        )
        .await?;

        Ok(UploadReceipt { minted })
    }

    /// Handle a `/start` command.
    ///
    /// Parses the argument, evaluates the gate, resolves the token, sends
    /// the delivery, and schedules the purge when the ephemeral policy is
    /// set. A failed delivery send propagates as an error for the caller to
    /// report; the descriptor stays valid for retry.
    #[tracing::instrument(skip(self, text), fields(requester = %requester))]
    pub async fn handle_redeem(
        &self,
        text: &str,
        requester: UserId,
        request: MessageRef,
    ) -> PostinoResult<RedeemReply> {
        let Some(argument) = start_argument(text) else {
            return Ok(RedeemReply::Welcome);
        };
        let token = ReferenceToken::from(argument);

        let instruction = match redeem(
            self.ledger.as_ref(),
            self.gate.as_ref(),
            &token,
            requester,
        )
        .await
        {
            RedemptionOutcome::Denied => return Ok(RedeemReply::Denied),
            RedemptionOutcome::NotFound => return Ok(RedeemReply::NotFound),
            RedemptionOutcome::Delivery(instruction) => instruction,
        };

        let caption = format!("Here's your file!\n{}", instruction.display_name);
        let message = crate::send_delivery(
            self.transport.as_ref(),
            request.chat,
            &instruction,
            &caption,
        )
        .await?;

        let purge = self.ephemeral.as_ref().map(|policy| {
            schedule_purge(Arc::clone(&self.transport), policy, message, request)
        });

        info!(
            token = %token,
            kind = %instruction.kind,
            ephemeral = purge.is_some(),
            "Delivered redemption"
        );

        Ok(RedeemReply::Delivered { message, purge })
    }
}
