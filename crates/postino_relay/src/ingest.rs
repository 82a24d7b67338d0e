//! Ingestion resolver: inbound item to minted reference.

use crate::MessagingTransport;
use postino_core::{
    BotIdentity, ChatId, ContentDescriptor, InboundItem, MessageRef, ReferenceToken,
};
use postino_error::{PostinoResult, TransportError, TransportErrorKind};
use postino_ledger::ReferenceLedger;
use tracing::info;

/// A freshly minted reference: the token, the descriptor written for it, and
/// the share link derived from the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintedReference {
    /// The opaque token, derived from the store locator
    pub token: ReferenceToken,
    /// The descriptor written to the ledger
    pub descriptor: ContentDescriptor,
    /// The redeemable share link
    pub link: String,
}

/// Ingest an inbound item and mint a reference token for it.
///
/// The pipeline is all-or-nothing:
/// 1. Resolve the item's payload; an item with no supported content is
///    rejected with no side effects.
/// 2. Forward the origin message into the storage chat. This is the only
///    step that can fail on external unavailability; on failure the whole
///    ingestion aborts with no ledger mutation.
/// 3. Derive the token from the store locator and write the descriptor
///    through the ledger, flushing before returning. A flush failure
///    propagates: the caller must not report success for a mapping that was
///    never durably written.
///
/// On return, exactly one durable copy of the content exists in the storage
/// chat, independent of the sender's copy.
#[tracing::instrument(skip(transport, ledger, identity, item), fields(storage_chat = %storage_chat))]
pub async fn ingest<T>(
    transport: &T,
    ledger: &dyn ReferenceLedger,
    identity: &BotIdentity,
    storage_chat: ChatId,
    item: &InboundItem,
    origin: MessageRef,
) -> PostinoResult<MintedReference>
where
    T: MessagingTransport + ?Sized,
{
    let payload = item.resolve_payload().ok_or_else(|| {
        TransportError::new(TransportErrorKind::Unsupported(
            "item carries no document, video, audio, animation, or photo".to_string(),
        ))
    })?;

    let locator = transport.forward_to_chat(origin, storage_chat).await?;
    let token = ReferenceToken::from(locator);

    let descriptor = ContentDescriptor {
        kind: payload.kind,
        content_handle: payload.handle,
        display_name: payload.display_name,
        size_bytes: payload.size_bytes,
    };

    ledger.put(token.clone(), descriptor.clone()).await?;
    ledger.flush().await?;

    let link = identity.share_link(&token);

    info!(
        token = %token,
        kind = %descriptor.kind,
        name = %descriptor.display_name,
        size = descriptor.size_bytes,
        "Minted reference"
    );

    Ok(MintedReference {
        token,
        descriptor,
        link,
    })
}
