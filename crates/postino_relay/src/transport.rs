//! Messaging transport seam.

use postino_core::{ChatId, ContentKind, DeliveryInstruction, FileHandle, MessageRef, StoreLocator, UserId};
use postino_error::PostinoResult;

/// Result of a channel membership query, collapsed to the two outcomes the
/// access gate distinguishes. A query that fails for any other reason
/// surfaces as an `Err` and degrades to "not authorized" at the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipStatus {
    /// The user is a member of the chat
    Member,
    /// The user is explicitly not a member
    NotMember,
}

/// Trait for the platform messaging client.
///
/// The relay treats every method as a fallible remote call. Implementations
/// wrap whatever client library the embedding application uses; the relay
/// itself never copies content bytes, only forwards handles.
#[async_trait::async_trait]
pub trait MessagingTransport: Send + Sync {
    /// Copy a message into a durable chat and return the locator of the copy.
    async fn forward_to_chat(&self, message: MessageRef, chat: ChatId)
    -> PostinoResult<StoreLocator>;

    /// Send a document by handle.
    async fn send_document(
        &self,
        chat: ChatId,
        handle: &FileHandle,
        caption: &str,
    ) -> PostinoResult<MessageRef>;

    /// Send a video by handle.
    async fn send_video(
        &self,
        chat: ChatId,
        handle: &FileHandle,
        caption: &str,
    ) -> PostinoResult<MessageRef>;

    /// Send an audio track by handle.
    async fn send_audio(
        &self,
        chat: ChatId,
        handle: &FileHandle,
        caption: &str,
    ) -> PostinoResult<MessageRef>;

    /// Send a photo by handle.
    async fn send_photo(
        &self,
        chat: ChatId,
        handle: &FileHandle,
        caption: &str,
    ) -> PostinoResult<MessageRef>;

    /// Send an animation by handle.
    async fn send_animation(
        &self,
        chat: ChatId,
        handle: &FileHandle,
        caption: &str,
    ) -> PostinoResult<MessageRef>;

    /// Delete a message.
    async fn delete_message(&self, message: MessageRef) -> PostinoResult<()>;

    /// Query whether a user is a member of a chat.
    async fn get_membership(&self, chat: ChatId, user: UserId)
    -> PostinoResult<MembershipStatus>;
}

/// Dispatch a delivery instruction to the kind-matching send operation.
///
/// `Unknown` takes the document path, the most generic deliverable form.
pub async fn send_delivery<T>(
    transport: &T,
    chat: ChatId,
    instruction: &DeliveryInstruction,
    caption: &str,
) -> PostinoResult<MessageRef>
where
    T: MessagingTransport + ?Sized,
{
    let handle = &instruction.content_handle;
    match instruction.kind {
        ContentKind::Document | ContentKind::Unknown => {
            transport.send_document(chat, handle, caption).await
        }
        ContentKind::Video => transport.send_video(chat, handle, caption).await,
        ContentKind::Audio => transport.send_audio(chat, handle, caption).await,
        ContentKind::Photo => transport.send_photo(chat, handle, caption).await,
        ContentKind::Animation => transport.send_animation(chat, handle, caption).await,
    }
}
