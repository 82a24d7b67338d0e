//! Shared test doubles for the relay tests.

#![allow(dead_code)]

use postino_core::{
    ChatId, ContentDescriptor, FileHandle, InboundItem, InboundItemBuilder, MediaPayloadBuilder,
    MessageRef, PhotoVariant, ReferenceToken, StoreLocator, UserId,
};
use postino_error::{
    LedgerError, LedgerErrorKind, PostinoResult, TransportError, TransportErrorKind,
};
use postino_ledger::{MemoryLedger, ReferenceLedger};
use postino_relay::{MembershipStatus, MessagingTransport};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Storage chat used by the test relay.
pub const STORAGE_CHAT: ChatId = ChatId(-1001);

/// Chat the test requester talks to the bot in.
pub const PRIVATE_CHAT: ChatId = ChatId(555);

/// The test requester.
pub const REQUESTER: UserId = UserId(42);

/// How membership queries behave on the mock transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipBehavior {
    /// Report the user as a member
    Member,
    /// Report the user as explicitly not a member
    NotMember,
    /// Fail the query
    Failing,
}

/// A send recorded by the mock transport.
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub kind: &'static str,
    pub chat: ChatId,
    pub handle: FileHandle,
    pub caption: String,
    pub message: MessageRef,
}

/// Mock messaging transport recording every call.
pub struct MockTransport {
    fail_forward: bool,
    fail_send: bool,
    membership: MembershipBehavior,
    next_id: AtomicI64,
    pub forwarded: Mutex<Vec<(MessageRef, ChatId)>>,
    pub sent: Mutex<Vec<SentMessage>>,
    pub deleted: Mutex<Vec<MessageRef>>,
    pub membership_calls: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            fail_forward: false,
            fail_send: false,
            membership: MembershipBehavior::Member,
            next_id: AtomicI64::new(8842),
            forwarded: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            membership_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_forward_failure(mut self) -> Self {
        self.fail_forward = true;
        self
    }

    pub fn with_send_failure(mut self) -> Self {
        self.fail_send = true;
        self
    }

    pub fn with_membership(mut self, behavior: MembershipBehavior) -> Self {
        self.membership = behavior;
        self
    }

    /// Kinds sent so far, in order.
    pub fn sent_kinds(&self) -> Vec<&'static str> {
        self.sent.lock().unwrap().iter().map(|s| s.kind).collect()
    }

    fn next_message(&self, chat: ChatId) -> MessageRef {
        MessageRef::new(chat, self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    fn record_send(
        &self,
        kind: &'static str,
        chat: ChatId,
        handle: &FileHandle,
        caption: &str,
    ) -> PostinoResult<MessageRef> {
        if self.fail_send {
            return Err(TransportError::new(TransportErrorKind::Send(
                "mock send failure".to_string(),
            )))?;
        }
        let message = self.next_message(chat);
        self.sent.lock().unwrap().push(SentMessage {
            kind,
            chat,
            handle: handle.clone(),
            caption: caption.to_string(),
            message,
        });
        Ok(message)
    }
}

#[async_trait::async_trait]
impl MessagingTransport for MockTransport {
    async fn forward_to_chat(
        &self,
        message: MessageRef,
        chat: ChatId,
    ) -> PostinoResult<StoreLocator> {
        if self.fail_forward {
            return Err(TransportError::new(TransportErrorKind::Forward(
                "mock forward failure".to_string(),
            )))?;
        }
        self.forwarded.lock().unwrap().push((message, chat));
        let locator = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(StoreLocator(locator.to_string()))
    }

    async fn send_document(
        &self,
        chat: ChatId,
        handle: &FileHandle,
        caption: &str,
    ) -> PostinoResult<MessageRef> {
        self.record_send("document", chat, handle, caption)
    }

    async fn send_video(
        &self,
        chat: ChatId,
        handle: &FileHandle,
        caption: &str,
    ) -> PostinoResult<MessageRef> {
        self.record_send("video", chat, handle, caption)
    }

    async fn send_audio(
        &self,
        chat: ChatId,
        handle: &FileHandle,
        caption: &str,
    ) -> PostinoResult<MessageRef> {
        self.record_send("audio", chat, handle, caption)
    }

    async fn send_photo(
        &self,
        chat: ChatId,
        handle: &FileHandle,
        caption: &str,
    ) -> PostinoResult<MessageRef> {
        self.record_send("photo", chat, handle, caption)
    }

    async fn send_animation(
        &self,
        chat: ChatId,
        handle: &FileHandle,
        caption: &str,
    ) -> PostinoResult<MessageRef> {
        self.record_send("animation", chat, handle, caption)
    }

    async fn delete_message(&self, message: MessageRef) -> PostinoResult<()> {
        self.deleted.lock().unwrap().push(message);
        Ok(())
    }

    async fn get_membership(
        &self,
        _chat: ChatId,
        _user: UserId,
    ) -> PostinoResult<MembershipStatus> {
        self.membership_calls.fetch_add(1, Ordering::SeqCst);
        match self.membership {
            MembershipBehavior::Member => Ok(MembershipStatus::Member),
            MembershipBehavior::NotMember => Ok(MembershipStatus::NotMember),
            MembershipBehavior::Failing => Err(TransportError::new(
                TransportErrorKind::Membership("mock membership failure".to_string()),
            ))?,
        }
    }
}

/// Ledger wrapper counting reads, for gate short-circuit assertions.
#[derive(Default)]
pub struct CountingLedger {
    inner: MemoryLedger,
    pub gets: AtomicUsize,
}

impl CountingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ReferenceLedger for CountingLedger {
    async fn get(&self, token: &ReferenceToken) -> Option<ContentDescriptor> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(token).await
    }

    async fn put(
        &self,
        token: ReferenceToken,
        descriptor: ContentDescriptor,
    ) -> PostinoResult<()> {
        self.inner.put(token, descriptor).await
    }

    async fn flush(&self) -> PostinoResult<()> {
        self.inner.flush().await
    }

    async fn len(&self) -> usize {
        self.inner.len().await
    }
}

/// Ledger whose flush always fails, for persistence-failure tests.
#[derive(Default)]
pub struct FlushFailingLedger {
    inner: MemoryLedger,
}

impl FlushFailingLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ReferenceLedger for FlushFailingLedger {
    async fn get(&self, token: &ReferenceToken) -> Option<ContentDescriptor> {
        self.inner.get(token).await
    }

    async fn put(
        &self,
        token: ReferenceToken,
        descriptor: ContentDescriptor,
    ) -> PostinoResult<()> {
        self.inner.put(token, descriptor).await
    }

    async fn flush(&self) -> PostinoResult<()> {
        Err(LedgerError::new(LedgerErrorKind::FileWrite(
            "mock flush failure".to_string(),
        )))?
    }

    async fn len(&self) -> usize {
        self.inner.len().await
    }
}

/// A document item named `report.pdf`, 2 MiB.
pub fn document_item() -> InboundItem {
    InboundItemBuilder::default()
        .document(Some(
            MediaPayloadBuilder::default()
                .handle(FileHandle("BQACAgQAAx".to_string()))
                .file_name(Some("report.pdf".to_string()))
                .size_bytes(Some(2_097_152))
                .build()
                .unwrap(),
        ))
        .build()
        .unwrap()
}

/// An unnamed photo item with three quality variants.
pub fn photo_item() -> InboundItem {
    InboundItemBuilder::default()
        .photo(vec![
            PhotoVariant::new(FileHandle("thumb".to_string()), 1),
            PhotoVariant::new(FileHandle("medium".to_string()), 2),
            PhotoVariant::new(FileHandle("full".to_string()), 3),
        ])
        .build()
        .unwrap()
}

/// An inbound message in the requester's private chat.
pub fn origin_message(message_id: i64) -> MessageRef {
    MessageRef::new(PRIVATE_CHAT, message_id)
}
