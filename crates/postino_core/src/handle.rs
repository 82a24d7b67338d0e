//! Identifier and handle newtypes.

use serde::{Deserialize, Serialize};

/// Opaque platform content handle.
///
/// Sufficient to re-deliver the content through the transport without
/// re-uploading any bytes.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub struct FileHandle(pub String);

/// Platform chat identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct ChatId(pub i64);

/// Platform user identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct UserId(pub i64);

/// An addressable message on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageRef {
    /// Chat the message lives in
    pub chat: ChatId,
    /// Message identifier within the chat
    pub message_id: i64,
}

impl MessageRef {
    /// Create a message reference.
    pub fn new(chat: ChatId, message_id: i64) -> Self {
        Self { chat, message_id }
    }
}

/// Locator of the durable copy in the content store.
///
/// Obtained by forwarding an inbound message into the storage chat; opaque
/// to everything except the transport that produced it.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub struct StoreLocator(pub String);

/// Opaque reference token, stable for the descriptor's lifetime.
///
/// Derived from the store locator of the forwarded copy, which guarantees
/// uniqueness without a separate id generator and keeps the token free of
/// characters that would need escaping in a URL query value.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub struct ReferenceToken(pub String);

impl ReferenceToken {
    /// Access the token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<StoreLocator> for ReferenceToken {
    fn from(locator: StoreLocator) -> Self {
        Self(locator.0)
    }
}

impl From<&str> for ReferenceToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
