//! Messaging transport error types.

/// Kinds of messaging transport errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TransportErrorKind {
    /// Failed to forward a message into the storage chat
    #[display("Failed to forward to storage chat: {}", _0)]
    Forward(String),
    /// Failed to send a delivery to the requester
    #[display("Failed to send delivery: {}", _0)]
    Send(String),
    /// Failed to delete a message
    #[display("Failed to delete message: {}", _0)]
    Delete(String),
    /// Failed to query channel membership
    #[display("Failed to query membership: {}", _0)]
    Membership(String),
    /// Inbound item carries no supported content payload
    #[display("Unsupported content: {}", _0)]
    Unsupported(String),
}

/// Messaging transport error with location tracking.
///
/// # Examples
///
/// ```
/// use postino_error::{TransportError, TransportErrorKind};
///
/// let err = TransportError::new(TransportErrorKind::Send("flood wait".to_string()));
/// assert!(format!("{}", err).contains("send delivery"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", kind, line, file)]
pub struct TransportError {
    /// The kind of error that occurred
    pub kind: TransportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TransportError {
    /// Create a new transport error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
