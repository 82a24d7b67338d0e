//! Top-level error wrapper types.

use crate::{ConfigError, LedgerError, TransportError};

/// Foundation error enum aggregating per-concern errors.
///
/// # Examples
///
/// ```
/// use postino_error::{PostinoError, LedgerError, LedgerErrorKind};
///
/// let ledger_err = LedgerError::new(LedgerErrorKind::FileWrite("disk full".to_string()));
/// let err: PostinoError = ledger_err.into();
/// assert!(format!("{}", err).contains("Ledger Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PostinoErrorKind {
    /// Messaging transport error
    #[from(TransportError)]
    Transport(TransportError),
    /// Reference ledger error
    #[from(LedgerError)]
    Ledger(LedgerError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Postino error with kind discrimination.
///
/// # Examples
///
/// ```
/// use postino_error::{PostinoResult, ConfigError};
///
/// fn might_fail() -> PostinoResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Postino Error: {}", _0)]
pub struct PostinoError(Box<PostinoErrorKind>);

impl PostinoError {
    /// Create a new error from a kind.
    pub fn new(kind: PostinoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PostinoErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to PostinoErrorKind
impl<T> From<T> for PostinoError
where
    T: Into<PostinoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Postino operations.
///
/// # Examples
///
/// ```
/// use postino_error::{PostinoResult, TransportError, TransportErrorKind};
///
/// fn deliver() -> PostinoResult<()> {
///     Err(TransportError::new(TransportErrorKind::Send("timeout".to_string())))?
/// }
/// ```
pub type PostinoResult<T> = std::result::Result<T, PostinoError>;
