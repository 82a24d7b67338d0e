//! Reference ledger error types.

/// Kinds of ledger errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LedgerErrorKind {
    /// Failed to create the ledger directory
    #[display("Failed to create ledger directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to read the ledger file
    #[display("Failed to read ledger file: {}", _0)]
    FileRead(String),
    /// Failed to write the ledger file
    #[display("Failed to write ledger file: {}", _0)]
    FileWrite(String),
    /// Ledger file contents could not be parsed
    #[display("Failed to parse ledger file: {}", _0)]
    Parse(String),
    /// Ledger contents could not be serialized
    #[display("Failed to serialize ledger: {}", _0)]
    Serialize(String),
}

/// Ledger error with location tracking.
///
/// # Examples
///
/// ```
/// use postino_error::{LedgerError, LedgerErrorKind};
///
/// let err = LedgerError::new(LedgerErrorKind::FileWrite("disk full".to_string()));
/// assert!(format!("{}", err).contains("write ledger file"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Ledger Error: {} at line {} in {}", kind, line, file)]
pub struct LedgerError {
    /// The kind of error that occurred
    pub kind: LedgerErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl LedgerError {
    /// Create a new ledger error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LedgerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
