//! Error types for the Postino relay.
//!
//! This crate provides the foundation error types used throughout the Postino
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use postino_error::{PostinoResult, TransportError, TransportErrorKind};
//!
//! fn forward_item() -> PostinoResult<String> {
//!     Err(TransportError::new(TransportErrorKind::Forward(
//!         "storage chat unreachable".to_string(),
//!     )))?
//! }
//!
//! match forward_item() {
//!     Ok(locator) => println!("Forwarded: {}", locator),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod ledger;
mod transport;

pub use config::ConfigError;
pub use error::{PostinoError, PostinoErrorKind, PostinoResult};
pub use ledger::{LedgerError, LedgerErrorKind};
pub use transport::{TransportError, TransportErrorKind};
