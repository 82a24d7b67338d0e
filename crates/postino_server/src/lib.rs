//! Configuration and keepalive server for the Postino relay.
//!
//! This crate holds the glue around the core: TOML configuration loading,
//! and the trivial always-200 keepalive endpoint the hosting environment
//! pings to consider the process alive. The messaging client itself is an
//! external collaborator wired in by the embedding application through the
//! [`MessagingTransport`](postino_relay::MessagingTransport) trait.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod health;

pub use config::{EphemeralConfig, GateConfig, RelayConfig};
pub use health::keepalive_router;
