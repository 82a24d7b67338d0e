//! Ingestion and redemption resolvers for the Postino relay.
//!
//! This crate turns inbound content into minted reference tokens and resolves
//! tokens back into typed deliveries:
//!
//! - [`MessagingTransport`]: the seam to the platform client. Every remote
//!   call is fallible; the relay never touches bytes itself.
//! - [`ingest`]: forward the item into the storage chat, derive a descriptor,
//!   write it through the ledger, mint the share link. All-or-nothing.
//! - [`redeem`]: gate check, ledger lookup, kind dispatch into a
//!   [`DeliveryInstruction`](postino_core::DeliveryInstruction).
//! - [`AccessGate`]: pluggable redemption predicate; never fails open.
//! - [`EphemeralPolicy`] / [`schedule_purge`]: deferred, cancellable cleanup
//!   of a delivered copy.
//! - [`Relay`]: the service wiring all of the above behind two entry points,
//!   [`Relay::handle_upload`] and [`Relay::handle_redeem`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod gate;
mod ingest;
mod purge;
mod redeem;
mod relay;
mod transport;

pub use command::start_argument;
pub use gate::{AccessGate, AlwaysAuthorized, MembershipGate};
pub use ingest::{ingest, MintedReference};
pub use purge::{schedule_purge, EphemeralPolicy, PurgeHandle};
pub use redeem::{redeem, RedemptionOutcome};
pub use relay::{
    Relay, RedeemReply, UploadReceipt, ACCESS_DENIED_MESSAGE, NOT_FOUND_MESSAGE, WELCOME_MESSAGE,
};
pub use transport::{send_delivery, MembershipStatus, MessagingTransport};
