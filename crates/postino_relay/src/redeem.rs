//! Redemption resolver: token to delivery instruction.

use crate::AccessGate;
use postino_core::{DeliveryInstruction, ReferenceToken, UserId};
use postino_ledger::ReferenceLedger;
use tracing::debug;

/// Outcome of a redemption request.
///
/// `NotFound` and `Denied` are expected, user-facing outcomes, not errors;
/// only a failed delivery send surfaces as an `Err` further up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedemptionOutcome {
    /// Token resolved; deliver this
    Delivery(DeliveryInstruction),
    /// Token absent from the ledger (or malformed, which is
    /// indistinguishable at this boundary)
    NotFound,
    /// The access gate denied the requester; the ledger was not consulted
    Denied,
}

/// Resolve a token into a delivery instruction.
///
/// The gate is evaluated first: a denial short-circuits with zero ledger
/// reads. A ledger miss is an outcome, never an error, and has no side
/// effects. On a hit, dispatch is an exhaustive match over the descriptor's
/// kind, folded into the instruction (`Unknown` deliveries take the document
/// path at send time).
#[tracing::instrument(skip(ledger, gate), fields(token = %token, requester = %requester))]
pub async fn redeem(
    ledger: &dyn ReferenceLedger,
    gate: &dyn AccessGate,
    token: &ReferenceToken,
    requester: UserId,
) -> RedemptionOutcome {
    if !gate.is_authorized(requester).await {
        debug!("Redemption denied by access gate");
        return RedemptionOutcome::Denied;
    }

    match ledger.get(token).await {
        Some(descriptor) => {
            debug!(kind = %descriptor.kind, "Resolved token");
            RedemptionOutcome::Delivery(DeliveryInstruction::from(&descriptor))
        }
        None => {
            debug!("Token not found");
            RedemptionOutcome::NotFound
        }
    }
}
