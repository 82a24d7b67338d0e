//! Access gate predicate evaluated before redemption.

use crate::{MembershipStatus, MessagingTransport};
use postino_core::{ChatId, UserId};
use std::sync::Arc;
use tracing::{debug, warn};

/// Pluggable predicate evaluated before a redemption lookup.
///
/// Wiring in [`AlwaysAuthorized`] is the "gate absent" mode; either way the
/// redemption resolver's control flow is unchanged.
#[async_trait::async_trait]
pub trait AccessGate: Send + Sync {
    /// Whether the requester may redeem tokens.
    async fn is_authorized(&self, user: UserId) -> bool;
}

/// Gate that authorizes everyone.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysAuthorized;

#[async_trait::async_trait]
impl AccessGate for AlwaysAuthorized {
    async fn is_authorized(&self, _user: UserId) -> bool {
        true
    }
}

/// Gate requiring membership of a channel, checked through the transport.
///
/// Both "explicitly not a member" and "check failed for another reason"
/// degrade to not authorized; the gate never fails open.
pub struct MembershipGate<T: ?Sized> {
    transport: Arc<T>,
    channel: ChatId,
}

impl<T: ?Sized> MembershipGate<T> {
    /// Create a gate requiring membership of `channel`.
    pub fn new(transport: Arc<T>, channel: ChatId) -> Self {
        Self { transport, channel }
    }
}

#[async_trait::async_trait]
impl<T> AccessGate for MembershipGate<T>
where
    T: MessagingTransport + ?Sized,
{
    #[tracing::instrument(skip(self), fields(channel = %self.channel, user = %user))]
    async fn is_authorized(&self, user: UserId) -> bool {
        match self.transport.get_membership(self.channel, user).await {
            Ok(MembershipStatus::Member) => true,
            Ok(MembershipStatus::NotMember) => {
                debug!("Requester is not a channel member");
                false
            }
            Err(e) => {
                warn!(error = %e, "Membership check failed, denying access");
                false
            }
        }
    }
}
