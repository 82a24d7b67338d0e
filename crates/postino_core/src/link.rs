//! Share link derivation.

use crate::ReferenceToken;
use serde::{Deserialize, Serialize};

/// Default platform host for share links.
pub const DEFAULT_PLATFORM_HOST: &str = "t.me";

/// The bot's identity on the platform, from which share links derive.
///
/// A link is never stored; it is recomputable at any time from the token
/// alone given this identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotIdentity {
    /// Platform host, e.g. `t.me`
    pub platform_host: String,
    /// Bot username on the platform
    pub bot_username: String,
}

impl BotIdentity {
    /// Create an identity with the default platform host.
    pub fn new(bot_username: impl Into<String>) -> Self {
        Self {
            platform_host: DEFAULT_PLATFORM_HOST.to_string(),
            bot_username: bot_username.into(),
        }
    }

    /// Create an identity with an explicit platform host.
    pub fn with_host(platform_host: impl Into<String>, bot_username: impl Into<String>) -> Self {
        Self {
            platform_host: platform_host.into(),
            bot_username: bot_username.into(),
        }
    }

    /// Derive the redeemable share link for a token.
    ///
    /// Shape: `https://<platform_host>/<bot_username>?start=<token>`.
    pub fn share_link(&self, token: &ReferenceToken) -> String {
        format!(
            "https://{}/{}?start={}",
            self.platform_host, self.bot_username, token
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_has_fixed_shape() {
        let identity = BotIdentity::new("FileToLinksBot");
        let link = identity.share_link(&ReferenceToken("8842".to_string()));
        assert_eq!(link, "https://t.me/FileToLinksBot?start=8842");
    }

    #[test]
    fn link_is_deterministic() {
        let identity = BotIdentity::with_host("t.me", "relay_bot");
        let token = ReferenceToken("17".to_string());
        assert_eq!(identity.share_link(&token), identity.share_link(&token));
    }
}
