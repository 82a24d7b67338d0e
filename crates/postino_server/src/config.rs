//! Relay configuration.

use postino_core::{BotIdentity, ChatId, DEFAULT_PLATFORM_HOST};
use postino_error::{ConfigError, PostinoResult};
use postino_relay::EphemeralPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for the relay process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Bot username share links are minted under
    pub bot_username: String,
    /// Platform host used in share links
    #[serde(default = "default_platform_host")]
    pub platform_host: String,
    /// Chat the durable copies are forwarded into
    pub storage_chat_id: i64,
    /// Path of the persisted ledger file
    #[serde(default = "default_ledger_path")]
    pub ledger_path: PathBuf,
    /// Keepalive endpoint port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Access gate; absent means everyone is authorized
    #[serde(default)]
    pub gate: Option<GateConfig>,
    /// Ephemeral delivery policy; absent means deliveries persist
    #[serde(default)]
    pub ephemeral: Option<EphemeralConfig>,
}

/// Access gate configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Channel the requester must be a member of
    pub channel_id: i64,
}

/// Ephemeral delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EphemeralConfig {
    /// Seconds a delivered copy lives before the purge
    #[serde(default = "default_purge_delay_secs")]
    pub purge_delay_secs: u64,
}

fn default_platform_host() -> String {
    DEFAULT_PLATFORM_HOST.to_string()
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from("files.json")
}

fn default_port() -> u16 {
    8080
}

fn default_purge_delay_secs() -> u64 {
    EphemeralPolicy::DEFAULT_DELAY.as_secs()
}

impl RelayConfig {
    /// Load relay configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> PostinoResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }

    /// The bot identity share links derive from.
    pub fn identity(&self) -> BotIdentity {
        BotIdentity::with_host(&self.platform_host, &self.bot_username)
    }

    /// The storage chat durable copies are forwarded into.
    pub fn storage_chat(&self) -> ChatId {
        ChatId(self.storage_chat_id)
    }

    /// The gate channel, when a gate is configured.
    pub fn gate_channel(&self) -> Option<ChatId> {
        self.gate.as_ref().map(|gate| ChatId(gate.channel_id))
    }

    /// The ephemeral policy, when configured.
    pub fn ephemeral_policy(&self) -> Option<EphemeralPolicy> {
        self.ephemeral
            .as_ref()
            .map(|e| EphemeralPolicy::new(Duration::from_secs(e.purge_delay_secs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_applies_defaults() {
        let config: RelayConfig = toml::from_str(
            r#"
            bot_username = "FileToLinksBot"
            storage_chat_id = -1001
            "#,
        )
        .unwrap();

        assert_eq!(config.platform_host, "t.me");
        assert_eq!(config.ledger_path, PathBuf::from("files.json"));
        assert_eq!(config.port, 8080);
        assert!(config.gate.is_none());
        assert!(config.ephemeral.is_none());
        assert_eq!(
            config.identity().share_link(&"1".into()),
            "https://t.me/FileToLinksBot?start=1"
        );
    }

    #[test]
    fn gate_and_ephemeral_tables_are_optional_but_parsed() {
        let config: RelayConfig = toml::from_str(
            r#"
            bot_username = "FileToLinksBot"
            storage_chat_id = -1001

            [gate]
            channel_id = -2002

            [ephemeral]
            "#,
        )
        .unwrap();

        assert_eq!(config.gate_channel(), Some(ChatId(-2002)));
        let policy = config.ephemeral_policy().unwrap();
        assert_eq!(policy.delay, Duration::from_secs(120));
    }

    #[test]
    fn from_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postino.toml");
        std::fs::write(
            &path,
            "bot_username = \"relay_bot\"\nstorage_chat_id = -5\nport = 9000\n",
        )
        .unwrap();

        let config = RelayConfig::from_file(&path).unwrap();
        assert_eq!(config.bot_username, "relay_bot");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        assert!(RelayConfig::from_file("/nonexistent/postino.toml").is_err());
    }
}
