use serde::{Deserialize, Serialize};

/// Channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChannelConfig {
    pub discord: Option<DiscordConfig>,
}

/// Discord bot config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Bot token; when empty the `BOT_TOKEN` env var is used instead.
    #[serde(default)]
    pub bot_token: String,
}
