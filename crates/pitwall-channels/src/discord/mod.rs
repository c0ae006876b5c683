//! Discord gateway channel.
//!
//! Connects through serenity's gateway client and surfaces message events
//! as platform-neutral `IncomingMessage` values.

mod events;
pub(crate) mod send;

#[cfg(test)]
mod tests;

use pitwall_core::config::DiscordConfig;
use serenity::all::{Http, ShardManager};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Discord channel backed by a serenity gateway session.
pub struct DiscordChannel {
    config: DiscordConfig,
    /// HTTP handle, populated once the client has been built.
    http: Arc<RwLock<Option<Arc<Http>>>>,
    /// Shard manager handle, for latency checks and shutdown.
    shards: Arc<RwLock<Option<Arc<ShardManager>>>>,
}

impl DiscordChannel {
    /// Create a new Discord channel from config.
    pub fn new(config: DiscordConfig) -> Self {
        Self {
            config,
            http: Arc::new(RwLock::new(None)),
            shards: Arc::new(RwLock::new(None)),
        }
    }

    pub(crate) async fn http(&self) -> Option<Arc<Http>> {
        self.http.read().await.clone()
    }

    /// Most recent gateway heartbeat latency, `None` until the first
    /// heartbeat has been acked.
    pub async fn heartbeat_latency(&self) -> Option<Duration> {
        let shards = self.shards.read().await.clone()?;
        let runners = shards.runners.lock().await;
        runners.values().find_map(|info| info.latency)
    }
}
