//! Gateway -- the event loop connecting channels to the command engine.
//!
//! Receives messages from all started channels through one mpsc fan-in,
//! spawns a task per message, and shuts everything down on ctrl-c.

mod pipeline;


use pitwall_core::{
    config::ApiConfig,
    message::{IncomingMessage, OutgoingMessage},
    traits::{Channel, JokeSource, SeriesSource},
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// The central gateway routing messages between channels and the command
/// engine.
pub struct Gateway {
    pub(super) channels: HashMap<String, Arc<dyn Channel>>,
    pub(super) series: Arc<dyn SeriesSource>,
    pub(super) jokes: Arc<dyn JokeSource>,
    /// Base URL of the visualizer, used for reply image links.
    pub(super) visualizer_url: String,
    pub(super) api_config: ApiConfig,
    pub(super) uptime: Instant,
}

impl Gateway {
    /// Create a new gateway.
    pub fn new(
        channels: HashMap<String, Arc<dyn Channel>>,
        series: Arc<dyn SeriesSource>,
        jokes: Arc<dyn JokeSource>,
        visualizer_url: String,
        api_config: ApiConfig,
    ) -> Self {
        Self {
            channels,
            series,
            jokes,
            visualizer_url,
            api_config,
            uptime: Instant::now(),
        }
    }

    /// Run the main event loop.
    pub async fn run(self: Arc<Self>) -> anyhow::Result<()> {
        info!(
            "Pitwall gateway running | channels: {}",
            self.channels.keys().cloned().collect::<Vec<_>>().join(", "),
        );

        let (tx, mut rx) = mpsc::channel::<IncomingMessage>(256);

        for (name, channel) in &self.channels {
            let mut channel_rx = channel
                .start()
                .await
                .map_err(|e| anyhow::anyhow!("failed to start channel {name}: {e}"))?;
            let tx = tx.clone();
            let channel_name = name.clone();

            tokio::spawn(async move {
                while let Some(msg) = channel_rx.recv().await {
                    if tx.send(msg).await.is_err() {
                        info!("gateway receiver dropped, stopping {channel_name} forwarder");
                        break;
                    }
                }
            });

            info!("Channel started: {name}");
        }

        drop(tx);

        // Spawn HTTP API server.
        let api_handle = if self.api_config.enabled {
            let api_cfg = self.api_config.clone();
            let api_channels = self.channels.clone();
            let api_uptime = self.uptime;
            Some(tokio::spawn(async move {
                crate::api::serve(api_cfg, api_channels, api_uptime).await;
            }))
        } else {
            None
        };

        // Main event loop with graceful shutdown.
        loop {
            tokio::select! {
                Some(incoming) = rx.recv() => {
                    let gw = self.clone();
                    tokio::spawn(async move {
                        gw.handle_message(incoming).await;
                    });
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        self.shutdown(&api_handle).await;
        Ok(())
    }

    /// Graceful shutdown: stop the API task and all channels.
    async fn shutdown(&self, api_handle: &Option<tokio::task::JoinHandle<()>>) {
        info!("Shutting down...");

        if let Some(h) = api_handle {
            h.abort();
        }

        for (name, channel) in &self.channels {
            if let Err(e) = channel.stop().await {
                warn!("failed to stop channel {name}: {e}");
            }
        }

        info!("Shutdown complete.");
    }

    /// Send a plain text reply back to the sender.
    pub(super) async fn send_text(&self, incoming: &IncomingMessage, text: &str) {
        let msg = OutgoingMessage {
            text: text.to_string(),
            embed: None,
            reply_target: incoming.reply_target.clone(),
        };

        if let Some(channel) = self.channels.get(&incoming.channel) {
            if let Err(e) = channel.send(msg).await {
                error!("failed to send message: {e}");
            }
        }
    }
}
