//! Gateway event handling and Channel trait implementation.

use super::DiscordChannel;
use async_trait::async_trait;
use pitwall_core::{
    error::PitwallError,
    message::{IncomingMessage, MessageContext, OutgoingMessage},
    traits::Channel,
};
use serenity::all::{ChannelId, Client, Context, EventHandler, GatewayIntents, Message, Ready};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use uuid::Uuid;

struct Handler {
    tx: mpsc::Sender<IncomingMessage>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("Discord connected as {}", ready.user.name);
    }

    async fn message(&self, ctx: Context, msg: Message) {
        // Ignore the bot's own messages.
        if msg.author.id == ctx.cache.current_user().id {
            return;
        }

        let incoming = IncomingMessage {
            id: Uuid::new_v4(),
            channel: "discord".to_string(),
            sender_id: msg.author.id.to_string(),
            sender_name: Some(msg.author.name.clone()),
            text: msg.content.clone(),
            timestamp: chrono::Utc::now(),
            reply_target: Some(msg.channel_id.to_string()),
        };

        if self.tx.send(incoming).await.is_err() {
            warn!("discord receiver dropped, ignoring message");
        }
    }
}

#[async_trait]
impl Channel for DiscordChannel {
    fn name(&self) -> &str {
        "discord"
    }

    async fn start(&self) -> Result<mpsc::Receiver<IncomingMessage>, PitwallError> {
        let (tx, rx) = mpsc::channel(64);

        let intents = GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

        let mut client = Client::builder(&self.config.bot_token, intents)
            .event_handler(Handler { tx })
            .await
            .map_err(|e| PitwallError::Channel(format!("discord client build failed: {e}")))?;

        *self.http.write().await = Some(client.http.clone());
        *self.shards.write().await = Some(client.shard_manager.clone());

        info!("Discord channel connecting...");

        tokio::spawn(async move {
            if let Err(e) = client.start().await {
                error!("discord client error: {e}");
            }
        });

        Ok(rx)
    }

    async fn context(&self, message: &IncomingMessage) -> Result<MessageContext, PitwallError> {
        let http = self
            .http()
            .await
            .ok_or_else(|| PitwallError::Context("discord session not started".into()))?;

        let target = message
            .reply_target
            .as_deref()
            .ok_or_else(|| PitwallError::Context("no reply_target on message".into()))?;

        let channel_id: u64 = target.parse().map_err(|e| {
            PitwallError::Context(format!("invalid discord channel id '{target}': {e}"))
        })?;

        let channel = ChannelId::new(channel_id)
            .to_channel(&*http)
            .await
            .map_err(|e| PitwallError::Context(format!("channel lookup failed: {e}")))?;

        let guild_channel = channel
            .guild()
            .ok_or_else(|| PitwallError::Context("message outside a guild channel".into()))?;

        let guild = http
            .get_guild(guild_channel.guild_id)
            .await
            .map_err(|e| PitwallError::Context(format!("guild lookup failed: {e}")))?;

        Ok(MessageContext {
            channel_name: guild_channel.name,
            guild_name: guild.name,
        })
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), PitwallError> {
        let target = message
            .reply_target
            .as_deref()
            .ok_or_else(|| PitwallError::Channel("no reply_target on outgoing message".into()))?;

        let channel_id: u64 = target.parse().map_err(|e| {
            PitwallError::Channel(format!("invalid discord channel id '{target}': {e}"))
        })?;

        self.send_to_channel(ChannelId::new(channel_id), &message)
            .await
    }

    async fn stop(&self) -> Result<(), PitwallError> {
        if let Some(shards) = self.shards.read().await.clone() {
            shards.shutdown_all().await;
        }
        info!("Discord channel stopped");
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
