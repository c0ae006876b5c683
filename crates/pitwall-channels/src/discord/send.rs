//! Outbound message delivery.

use super::DiscordChannel;
use pitwall_core::{
    error::PitwallError,
    message::{Embed, OutgoingMessage},
};
use serenity::all::{ChannelId, CreateEmbed, CreateMessage};
use tracing::debug;

fn build_embed(embed: &Embed) -> CreateEmbed {
    let mut builder = CreateEmbed::new();
    if let Some(ref title) = embed.title {
        builder = builder.title(title);
    }
    if let Some(ref description) = embed.description {
        builder = builder.description(description);
    }
    if let Some(ref image_url) = embed.image_url {
        builder = builder.image(image_url);
    }
    builder
}

impl DiscordChannel {
    pub(crate) async fn send_to_channel(
        &self,
        channel_id: ChannelId,
        message: &OutgoingMessage,
    ) -> Result<(), PitwallError> {
        let http = self
            .http()
            .await
            .ok_or_else(|| PitwallError::Channel("discord session not started".into()))?;

        let builder = match message.embed {
            Some(ref embed) => CreateMessage::new().embed(build_embed(embed)),
            None => CreateMessage::new().content(&message.text),
        };

        debug!("discord: sending to channel {channel_id}");

        channel_id
            .send_message(&*http, builder)
            .await
            .map_err(|e| PitwallError::Channel(format!("discord send failed: {e}")))?;

        Ok(())
    }
}
