//! Message processing pipeline -- classification through reply delivery.

use super::Gateway;
use crate::commands::{self, Command};
use pitwall_core::error::PitwallError;
use pitwall_core::message::{Embed, IncomingMessage, OutgoingMessage};
use pitwall_core::traits::Channel;
use std::sync::Arc;
use tracing::{debug, error, info};

impl Gateway {
    /// Process one incoming message through the full pipeline. Everything
    /// past classification fails terminally for this message and is logged
    /// only; the single user-visible error is an invalid week number.
    pub(super) async fn handle_message(&self, incoming: IncomingMessage) {
        let Some(command) = Command::parse(&incoming.text) else {
            return;
        };

        info!(
            "[{}] {} says: {}",
            incoming.channel,
            incoming.sender_name.as_deref().unwrap_or("unknown"),
            incoming.text
        );

        // Jokes skip context resolution and the catalog entirely.
        if command == Command::DutchJoke {
            self.handle_joke(&incoming).await;
            return;
        }

        let Some(channel) = self.channels.get(&incoming.channel) else {
            error!("no channel registered for {}", incoming.channel);
            return;
        };

        let context = match channel.context(&incoming).await {
            Ok(context) => context,
            Err(e) => {
                error!("error getting message context: {e}");
                return;
            }
        };

        let series_guess = commands::series_from_channel(&context.channel_name);
        let team_filter = commands::team_from_guild(&context.guild_name);

        let params =
            match commands::resolve_params(&incoming.text, command, &series_guess, team_filter) {
                Ok(params) => params,
                Err(PitwallError::InvalidWeek(token)) => {
                    self.send_text(&incoming, &format!("Invalid week number given: {token}"))
                        .await;
                    return;
                }
                Err(e) => {
                    error!("error resolving parameters: {e}");
                    return;
                }
            };

        let catalog = match self.series.series().await {
            Ok(catalog) => catalog,
            Err(e) => {
                error!("error querying series data: {e}");
                return;
            }
        };

        let embeds = commands::build_replies(command, &self.visualizer_url, &params, &catalog);
        debug!(
            "{:?} command produced {} replies for {:?}",
            command,
            embeds.len(),
            params
        );

        self.send_embeds(channel, &incoming, embeds).await;
    }

    /// Fetch one joke and post it. Failures and empty jokes stay silent.
    async fn handle_joke(&self, incoming: &IncomingMessage) {
        let joke = match self.jokes.joke().await {
            Ok(joke) => joke,
            Err(e) => {
                error!("error retrieving joke: {e}");
                return;
            }
        };
        if joke.is_empty() {
            return;
        }

        let Some(channel) = self.channels.get(&incoming.channel) else {
            error!("no channel registered for {}", incoming.channel);
            return;
        };

        let msg = OutgoingMessage {
            text: String::new(),
            embed: Some(commands::joke_embed(&joke)),
            reply_target: incoming.reply_target.clone(),
        };
        if let Err(e) = channel.send(msg).await {
            error!("error sending message: {e}");
        }
    }

    /// Send embeds in order, aborting on the first failure.
    async fn send_embeds(
        &self,
        channel: &Arc<dyn Channel>,
        incoming: &IncomingMessage,
        embeds: Vec<Embed>,
    ) {
        for embed in embeds {
            let msg = OutgoingMessage {
                text: String::new(),
                embed: Some(embed),
                reply_target: incoming.reply_target.clone(),
            };
            if let Err(e) = channel.send(msg).await {
                error!("error sending message: {e}");
                return;
            }
        }
    }
}
