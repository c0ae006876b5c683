use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An incoming message from a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub id: Uuid,
    /// Channel name (e.g. "discord").
    pub channel: String,
    /// Platform-specific user ID.
    pub sender_id: String,
    /// Human-readable sender name.
    pub sender_name: Option<String>,
    /// Message text content.
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Platform-specific target for routing the response (e.g. Discord channel id).
    #[serde(default)]
    pub reply_target: Option<String>,
}

/// Channel and guild names surrounding a message, resolved on demand
/// through the channel that delivered it.
#[derive(Debug, Clone, Default)]
pub struct MessageContext {
    pub channel_name: String,
    pub guild_name: String,
}

/// An outgoing message to send back through a channel.
///
/// Carries either plain text or a single rich embed; when `embed` is set
/// the channel ignores `text`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub text: String,
    pub embed: Option<Embed>,
    /// Platform-specific target for routing (e.g. Discord channel id).
    #[serde(default)]
    pub reply_target: Option<String>,
}

/// A rich reply payload, usually referencing an externally rendered image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Embed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}
