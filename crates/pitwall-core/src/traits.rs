use crate::{
    error::PitwallError,
    message::{IncomingMessage, MessageContext, OutgoingMessage},
    series::Series,
};
use async_trait::async_trait;

/// Messaging Channel trait -- the connection to a chat platform.
///
/// Every messaging platform (Discord today) implements this trait to
/// receive and send messages.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Start listening for incoming messages.
    /// Returns a receiver that yields incoming messages.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<IncomingMessage>, PitwallError>;

    /// Resolve the channel and guild names a message was sent in.
    async fn context(&self, message: &IncomingMessage) -> Result<MessageContext, PitwallError>;

    /// Send a response back through this channel.
    async fn send(&self, message: OutgoingMessage) -> Result<(), PitwallError>;

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), PitwallError>;

    /// Downcasting support for channel-specific calls.
    fn as_any(&self) -> &dyn std::any::Any;
}

/// Series catalog source -- the championships the visualizer tracks.
///
/// Fetched fresh for every command; nothing is cached between messages.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    async fn series(&self) -> Result<Vec<Series>, PitwallError>;
}

/// Joke source -- supplies one joke text per call.
#[async_trait]
pub trait JokeSource: Send + Sync {
    async fn joke(&self) -> Result<String, PitwallError>;
}
