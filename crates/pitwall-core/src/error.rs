use thiserror::Error;

/// Top-level error type for Pitwall.
#[derive(Debug, Error)]
pub enum PitwallError {
    /// Error from a messaging channel.
    #[error("channel error: {0}")]
    Channel(String),

    /// Channel/guild metadata lookup failed for a message.
    #[error("context lookup error: {0}")]
    Context(String),

    /// Series catalog fetch or parse failed.
    #[error("series catalog error: {0}")]
    Catalog(String),

    /// Joke fetch or parse failed.
    #[error("joke error: {0}")]
    Joke(String),

    /// Week argument that is not a number between 1 and 13.
    /// Carries the token as the user typed it.
    #[error("invalid week number: {0}")]
    InvalidWeek(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
