//! Chat command recognition and reply construction.
//!
//! A message maps to a command by case-insensitive prefix matching; anything
//! without a known prefix is ignored entirely and gets no reply.

mod context;
mod params;
mod replies;


pub use context::{series_from_channel, team_from_guild};
pub use params::{resolve_params, ResolvedParams};
pub use replies::{build_replies, joke_embed};

/// Recognized chat commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Driver summary plots for a whole season or one week.
    Summary,
    /// Current championship standings plot.
    Standings,
    /// Weekly statistics plots (scores, racers, safety, laps).
    Statistics,
    /// A random dutch joke.
    DutchJoke,
}

/// Prefix table, evaluated in order; first match wins. Aliases share a kind.
const PREFIXES: &[(&str, Command)] = &[
    ("!martijn", Command::DutchJoke),
    ("!anne", Command::DutchJoke),
    ("!erwin", Command::DutchJoke),
    ("!dutch", Command::DutchJoke),
    ("!joke", Command::DutchJoke),
    ("!summary", Command::Summary),
    ("!drivers", Command::Summary),
    ("!standings", Command::Standings),
    ("!rankings", Command::Standings),
    ("!stats", Command::Statistics),
    ("!statistics", Command::Statistics),
];

impl Command {
    /// Classify message text by its prefix. Returns `None` for anything not
    /// addressed to the bot, which must produce no reply at all.
    pub fn parse(text: &str) -> Option<Self> {
        let lowered = text.to_lowercase();
        PREFIXES
            .iter()
            .find(|(prefix, _)| lowered.starts_with(prefix))
            .map(|&(_, command)| command)
    }
}
