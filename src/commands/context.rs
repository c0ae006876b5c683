//! Context-derived defaults: racing series from the channel name, team from
//! the guild name.

use tracing::debug;

/// Channel-name substring hints mapped to series names, checked top to
/// bottom; the first hit wins.
const SERIES_HINTS: &[(&str, &str)] = &[
    ("adical", "Radical"),
    ("indy", "Indy Pro"),
    ("fr20", "Formula Renault 2.0"),
    ("fr35", "Formula 3.5"),
    ("f3", "F3 Championship"),
    ("ir04", "Formula iR-04"),
    ("1600", "Formula 1600"),
    ("sf23", "Super Formula"),
];

/// Guess the racing series from the channel name. Returns an empty string
/// when no hint matches.
pub fn series_from_channel(channel_name: &str) -> String {
    let lowered = channel_name.to_lowercase();
    for (hint, series) in SERIES_HINTS {
        if lowered.contains(hint) {
            debug!("found series name by channel lookup: {series}");
            return (*series).to_string();
        }
    }
    String::new()
}

/// Derive the team filter from the guild name, URL-escaped so it can be
/// dropped straight into a query string.
pub fn team_from_guild(guild_name: &str) -> String {
    urlencoding::encode(guild_name).into_owned()
}
