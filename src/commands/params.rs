//! Explicit parameter resolution -- merges message tokens with context
//! guesses and validates the week number.

use super::Command;
use pitwall_core::error::PitwallError;

/// Fully resolved lookup parameters for one command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedParams {
    /// URL-escaped team filter, passed through to image URLs.
    pub team_filter: String,
    /// Week number as a digit string, empty when unset.
    pub week_filter: String,
    /// Free-text series name filter; empty matches every series.
    pub series_filter: String,
}

/// Merge explicit message tokens with the channel-derived series guess.
///
/// Tokens are split on single spaces with the command word first. Without a
/// series guess, `!cmd SERIES` and `!cmd SERIES WEEK` are accepted. With a
/// guess the series is already known, so a single argument is a week number
/// -- except for standings, which take no week and keep the guess. Three
/// tokens always override both series and week.
pub fn resolve_params(
    text: &str,
    command: Command,
    series_guess: &str,
    team_filter: String,
) -> Result<ResolvedParams, PitwallError> {
    let tokens: Vec<&str> = text.split(' ').collect();

    let mut series_filter = series_guess.to_string();
    let mut week_token = "";

    if series_guess.is_empty() {
        if tokens.len() == 2 {
            series_filter = tokens[1].to_string();
        }
        if tokens.len() == 3 {
            series_filter = tokens[1].to_string();
            week_token = tokens[2];
        }
    } else {
        if tokens.len() == 2 && command != Command::Standings {
            week_token = tokens[1];
        }
        if tokens.len() == 3 {
            series_filter = tokens[1].to_string();
            week_token = tokens[2];
        }
    }

    let week_filter = if week_token.is_empty() {
        String::new()
    } else {
        sanitize_week(week_token)?
    };

    Ok(ResolvedParams {
        team_filter,
        week_filter,
        series_filter,
    })
}

/// Strip non-digits from a week token and bounds-check the remainder.
/// Valid weeks keep the stripped digit string; the error carries the token
/// exactly as the user typed it.
fn sanitize_week(token: &str) -> Result<String, PitwallError> {
    let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.parse::<i64>() {
        Ok(week) if (1..=13).contains(&week) => Ok(digits),
        _ => Err(PitwallError::InvalidWeek(token.to_string())),
    }
}
