//! Reply construction -- one embed sequence builder per command kind.
//!
//! Builders iterate the series catalog in order and emit embeds for every
//! series whose name matches the filter. Image URLs point at the visualizer
//! service, which renders the plots on demand.

use super::{Command, ResolvedParams};
use pitwall_core::{message::Embed, series::Series};

/// The four weekly statistics plots, in posting order.
const STAT_PLOTS: &[&str] = &["scores", "racers", "safety", "laps"];

/// Case-insensitive substring match; an empty filter matches everything.
fn matches_filter(name: &str, filter: &str) -> bool {
    filter.is_empty() || name.to_lowercase().contains(&filter.to_lowercase())
}

/// Cache-bust value: current unix time in whole seconds. Computed freshly
/// per URL so repeated identical requests still defeat image caches.
fn cache_bust() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Fixed-title embed wrapping a fetched joke.
pub fn joke_embed(joke: &str) -> Embed {
    Embed {
        title: Some("Let's hear a random dutch joke".to_string()),
        description: Some(joke.to_string()),
        image_url: None,
    }
}

/// Build the ordered embed sequence for a command against the series
/// catalog. Jokes carry no catalog-based replies.
pub fn build_replies(
    command: Command,
    base_url: &str,
    params: &ResolvedParams,
    catalog: &[Series],
) -> Vec<Embed> {
    match command {
        Command::Summary => summary_embeds(base_url, params, catalog),
        Command::Standings => standings_embeds(base_url, params, catalog),
        Command::Statistics => statistics_embeds(base_url, params, catalog),
        Command::DutchJoke => Vec::new(),
    }
}

fn summary_embeds(base_url: &str, params: &ResolvedParams, catalog: &[Series]) -> Vec<Embed> {
    let mut embeds = Vec::new();
    for series in catalog {
        if !matches_filter(&series.name, &params.series_filter) {
            continue;
        }
        if params.week_filter.is_empty() {
            embeds.push(Embed {
                title: Some(format!("{} - Driver Summary", series.current_season)),
                description: Some(format!(
                    "Shows driver summary data for the whole {} season",
                    series.name
                )),
                image_url: Some(format!(
                    "{}/season/{}/summary.png?team={}&cb={}",
                    base_url,
                    series.current_season_id,
                    params.team_filter,
                    cache_bust()
                )),
            });
        } else {
            embeds.push(Embed {
                title: Some(format!(
                    "{} - Driver Summary - Week {}",
                    series.current_season, params.week_filter
                )),
                description: Some(format!(
                    "Shows driver summary data for week {} of the {} season",
                    params.week_filter, series.name
                )),
                image_url: Some(format!(
                    "{}/season/{}/week/{}/summary.png?team={}&cb={}",
                    base_url,
                    series.current_season_id,
                    params.week_filter,
                    params.team_filter,
                    cache_bust()
                )),
            });
        }
    }
    embeds
}

fn standings_embeds(base_url: &str, params: &ResolvedParams, catalog: &[Series]) -> Vec<Embed> {
    let mut embeds = Vec::new();
    for series in catalog {
        if !matches_filter(&series.name, &params.series_filter) {
            continue;
        }
        embeds.push(Embed {
            title: Some(format!("{} - Standings", series.name)),
            description: Some(format!(
                "Shows current standings for the {}",
                series.current_season
            )),
            image_url: Some(format!(
                "{}/season/{}/standings.png?team={}&cb={}",
                base_url,
                series.current_season_id,
                params.team_filter,
                cache_bust()
            )),
        });
    }
    embeds
}

fn statistics_embeds(base_url: &str, params: &ResolvedParams, catalog: &[Series]) -> Vec<Embed> {
    let mut embeds = Vec::new();
    for series in catalog {
        if !matches_filter(&series.name, &params.series_filter) {
            continue;
        }
        // Without an explicit week each series falls back to its own
        // current week.
        let week = if params.week_filter.is_empty() {
            series.current_week.to_string()
        } else {
            params.week_filter.clone()
        };
        for (i, plot) in STAT_PLOTS.iter().enumerate() {
            let (title, description) = if i == 0 {
                (
                    Some(format!(
                        "{} - Statistics - Week {}",
                        series.current_season, week
                    )),
                    Some(format!(
                        "Shows statistics for week {} of the {} season",
                        week, series.name
                    )),
                )
            } else {
                (None, None)
            };
            embeds.push(Embed {
                title,
                description,
                image_url: Some(format!(
                    "{}/season/{}/week/{}/top/{}.png?team={}&cb={}",
                    base_url,
                    series.current_season_id,
                    week,
                    plot,
                    params.team_filter,
                    cache_bust()
                )),
            });
        }
    }
    embeds
}
