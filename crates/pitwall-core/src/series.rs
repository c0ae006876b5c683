use serde::{Deserialize, Serialize};

/// One racing series tracked by the visualizer service, as returned by
/// its `series_json` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    #[serde(rename = "series_id")]
    pub id: i64,
    pub name: String,
    /// Display label of the running season (e.g. "2020 Season 2").
    pub current_season: String,
    pub current_season_id: i64,
    pub current_week: i64,
}
