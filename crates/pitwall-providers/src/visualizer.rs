//! Visualizer API client.
//!
//! Fetches the series catalog from the rendering service that also
//! generates the summary/standings/statistics images.

use async_trait::async_trait;
use pitwall_core::{
    config::VisualizerConfig, error::PitwallError, series::Series, traits::SeriesSource,
};
use tracing::{debug, warn};

/// Client for the visualizer's JSON endpoints.
pub struct VisualizerClient {
    client: reqwest::Client,
    base_url: String,
}

impl VisualizerClient {
    /// Create from config values.
    pub fn from_config(config: &VisualizerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }
}

#[async_trait]
impl SeriesSource for VisualizerClient {
    async fn series(&self) -> Result<Vec<Series>, PitwallError> {
        let url = format!("{}/series_json", self.base_url);
        debug!("visualizer: GET {url}");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PitwallError::Catalog(format!("series request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(PitwallError::Catalog(format!(
                "visualizer returned {status}: {text}"
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| PitwallError::Catalog(format!("failed to read series payload: {e}")))?;

        let series: Vec<Series> = match serde_json::from_str(&body) {
            Ok(series) => series,
            Err(e) => {
                warn!("visualizer: unparseable series payload: {body}");
                return Err(e.into());
            }
        };

        Ok(series)
    }
}
