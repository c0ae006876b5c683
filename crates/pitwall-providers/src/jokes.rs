//! Dutch joke API client.

use async_trait::async_trait;
use pitwall_core::{config::JokesConfig, error::PitwallError, traits::JokeSource};
use rand::Rng;
use serde::Deserialize;
use tracing::debug;

/// Client for the joke API.
pub struct JokeClient {
    client: reqwest::Client,
    base_url: String,
}

impl JokeClient {
    /// Create from config values.
    pub fn from_config(config: &JokesConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }
}

/// Pick the joke category, roughly half dirty ("xxx") and half plain
/// dutch ("nl").
fn pick_joke_type<R: Rng>(rng: &mut R) -> &'static str {
    if rng.gen_range(0..2) > 0 {
        "nl"
    } else {
        "xxx"
    }
}

#[derive(Deserialize)]
struct JokeResponse {
    joke: String,
}

#[async_trait]
impl JokeSource for JokeClient {
    async fn joke(&self) -> Result<String, PitwallError> {
        let joke_type = pick_joke_type(&mut rand::thread_rng());
        let url = format!("{}?type={}", self.base_url, joke_type);
        debug!("jokes: GET {url}");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PitwallError::Joke(format!("joke request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(PitwallError::Joke(format!(
                "joke api returned {status}: {text}"
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| PitwallError::Joke(format!("failed to read joke payload: {e}")))?;

        let parsed: JokeResponse = serde_json::from_str(&body)?;
        Ok(parsed.joke)
    }
}
