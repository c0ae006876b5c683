use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Visualizer service config -- the renderer that serves both the series
/// catalog and the generated images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizerConfig {
    #[serde(default = "default_visualizer_url")]
    pub base_url: String,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            base_url: default_visualizer_url(),
        }
    }
}

/// Joke API config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JokesConfig {
    #[serde(default = "default_jokes_url")]
    pub base_url: String,
}

impl Default for JokesConfig {
    fn default() -> Self {
        Self {
            base_url: default_jokes_url(),
        }
    }
}
