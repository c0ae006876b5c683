//! HTTP health endpoint for deployment probes.
//!
//! Spawned as a background task in the gateway; reports gateway liveness
//! from the Discord heartbeat latency.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use pitwall_channels::discord::DiscordChannel;
use pitwall_core::config::ApiConfig;
use pitwall_core::traits::Channel;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// A gateway whose last measured heartbeat is older than this counts as
/// unhealthy.
const MAX_HEARTBEAT_LATENCY: Duration = Duration::from_secs(300);

/// Shared state for API handlers.
#[derive(Clone)]
struct ApiState {
    channels: HashMap<String, Arc<dyn Channel>>,
    uptime: Instant,
}

/// Downcast the Discord channel from shared state.
fn get_discord(state: &ApiState) -> Option<&DiscordChannel> {
    state
        .channels
        .get("discord")?
        .as_any()
        .downcast_ref::<DiscordChannel>()
}

/// An unmeasured latency counts as healthy; the gateway may still be
/// connecting.
fn heartbeat_ok(latency: Option<Duration>) -> bool {
    latency.map_or(true, |l| l <= MAX_HEARTBEAT_LATENCY)
}

/// `GET /health` -- 200 while the Discord heartbeat stays fresh, 500 once
/// it goes stale or the channel is missing.
async fn health(State(state): State<ApiState>) -> (StatusCode, Json<Value>) {
    let healthy = match get_discord(&state) {
        Some(discord) => heartbeat_ok(discord.heartbeat_latency().await),
        None => false,
    };

    if healthy {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "uptime_secs": state.uptime.elapsed().as_secs(),
            })),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"status": "failed"})),
        )
    }
}

/// Build the axum router with shared state.
fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(state)
}

/// Start the API server. Called from `Gateway::run()`.
pub async fn serve(
    config: ApiConfig,
    channels: HashMap<String, Arc<dyn Channel>>,
    uptime: Instant,
) {
    let state = ApiState { channels, uptime };

    let app = build_router(state);
    let addr = format!("{}:{}", config.host, config.port);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("API server failed to bind to {addr}: {e}");
            return;
        }
    };

    info!("API server listening on {addr}");

    if let Err(e) = axum::serve(listener, app).await {
        error!("API server error: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use pitwall_core::config::DiscordConfig;
    use pitwall_core::error::PitwallError;
    use pitwall_core::message::{IncomingMessage, MessageContext, OutgoingMessage};
    use tower::ServiceExt;

    /// A channel that is not a DiscordChannel, to exercise the downcast
    /// failure path.
    struct OtherChannel;

    #[async_trait]
    impl Channel for OtherChannel {
        fn name(&self) -> &str {
            "other"
        }

        async fn start(
            &self,
        ) -> Result<tokio::sync::mpsc::Receiver<IncomingMessage>, PitwallError> {
            let (_tx, rx) = tokio::sync::mpsc::channel(1);
            Ok(rx)
        }

        async fn context(
            &self,
            _message: &IncomingMessage,
        ) -> Result<MessageContext, PitwallError> {
            Ok(MessageContext::default())
        }

        async fn send(&self, _message: OutgoingMessage) -> Result<(), PitwallError> {
            Ok(())
        }

        async fn stop(&self) -> Result<(), PitwallError> {
            Ok(())
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    fn test_router(channels: HashMap<String, Arc<dyn Channel>>) -> Router {
        build_router(ApiState {
            channels,
            uptime: Instant::now(),
        })
    }

    async fn body_json(resp: axum::http::Response<Body>) -> Value {
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_ok_before_first_heartbeat() {
        // An unstarted channel has no measured latency, which counts as
        // healthy while the gateway spins up.
        let discord = DiscordChannel::new(DiscordConfig {
            enabled: true,
            bot_token: String::new(),
        });
        let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();
        channels.insert("discord".to_string(), Arc::new(discord));
        let app = test_router(channels);

        let req = Request::get("/health").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["status"], "ok");
        assert!(json["uptime_secs"].is_u64());
    }

    #[tokio::test]
    async fn test_health_failed_without_discord_channel() {
        let app = test_router(HashMap::new());

        let req = Request::get("/health").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(resp).await;
        assert_eq!(json["status"], "failed");
    }

    #[tokio::test]
    async fn test_health_failed_when_channel_is_not_discord() {
        let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();
        channels.insert("discord".to_string(), Arc::new(OtherChannel));
        let app = test_router(channels);

        let req = Request::get("/health").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_heartbeat_threshold() {
        assert!(heartbeat_ok(None));
        assert!(heartbeat_ok(Some(Duration::from_secs(1))));
        assert!(heartbeat_ok(Some(Duration::from_secs(300))));
        assert!(!heartbeat_ok(Some(Duration::from_secs(301))));
    }
}
