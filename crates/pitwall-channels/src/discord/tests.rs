use super::*;
use pitwall_core::message::{IncomingMessage, OutgoingMessage};
use pitwall_core::traits::Channel;

fn test_channel() -> DiscordChannel {
    DiscordChannel::new(DiscordConfig {
        enabled: true,
        bot_token: String::new(),
    })
}

fn incoming(target: Option<&str>) -> IncomingMessage {
    IncomingMessage {
        id: uuid::Uuid::new_v4(),
        channel: "discord".to_string(),
        sender_id: "100".to_string(),
        sender_name: Some("tester".to_string()),
        text: "!summary".to_string(),
        timestamp: chrono::Utc::now(),
        reply_target: target.map(|t| t.to_string()),
    }
}

#[test]
fn test_channel_name() {
    assert_eq!(test_channel().name(), "discord");
}

#[tokio::test]
async fn test_latency_unknown_before_start() {
    assert!(test_channel().heartbeat_latency().await.is_none());
}

#[tokio::test]
async fn test_context_fails_before_start() {
    let channel = test_channel();
    let result = channel.context(&incoming(Some("42"))).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_send_fails_before_start() {
    let channel = test_channel();
    let message = OutgoingMessage {
        reply_target: Some("42".to_string()),
        ..Default::default()
    };
    assert!(channel.send(message).await.is_err());
}

#[tokio::test]
async fn test_send_rejects_missing_target() {
    let channel = test_channel();
    let message = OutgoingMessage::default();
    let err = channel.send(message).await.unwrap_err();
    assert!(err.to_string().contains("reply_target"));
}
