//! # pitwall-channels
//!
//! Messaging platform integrations for Pitwall.

pub mod discord;
