//! # pitwall-core
//!
//! Core types, traits, configuration, and error handling for the Pitwall bot.

pub mod config;
pub mod error;
pub mod message;
pub mod series;
pub mod traits;
