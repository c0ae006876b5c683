//! # pitwall-providers
//!
//! External data clients for Pitwall: the visualizer series catalog and
//! the joke API.

pub mod jokes;
pub mod visualizer;
