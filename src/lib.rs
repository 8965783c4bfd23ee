//! Forklore Library
//!
//! Core modules for the Forklore restaurant-rating aggregator.

pub mod card;
pub mod config;
pub mod error;
pub mod loader;
pub mod matching;
pub mod net;
pub mod place;
pub mod providers;
pub mod utils;
