//! Core types: seats, RNG, run configuration.
//!
//! These are independent of the board layout and the card rules.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{ConfigError, SimConfig};
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::{clock_seed, GameRng, SeedPolicy};
