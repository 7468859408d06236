//! # candy-lane
//!
//! Monte Carlo simulator for a Candy Lane style race game: a linear track
//! of coloured squares, candy landmarks, pits and roads, a shuffled deck of
//! movement cards, and one or more players racing to the end.
//!
//! ## Design Principles
//!
//! 1. **Immutable topology**: the `Board` and the deck template are built
//!    once and never change. All mutation happens on `Player` state and the
//!    deck's working supply.
//!
//! 2. **No globals**: the shuffled supply and its RNG live in a `Deck`
//!    value passed to the game by `&mut`.
//!
//! 3. **Typed invariants**: a square is a coloured square *or* a candy
//!    landmark; layout inconsistencies surface as `BoardError`.
//!
//! ## Modules
//!
//! - `core`: seats, RNG and seeding policy, run configuration
//! - `board`: squares and the standard track
//! - `cards`: cards and the deck
//! - `rules`: player state and the movement rule
//! - `game`: the turn loop
//! - `sim`: the Monte Carlo driver and statistics

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameRng, PlayerId, PlayerMap, SeedPolicy, SimConfig};

pub use crate::board::{Board, BoardError, Candy, Color, Road, Square, Tile};

pub use crate::cards::{Card, CardTypeId, Deck};

pub use crate::rules::{GameError, MoveOutcome, MoveRules, Player};

pub use crate::game::{Game, GameResult, TurnRecord};

pub use crate::sim::{MoveStats, OutputFormat, SimError, Simulation, Summary};
