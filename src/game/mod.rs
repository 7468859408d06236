//! Game engine: turn loop, turn records, results.

mod engine;

pub use engine::{Game, GameResult, TurnRecord};
