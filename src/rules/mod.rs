//! Race rules: player state and how a dealt card moves a player.
//!
//! The board and deck never change during play; all mutation happens on
//! the `Player` passed to [`MoveRules::apply`].

pub mod movement;
pub mod player;

pub use movement::{GameError, MoveOutcome, MoveRules};
pub use player::{position_label, Player};
