//! The movement rule: how one dealt card moves one player.
//!
//! Resolution order:
//! 1. Candy card: jump to the landmark (backward jumps optional).
//! 2. Pit: a player on a pit stays put unless the card matches its colour.
//! 3. Colour card: scan forward to the next square of the card's colour,
//!    twice for a double. Running off the end of the track wins.
//! 4. Road: a colour advance that lands on a road start warps to its end.

use log::trace;
use thiserror::Error;

use super::player::Player;
use crate::board::{Board, Candy, Color};
use crate::cards::Card;

/// Errors raised during play. These indicate inconsistent board/deck data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("candy card {0} names no square on the board")]
    UnknownCandy(Candy),
}

/// What a single card did to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Jumped to a candy landmark.
    CandyJump { to: usize, backward: bool },
    /// Backward candy card discarded because backward jumps are off.
    CandyDiscarded,
    /// Held on a pit by a non-matching card.
    Stuck,
    /// Advanced by colour.
    Advanced { to: usize },
    /// Advanced by colour onto a road start and warped.
    Road { landed: usize, to: usize },
    /// Ran past the last square.
    Finished,
}

impl MoveOutcome {
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, MoveOutcome::Finished)
    }
}

/// Rule toggles for a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRules {
    /// Apply candy cards that point behind the player.
    pub allow_back: bool,
}

impl Default for MoveRules {
    fn default() -> Self {
        Self { allow_back: true }
    }
}

impl MoveRules {
    #[must_use]
    pub fn new(allow_back: bool) -> Self {
        Self { allow_back }
    }

    /// Apply `card` to `player`, mutating position and counters.
    pub fn apply(
        &self,
        board: &Board,
        player: &mut Player,
        card: &Card,
    ) -> Result<MoveOutcome, GameError> {
        let outcome = match *card {
            Card::Candy(candy) => self.candy_jump(board, player, candy)?,
            Card::Color { color, .. } => {
                if Self::held_by_pit(board, player, color) {
                    player.stucks += 1;
                    MoveOutcome::Stuck
                } else {
                    Self::advance(board, player, color, card.steps())
                }
            }
        };
        trace!("{card}: {outcome:?}");
        Ok(outcome)
    }

    fn candy_jump(
        &self,
        board: &Board,
        player: &mut Player,
        candy: Candy,
    ) -> Result<MoveOutcome, GameError> {
        let target = board
            .candy_position(candy)
            .ok_or(GameError::UnknownCandy(candy))?;

        let backward = player.position.is_some_and(|p| target < p);
        if backward {
            if !self.allow_back {
                return Ok(MoveOutcome::CandyDiscarded);
            }
            player.candy_jumps_back += 1;
        }

        player.candy_jumps += 1;
        player.position = Some(target);
        Ok(MoveOutcome::CandyJump {
            to: target,
            backward,
        })
    }

    fn held_by_pit(board: &Board, player: &Player, color: Color) -> bool {
        player
            .position
            .and_then(|p| board.square(p))
            .and_then(|s| s.pit_color())
            .is_some_and(|pit| pit != color)
    }

    fn advance(board: &Board, player: &mut Player, color: Color, steps: usize) -> MoveOutcome {
        let mut cursor = player.position;
        let mut landed = 0;

        for _ in 0..steps {
            loop {
                let next = cursor.map_or(0, |p| p + 1);
                if next >= board.len() {
                    player.position = Some(board.finish_line());
                    return MoveOutcome::Finished;
                }
                cursor = Some(next);
                if board.squares()[next].color() == Some(color) {
                    landed = next;
                    break;
                }
            }
        }

        match board.warp_target(landed) {
            Some(to) => {
                player.position = Some(to);
                player.roads += 1;
                MoveOutcome::Road { landed, to }
            }
            None => {
                player.position = Some(landed);
                MoveOutcome::Advanced { to: landed }
            }
        }
    }
}
