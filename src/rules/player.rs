//! Per-player race state and counters.

use serde::{Deserialize, Serialize};

/// Render a position the way traces print it: `-1` before the first square.
#[must_use]
pub fn position_label(position: Option<usize>) -> i64 {
    position.map_or(-1, |p| p as i64)
}

/// One player's state within a game.
///
/// `position` is `None` until the first advance ("before square 0"). A
/// finished player sits at the board's finish line, one past the last
/// square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub position: Option<usize>,
    /// Turns taken.
    pub moves: u32,
    /// Turns lost on a pit.
    pub stucks: u32,
    /// Candy jumps applied, in either direction.
    pub candy_jumps: u32,
    /// Candy jumps that moved the player backward.
    pub candy_jumps_back: u32,
    /// Roads taken.
    pub roads: u32,
}

impl Player {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn at(position: usize) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn has_started(&self) -> bool {
        self.position.is_some()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pos={} moves={} stucks={} candy_jumps={} candy_jumps_back={} roads={}",
            position_label(self.position),
            self.moves,
            self.stucks,
            self.candy_jumps,
            self.candy_jumps_back,
            self.roads
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_has_not_started() {
        let player = Player::new();
        assert!(!player.has_started());
        assert_eq!(position_label(player.position), -1);
        assert!(Player::at(0).has_started());
    }

    #[test]
    fn test_display_lists_counters() {
        let player = Player {
            position: Some(12),
            moves: 9,
            stucks: 1,
            candy_jumps: 2,
            candy_jumps_back: 1,
            roads: 1,
        };
        assert_eq!(
            player.to_string(),
            "pos=12 moves=9 stucks=1 candy_jumps=2 candy_jumps_back=1 roads=1"
        );
    }
}
