//! The turn loop.
//!
//! Seats take turns in round-robin order starting from seat 0. Each turn
//! deals one card and applies it to the current player; the first player
//! to run off the end of the track wins.
//!
//! There is no turn limit by default. A game ends only when someone
//! finishes, which happens with probability 1 but has no fixed bound. Set
//! [`Game::with_max_turns`] to cap it.

use log::{debug, warn};

use crate::board::Board;
use crate::cards::{Card, Deck};
use crate::core::{PlayerId, PlayerMap};
use crate::rules::{position_label, GameError, MoveOutcome, MoveRules, Player};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// A player ran off the end of the track.
    Winner(PlayerId),
    /// The turn cap was reached with no winner.
    TurnLimit,
}

impl GameResult {
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::TurnLimit => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }
}

/// One turn of a game, as reported to observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    /// Game-wide move number, starting at 1.
    pub turn: u32,
    pub player: PlayerId,
    pub card: Card,
    pub from: Option<usize>,
    pub to: Option<usize>,
    pub outcome: MoveOutcome,
}

impl std::fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{} => {}",
            self.card,
            position_label(self.from),
            position_label(self.to)
        )?;
        if self.outcome.is_win() {
            f.write_str(" WIN")?;
        }
        Ok(())
    }
}

/// A race game over a fixed set of seats.
///
/// Built once per run and reset between games; the seat list is kept.
///
/// ## Example
///
/// ```
/// use candy_lane::board::Board;
/// use candy_lane::cards::Deck;
/// use candy_lane::core::SeedPolicy;
/// use candy_lane::game::Game;
/// use candy_lane::rules::MoveRules;
///
/// let board = Board::standard().unwrap();
/// let mut deck = Deck::standard(SeedPolicy::Fixed(1));
/// let mut game = Game::new(2, MoveRules::default());
///
/// let result = game.run(&board, &mut deck).unwrap();
/// assert!(result.winner().is_some());
/// assert!(game.moves() > 0);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    players: PlayerMap<Player>,
    moves: u32,
    winner: Option<PlayerId>,
    rules: MoveRules,
    max_turns: Option<u32>,
}

impl Game {
    /// Create a game with `player_count` fresh seats.
    ///
    /// Panics if `player_count` is 0 or above 255.
    #[must_use]
    pub fn new(player_count: usize, rules: MoveRules) -> Self {
        Self {
            players: PlayerMap::with_default(player_count),
            moves: 0,
            winner: None,
            rules,
            max_turns: None,
        }
    }

    /// Stop a game with no winner once `max_turns` is reached.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: Option<u32>) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Clear positions, counters, the move count and the winner.
    pub fn reset(&mut self) {
        self.moves = 0;
        self.winner = None;
        for (_, player) in self.players.iter_mut() {
            *player = Player::default();
        }
    }

    /// Play until someone wins (or the turn cap is hit).
    pub fn run(&mut self, board: &Board, deck: &mut Deck) -> Result<GameResult, GameError> {
        self.run_with(board, deck, |_| {})
    }

    /// Like [`run`](Self::run), reporting every turn to `observer`.
    pub fn run_with(
        &mut self,
        board: &Board,
        deck: &mut Deck,
        mut observer: impl FnMut(&TurnRecord),
    ) -> Result<GameResult, GameError> {
        let player_count = self.players.player_count();
        let mut seat = PlayerId::new(0);

        loop {
            if let Some(limit) = self.max_turns {
                if self.moves >= limit {
                    warn!("game abandoned after {} turns with no winner", self.moves);
                    return Ok(GameResult::TurnLimit);
                }
            }

            self.moves += 1;
            let player = &mut self.players[seat];
            player.moves += 1;

            let from = player.position;
            let card = *deck.deal();
            let outcome = self.rules.apply(board, player, &card)?;

            observer(&TurnRecord {
                turn: self.moves,
                player: seat,
                card,
                from,
                to: player.position,
                outcome,
            });

            if outcome.is_win() {
                debug!("{seat} won after {} moves", self.moves);
                self.winner = Some(seat);
                return Ok(GameResult::Winner(seat));
            }

            seat = seat.next(player_count);
        }
    }

    /// Total turns taken across all seats.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn rules(&self) -> MoveRules {
        self.rules
    }
}
