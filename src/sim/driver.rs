//! Simulation driver: reset, run, collect, aggregate.

use std::io::Write;

use log::info;
use thiserror::Error;

use super::stats::{MoveStats, Summary};
use crate::board::{Board, BoardError};
use crate::cards::Deck;
use crate::core::{ConfigError, PlayerMap, SimConfig};
use crate::game::{Game, GameResult};
use crate::rules::{GameError, MoveRules};

/// Any failure of a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// How aggregate results are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Four `<label> <value>` lines.
    #[default]
    Text,
    /// The full [`Summary`] as JSON.
    Json,
}

/// Owns the board, deck and game for one run.
///
/// ## Example
///
/// ```
/// use candy_lane::core::SimConfig;
/// use candy_lane::sim::Simulation;
///
/// let config = SimConfig::new().with_players(2).with_games(50).with_seed(1);
/// let summary = Simulation::new(config).unwrap().run().unwrap();
///
/// assert_eq!(summary.games, 50);
/// assert!(summary.stats.min <= summary.stats.max);
/// ```
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    board: Board,
    deck: Deck,
    game: Game,
}

impl Simulation {
    /// Validate `config` and build the standard board and deck.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let board = Board::standard()?;
        Self::with_board(config, board)
    }

    /// Validate `config` and play on a prebuilt board.
    pub fn with_board(config: SimConfig, board: Board) -> Result<Self, SimError> {
        config.validate()?;
        let deck = Deck::standard(config.seeding);
        let game = Game::new(config.players, MoveRules::new(config.allow_back))
            .with_max_turns(config.max_turns);
        Ok(Self {
            config,
            board,
            deck,
            game,
        })
    }

    /// Play `config.games` games and aggregate their move counts.
    pub fn run(&mut self) -> Result<Summary, SimError> {
        info!(
            "simulating {} games with {} players (allow_back={}, seeding={:?})",
            self.config.games, self.config.players, self.config.allow_back, self.config.seeding
        );

        let mut counts = Vec::with_capacity(self.config.games);
        let mut wins: PlayerMap<u32> = PlayerMap::with_default(self.config.players);
        let mut turn_limited = 0;

        for _ in 0..self.config.games {
            self.game.reset();
            match self.game.run(&self.board, &mut self.deck)? {
                GameResult::Winner(seat) => wins[seat] += 1,
                GameResult::TurnLimit => turn_limited += 1,
            }
            counts.push(self.game.moves());
        }

        let stats = MoveStats::from_counts(&mut counts).ok_or(ConfigError::NoGames)?;
        info!(
            "finished {} games ({} deck refills)",
            self.config.games,
            self.deck.refills()
        );

        Ok(Summary {
            games: self.config.games,
            stats,
            wins,
            turn_limited,
        })
    }

    /// Play one game, writing every turn and then each player's counters.
    pub fn trace(&mut self, out: &mut impl Write) -> Result<GameResult, SimError> {
        self.game.reset();

        let mut written = Ok(());
        let result = self.game.run_with(&self.board, &mut self.deck, |turn| {
            if written.is_ok() {
                written = writeln!(out, "{turn}");
            }
        })?;
        written?;

        writeln!(out, "moves: {}", self.game.moves())?;
        for (seat, player) in self.game.players().iter() {
            writeln!(out, "  {seat}: {player}")?;
        }
        Ok(result)
    }

    /// Trace one game in verbose mode, otherwise run all games and write
    /// the summary in `format`.
    pub fn report(&mut self, out: &mut impl Write, format: OutputFormat) -> Result<(), SimError> {
        if self.config.verbose {
            self.trace(out)?;
            return Ok(());
        }

        let summary = self.run()?;
        match format {
            OutputFormat::Text => writeln!(out, "{}", summary.stats)?,
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&summary)
                    .map_err(std::io::Error::from)?;
                writeln!(out, "{json}")?;
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }
}
