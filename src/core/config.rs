//! Simulation run configuration.
//!
//! The CLI builds a `SimConfig` from its flags; library users can build one
//! directly with the `with_*` methods. Call [`SimConfig::validate`] before
//! handing it to a [`Simulation`](crate::sim::Simulation).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::MAX_PLAYERS;
use super::rng::SeedPolicy;

/// Errors raised when run configuration invariants are violated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one player is required")]
    NoPlayers,
    #[error("at most 255 players are supported (got {0})")]
    TooManyPlayers(usize),
    #[error("at least one game must be simulated")]
    NoGames,
    #[error("turn limit must be positive when set")]
    ZeroTurnLimit,
}

/// Complete configuration for a simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Seats per game.
    pub players: usize,

    /// Number of games to simulate.
    pub games: usize,

    /// Play a single game and trace every turn instead of aggregating.
    pub verbose: bool,

    /// Apply candy cards that point behind the player.
    /// When false those cards are discarded with no effect.
    pub allow_back: bool,

    /// Deck seeding policy.
    pub seeding: SeedPolicy,

    /// Optional safety valve on turns per game. `None` = unbounded.
    pub max_turns: Option<u32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            players: 1,
            games: 10_000,
            verbose: false,
            allow_back: true,
            seeding: SeedPolicy::Clock,
            max_turns: None,
        }
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    #[must_use]
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn with_allow_back(mut self, allow_back: bool) -> Self {
        self.allow_back = allow_back;
        self
    }

    /// Seed once with a fixed value, making the run reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seeding = SeedPolicy::Fixed(seed);
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.players > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers(self.players));
        }
        if self.games == 0 {
            return Err(ConfigError::NoGames);
        }
        if self.max_turns == Some(0) {
            return Err(ConfigError::ZeroTurnLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli() {
        let config = SimConfig::default();
        assert_eq!(config.players, 1);
        assert_eq!(config.games, 10_000);
        assert!(!config.verbose);
        assert!(config.allow_back);
        assert_eq!(config.seeding, SeedPolicy::Clock);
        assert_eq!(config.max_turns, None);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builder() {
        let config = SimConfig::new()
            .with_players(4)
            .with_games(50)
            .with_allow_back(false)
            .with_seed(9)
            .with_max_turns(500);

        assert_eq!(config.players, 4);
        assert_eq!(config.games, 50);
        assert!(!config.allow_back);
        assert_eq!(config.seeding, SeedPolicy::Fixed(9));
        assert_eq!(config.max_turns, Some(500));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            SimConfig::new().with_players(0).validate(),
            Err(ConfigError::NoPlayers)
        );
        assert_eq!(
            SimConfig::new().with_players(300).validate(),
            Err(ConfigError::TooManyPlayers(300))
        );
        assert_eq!(
            SimConfig::new().with_games(0).validate(),
            Err(ConfigError::NoGames)
        );
        assert_eq!(
            SimConfig::new().with_max_turns(0).validate(),
            Err(ConfigError::ZeroTurnLimit)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::TooManyPlayers(300).to_string(),
            "at most 255 players are supported (got 300)"
        );
    }

    #[test]
    fn test_config_serde() {
        let config = SimConfig::new().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
