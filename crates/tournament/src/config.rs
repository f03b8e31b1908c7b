//! Tournament configuration, loaded from a TOML roster file.
//!
//! ```toml
//! board_size = 5
//! seed = 7
//!
//! [[participants]]
//! name = "alice"
//! strategy = "greedy"
//!
//! [[participants]]
//! name = "bob"
//! strategy = "random"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;
use ttt_core::{PlayerId, DEFAULT_SIZE};

use crate::error::TournamentError;
use crate::registry::StrategyRegistry;

/// Matches played by each bracket.
pub const MATCHES_PER_BRACKET: u32 = 4;

/// Per-move budget is this many milliseconds times the board size.
pub const TIME_MULTIPLIER_MS: u64 = 30;

/// Rounds `Tournament::run` plays before giving up on reaching a final.
pub const MAX_ROUNDS: u32 = 64;

/// One roster entry: a unique player name and the strategy it plays with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub strategy: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, strategy: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            strategy: strategy.into(),
        }
    }

    pub fn id(&self) -> PlayerId {
        PlayerId::new(self.name.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub board_size: usize,
    pub matches_per_bracket: u32,
    pub time_multiplier_ms: u64,
    /// Keep synthetic filler players in the pool after round 0
    pub advance_default_players: bool,
    pub max_rounds: u32,
    /// Seed for the round-0 shuffle; `None` draws one from the OS
    pub seed: Option<u64>,
    pub participants: Vec<Participant>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_SIZE,
            matches_per_bracket: MATCHES_PER_BRACKET,
            time_multiplier_ms: TIME_MULTIPLIER_MS,
            advance_default_players: false,
            max_rounds: MAX_ROUNDS,
            seed: None,
            participants: Vec::new(),
        }
    }
}

impl TournamentConfig {
    pub fn with_participants(participants: Vec<Participant>) -> Self {
        Self {
            participants,
            ..Default::default()
        }
    }

    /// Parse a roster from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, TournamentError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a roster from a TOML file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Time each player gets per move on this board size.
    pub fn move_time_limit(&self) -> Duration {
        Duration::from_millis(self.time_multiplier_ms * self.board_size as u64)
    }

    /// Check the roster before any round is built.
    ///
    /// Fails on an empty roster, a repeated name, or a strategy id the
    /// registry cannot build.
    pub fn validate(&self, registry: &StrategyRegistry) -> Result<(), TournamentError> {
        if self.participants.is_empty() {
            return Err(TournamentError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        for participant in &self.participants {
            if !seen.insert(participant.name.as_str()) {
                return Err(TournamentError::DuplicateParticipant(participant.id()));
            }
            if !registry.contains(&participant.strategy) {
                return Err(TournamentError::UnknownStrategy {
                    participant: participant.name.clone(),
                    strategy: participant.strategy.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
