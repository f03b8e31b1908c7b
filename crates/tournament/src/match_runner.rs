//! Match runner for playing a bracket's matches between two players

use std::time::Duration;
use tracing::debug;
use ttt_core::{Board, PlayerId};

use crate::bracket::{Bracket, Match};
use crate::config::{TournamentConfig, MATCHES_PER_BRACKET, TIME_MULTIPLIER_MS};
use crate::error::TournamentError;
use crate::players::PlayerTable;

/// Configuration for a bracket
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of matches to play
    pub num_matches: u32,
    /// Side length of every board
    pub board_size: usize,
    /// Time each player gets per move
    pub time_per_move: Duration,
    /// Whether to alternate the first mover each match
    pub alternate_first_mover: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        let board_size = ttt_core::DEFAULT_SIZE;
        Self {
            num_matches: MATCHES_PER_BRACKET,
            board_size,
            time_per_move: Duration::from_millis(TIME_MULTIPLIER_MS * board_size as u64),
            alternate_first_mover: true,
        }
    }
}

impl From<&TournamentConfig> for MatchConfig {
    fn from(config: &TournamentConfig) -> Self {
        Self {
            num_matches: config.matches_per_bracket,
            board_size: config.board_size,
            time_per_move: config.move_time_limit(),
            alternate_first_mover: true,
        }
    }
}

/// Plays brackets and single matches, keeping the player table's scores
/// current.
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play every match of `bracket`, appending the records to it.
    ///
    /// The bracket's own scores are set from the table before the first
    /// match.
    pub fn run_bracket(
        &self,
        bracket: &mut Bracket,
        players: &mut PlayerTable,
        round: u32,
    ) -> Result<(), TournamentError> {
        bracket.player1_score = players.score(&bracket.player1)?;
        bracket.player2_score = players.score(&bracket.player2)?;

        for match_num in 0..self.config.num_matches {
            // Alternate who moves first if configured
            let player1_first = !self.config.alternate_first_mover || match_num % 2 == 0;
            let (first, second) = if player1_first {
                (&bracket.player1, &bracket.player2)
            } else {
                (&bracket.player2, &bracket.player1)
            };

            debug!(
                round,
                game = match_num + 1,
                of = self.config.num_matches,
                "playing match {} against {}",
                first,
                second
            );
            let record = self.play_match(first, second, players, round)?;
            bracket.matches.push(record);
        }

        Ok(())
    }

    /// Play one match with `first` moving first.
    pub fn play_match(
        &self,
        first: &PlayerId,
        second: &PlayerId,
        players: &mut PlayerTable,
        round: u32,
    ) -> Result<Match, TournamentError> {
        let size = self.config.board_size;
        let mut board = Board::new(
            first.clone(),
            second.clone(),
            size,
            size,
            self.config.time_per_move,
        )?;

        let result = players.with_strategies(first, second, |a, b| board.play(a, b))?;

        match &result.winner {
            Some(winner) => {
                players.award_win(winner)?;
                debug!(
                    round,
                    winner = %winner,
                    reason = %result.reason,
                    moves = result.move_history.len(),
                    "match decided"
                );
            }
            None => debug!(round, moves = result.move_history.len(), "match drawn"),
        }

        Ok(Match {
            player1: first.clone(),
            player2: second.clone(),
            player1_score: players.score(first)?,
            player2_score: players.score(second)?,
            move_history: result.move_history,
            winner: result.winner,
            reason_losing: result.reason,
            round,
        })
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
