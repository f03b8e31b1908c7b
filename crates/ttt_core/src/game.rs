//! Adjudicated match loop.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace, warn};

use crate::Strategy;
use crate::board::{Board, PlayerState};
use crate::time_control::MoveTimer;
use crate::types::{Move, PlayerId, Seat};

/// Why the losing side lost, or `Draw`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LosingReason {
    /// Returned a move outside the legal set while legal moves existed.
    Forfeit,
    /// Returned after the move budget ran out.
    Timeout,
    /// Opponent completed a full line.
    Won,
    Draw,
}

impl LosingReason {
    pub fn as_str(self) -> &'static str {
        match self {
            LosingReason::Forfeit => "forfeit",
            LosingReason::Timeout => "timeout",
            LosingReason::Won => "won",
            LosingReason::Draw => "draw",
        }
    }
}

impl fmt::Display for LosingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`Board::play`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    /// `None` for a draw.
    pub winner: Option<PlayerId>,
    /// Every accepted move, in the order it was applied.
    pub move_history: Vec<Move>,
    pub reason: LosingReason,
}

impl GameResult {
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

impl Board {
    /// Play the match to completion.
    ///
    /// `first` chooses moves for the board's first player, `second` for the
    /// other. Each strategy sees a fresh [`Snapshot`](crate::Snapshot) and a
    /// timer; the live board only advances from a validated move.
    ///
    /// The clock is checked after the strategy returns, so a strategy that
    /// never returns stalls the match.
    pub fn play(&mut self, first: &mut dyn Strategy, second: &mut dyn Strategy) -> GameResult {
        first.new_game();
        second.new_game();

        let mut move_history = Vec::new();

        while self.state_for(self.active_seat()) == PlayerState::InProgress {
            let mover = self.active_seat();
            let legal_moves = self.moves_from(self.location_of(mover));
            let snapshot = self.snapshot();

            let timer = MoveTimer::start(self.time_limit());
            let chosen = match mover {
                Seat::First => first.choose_move(&snapshot, &timer),
                Seat::Second => second.choose_move(&snapshot, &timer),
            };

            if timer.is_expired() {
                warn!(
                    player = %self.player(mover),
                    elapsed_ms = timer.elapsed().as_millis() as u64,
                    "move budget exceeded"
                );
                return self.decided(mover.other(), move_history, LosingReason::Timeout);
            }

            match chosen.filter(|mv| legal_moves.contains(mv)) {
                Some(mv) => {
                    debug!(player = %self.player(mover), %mv, "move accepted");
                    move_history.push(mv);
                    self.apply_move(mv);
                    trace!("\n{}", self);
                }
                None if !legal_moves.is_empty() => {
                    warn!(
                        player = %self.player(mover),
                        returned = ?chosen,
                        "move outside the legal set"
                    );
                    return self.decided(mover.other(), move_history, LosingReason::Forfeit);
                }
                None => {
                    debug!(player = %self.player(mover), "no legal moves left");
                    return GameResult {
                        winner: None,
                        move_history,
                        reason: LosingReason::Draw,
                    };
                }
            }
        }

        let active = self.active_seat();
        match self.state_for(active) {
            PlayerState::Draw => GameResult {
                winner: None,
                move_history,
                reason: LosingReason::Draw,
            },
            PlayerState::Win => self.decided(active, move_history, LosingReason::Won),
            _ => self.decided(active.other(), move_history, LosingReason::Won),
        }
    }

    fn decided(&self, winner: Seat, move_history: Vec<Move>, reason: LosingReason) -> GameResult {
        GameResult {
            winner: Some(self.player(winner).clone()),
            move_history,
            reason,
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
