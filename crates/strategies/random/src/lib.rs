//! Random Move Strategy
//!
//! Picks uniformly among the active player's legal moves.
//! Useful for:
//! - Filling odd-sized tournament pools
//! - Baseline comparisons (any real strategy should beat this)
//! - Exercising the match loop end to end

use rand::seq::SliceRandom;
use rand::thread_rng;
use ttt_core::{Move, MoveTimer, Snapshot, Strategy};


/// A strategy that plays random legal moves.
///
/// Gives up (returns `None`) when the timer is already inside the safety
/// threshold, which the match loop scores as a forfeit rather than a
/// timeout.
#[derive(Debug, Clone, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, board: &Snapshot, timer: &MoveTimer) -> Option<Move> {
        if timer.should_stop() {
            return None;
        }

        let moves = board.legal_moves(Some(board.active_player())).ok()?;
        moves.choose(&mut thread_rng()).copied()
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
