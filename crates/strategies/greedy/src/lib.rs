//! Greedy Strategy
//!
//! One-ply lookahead built on `Board::forecast_move`:
//! 1. take a move that completes a line right away
//! 2. otherwise prefer moves after which the opponent has no immediate win
//! 3. otherwise any legal move
//!
//! Ties inside a tier are broken at random. The timer is polled between
//! candidates; when it runs low the best tier found so far is used.

use rand::seq::SliceRandom;
use rand::thread_rng;
use ttt_core::{Board, Move, MoveTimer, PlayerState, Snapshot, Strategy};


#[derive(Debug, Clone, Default)]
pub struct GreedyStrategy {
    /// Candidates examined during the last call, for stats
    nodes: u64,
}

impl GreedyStrategy {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// True if the side to move on `board` can complete a line immediately.
    fn has_winning_reply(&mut self, board: &Board, timer: &MoveTimer) -> bool {
        let mover = board.active_player();
        let Ok(replies) = board.legal_moves(Some(mover)) else {
            return false;
        };
        replies.into_iter().any(|reply| {
            self.nodes += 1;
            !timer.should_stop()
                && board.forecast_move(reply).check_player_state(mover).ok() == Some(PlayerState::Win)
        })
    }
}

impl Strategy for GreedyStrategy {
    fn choose_move(&mut self, board: &Snapshot, timer: &MoveTimer) -> Option<Move> {
        self.nodes = 0;
        if timer.should_stop() {
            return None;
        }

        let me = board.active_player();
        let candidates = board.legal_moves(Some(me)).ok()?;
        let mut safe = Vec::with_capacity(candidates.len());

        for &mv in &candidates {
            if timer.should_stop() {
                break;
            }
            self.nodes += 1;

            let next = board.forecast_move(mv);
            if next.check_player_state(me).ok() == Some(PlayerState::Win) {
                return Some(mv);
            }
            if !self.has_winning_reply(&next, timer) {
                safe.push(mv);
            }
        }

        let pool = if safe.is_empty() { &candidates } else { &safe };
        pool.choose(&mut thread_rng()).copied()
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
