use ttt_core::{Move, MoveTimer, Snapshot, Strategy};

use crate::config::{Participant, TournamentConfig};
use crate::registry::StrategyRegistry;

/// Never produces a move, so it loses every match where it has to move.
pub struct Forfeiter;

impl Strategy for Forfeiter {
    fn choose_move(&mut self, _board: &Snapshot, _timer: &MoveTimer) -> Option<Move> {
        None
    }

    fn name(&self) -> &str {
        "forfeiter"
    }
}

/// Built-in strategies plus `forfeit`.
pub fn registry() -> StrategyRegistry {
    let mut registry = StrategyRegistry::with_defaults();
    registry.register("forfeit", || Box::new(Forfeiter));
    registry
}

/// A 3x3 seeded config over `(name, strategy)` pairs.
pub fn config(roster: &[(&str, &str)]) -> TournamentConfig {
    TournamentConfig {
        board_size: 3,
        seed: Some(7),
        ..TournamentConfig::with_participants(
            roster
                .iter()
                .map(|(name, strategy)| Participant::new(*name, *strategy))
                .collect(),
        )
    }
}
