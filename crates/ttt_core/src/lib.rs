pub mod board;
pub mod error;
pub mod game;
pub mod time_control;
pub mod types;

// Re-export core game logic (not strategy-specific)
pub use board::*;
pub use error::BoardError;
pub use game::*;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Strategy trait: implemented by every automated player (random, greedy, ...)
// =============================================================================

/// Trait that all automated players must implement.
///
/// The match loop hands each call a fresh [`Snapshot`] of the board and a
/// [`MoveTimer`] for the current move. Whatever comes back is adjudicated by
/// [`Board::play`]: a move outside the legal set forfeits the game, and
/// returning after the budget is spent loses on time even if the move was
/// fine. Strategies should poll [`MoveTimer::should_stop`] and return
/// promptly; nothing interrupts them.
pub trait Strategy: Send {
    /// Pick a move for the board's active player. `None` means "no move".
    fn choose_move(&mut self, board: &Snapshot, timer: &MoveTimer) -> Option<Move>;

    /// Strategy name for logs and reports.
    fn name(&self) -> &str;

    /// Reset internal state before a new game.
    fn new_game(&mut self) {}
}
