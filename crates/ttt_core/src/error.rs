use thiserror::Error;

use crate::types::PlayerId;

/// Structural errors raised by the rules engine.
///
/// These abort the call that triggered them; game outcomes such as
/// timeouts and forfeits are reported through `GameResult` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("non-square boards are not supported ({width}x{height})")]
    NonSquare { width: usize, height: usize },

    #[error("board size must be at least 1")]
    ZeroSize,

    #[error("players should have different names (both are \"{0}\")")]
    DuplicatePlayers(PlayerId),

    #[error("player \"{0}\" is not associated with this board")]
    UnknownPlayer(PlayerId),
}
