use std::path::PathBuf;
use thiserror::Error;
use ttt_core::{BoardError, PlayerId};

/// Construction and scheduling failures. Any of these aborts the run;
/// per-match outcomes never surface here.
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("there should be at least one participant")]
    EmptyRoster,

    #[error("participant name \"{0}\" appears more than once")]
    DuplicateParticipant(PlayerId),

    #[error("participant \"{participant}\" uses unknown strategy \"{strategy}\"")]
    UnknownStrategy { participant: String, strategy: String },

    #[error("player \"{0}\" is not registered in this tournament")]
    UnknownPlayer(PlayerId),

    #[error("no players advance out of round {round}")]
    NoAdvancingPlayers { round: u32 },

    #[error("round {0} has already been created")]
    RoundAlreadyCreated(u32),

    #[error("round {0} has not been created yet")]
    NoPendingRound(u32),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid results file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid tournament config: {0}")]
    Toml(#[from] toml::de::Error),
}
