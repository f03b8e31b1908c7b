//! Round, bracket and match records.
//!
//! These are both the scheduler's working state and the persisted result
//! format, so field names follow the JSON layout (`player1Name`,
//! `moveHistory`, `winningPlayerName`, ...).

use serde::{Deserialize, Serialize};
use ttt_core::{LosingReason, Move, PlayerId};

/// One played match.
///
/// Scores are each player's tournament score right after this match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(rename = "player1Name")]
    pub player1: PlayerId,
    #[serde(rename = "player2Name")]
    pub player2: PlayerId,
    pub player1_score: u32,
    pub player2_score: u32,
    pub move_history: Vec<Move>,
    /// `None` for a draw; stored as an empty name
    #[serde(rename = "winningPlayerName", with = "winner_name")]
    pub winner: Option<PlayerId>,
    pub reason_losing: LosingReason,
    pub round: u32,
}

impl Match {
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

/// A pairing within a round.
///
/// `player1Score`/`player2Score` hold the tournament scores as they stood
/// when the bracket started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bracket {
    #[serde(rename = "player1Name")]
    pub player1: PlayerId,
    #[serde(rename = "player2Name")]
    pub player2: PlayerId,
    pub player1_score: u32,
    pub player2_score: u32,
    pub matches: Vec<Match>,
}

impl Bracket {
    pub fn new(player1: PlayerId, player2: PlayerId) -> Self {
        Self {
            player1,
            player2,
            player1_score: 0,
            player2_score: 0,
            matches: Vec::new(),
        }
    }

    /// Matches in this bracket won by `player`.
    pub fn wins(&self, player: &PlayerId) -> u32 {
        self.matches
            .iter()
            .filter(|m| m.winner.as_ref() == Some(player))
            .count() as u32
    }

    /// The player with more match wins here; both on a tie.
    pub fn advancing_players(&self) -> Vec<PlayerId> {
        let p1 = self.wins(&self.player1);
        let p2 = self.wins(&self.player2);
        match p1.cmp(&p2) {
            std::cmp::Ordering::Greater => vec![self.player1.clone()],
            std::cmp::Ordering::Less => vec![self.player2.clone()],
            std::cmp::Ordering::Equal => vec![self.player1.clone(), self.player2.clone()],
        }
    }

    pub fn is_tied(&self) -> bool {
        self.wins(&self.player1) == self.wins(&self.player2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub round_number: u32,
    pub brackets: Vec<Bracket>,
}

impl Round {
    pub fn new(round_number: u32, brackets: Vec<Bracket>) -> Self {
        Self {
            round_number,
            brackets,
        }
    }

    /// Everyone this round sends on, bracket by bracket.
    pub fn advancing_players(&self) -> Vec<PlayerId> {
        self.brackets
            .iter()
            .flat_map(Bracket::advancing_players)
            .collect()
    }
}

mod winner_name {
    use serde::{Deserialize, Deserializer, Serializer};
    use ttt_core::PlayerId;

    pub fn serialize<S: Serializer>(winner: &Option<PlayerId>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(winner.as_ref().map_or("", PlayerId::as_str))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<PlayerId>, D::Error> {
        let name = String::deserialize(d)?;
        Ok((!name.is_empty()).then(|| PlayerId::new(name)))
    }
}

#[cfg(test)]
#[path = "bracket_tests.rs"]
mod bracket_tests;
