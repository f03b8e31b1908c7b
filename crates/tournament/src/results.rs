//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

use crate::bracket::Round;
use crate::error::TournamentError;

/// Complete tournament results, the artifact handed to replay tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResults {
    pub board_size: usize,
    pub rounds: Vec<Round>,
    pub number_of_rounds: usize,
    /// Champion's name; empty when the final ended tied or was never reached
    pub winner_name: String,
}

impl TournamentResults {
    pub fn new(board_size: usize, rounds: Vec<Round>) -> Self {
        let winner_name = champion(&rounds).unwrap_or_default();
        Self {
            board_size,
            number_of_rounds: rounds.len(),
            rounds,
            winner_name,
        }
    }

    pub fn has_winner(&self) -> bool {
        !self.winner_name.is_empty()
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| TournamentError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(
            report,
            "=== Tournament: {}x{} board, {} rounds ===\n",
            self.board_size, self.board_size, self.number_of_rounds
        );

        for round in &self.rounds {
            let _ = writeln!(report, "Round {}:", round.round_number);
            for bracket in &round.brackets {
                let _ = writeln!(
                    report,
                    "  {:<20} vs {:<20} {:>2}-{:<2}",
                    bracket.player1.as_str(),
                    bracket.player2.as_str(),
                    bracket.wins(&bracket.player1),
                    bracket.wins(&bracket.player2)
                );
                for m in &bracket.matches {
                    let outcome = match &m.winner {
                        Some(winner) => format!("{} ({})", winner, m.reason_losing),
                        None => "draw".to_string(),
                    };
                    let _ = writeln!(
                        report,
                        "    {} first vs {}: {} in {} moves",
                        m.player1,
                        m.player2,
                        outcome,
                        m.move_history.len()
                    );
                }
            }
            report.push('\n');
        }

        if self.has_winner() {
            let _ = writeln!(report, "Champion: {}", self.winner_name);
        } else {
            report.push_str("No champion: the final was tied or never reached\n");
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

/// The sole advancing player of a single-bracket last round.
fn champion(rounds: &[Round]) -> Option<String> {
    let last = rounds.last()?;
    let [bracket] = last.brackets.as_slice() else {
        return None;
    };
    match bracket.advancing_players().as_slice() {
        [winner] => Some(winner.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
