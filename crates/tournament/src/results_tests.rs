use super::*;
use crate::bracket::{Bracket, Match};
use ttt_core::{LosingReason, Move, PlayerId};

fn bracket(p1: &str, p2: &str, winners: &[Option<&str>]) -> Bracket {
    let mut bracket = Bracket::new(PlayerId::new(p1), PlayerId::new(p2));
    for winner in winners {
        bracket.matches.push(Match {
            player1: PlayerId::new(p1),
            player2: PlayerId::new(p2),
            player1_score: 0,
            player2_score: 0,
            move_history: vec![Move::new(0, 0), Move::new(1, 1), Move::new(0, 1)],
            winner: winner.map(PlayerId::new),
            reason_losing: if winner.is_some() {
                LosingReason::Won
            } else {
                LosingReason::Draw
            },
            round: 0,
        });
    }
    bracket
}

fn two_rounds(final_winners: &[Option<&str>]) -> TournamentResults {
    TournamentResults::new(
        4,
        vec![
            Round::new(
                0,
                vec![
                    bracket("alice", "bob", &[Some("alice"), Some("alice")]),
                    bracket("carol", "dave", &[Some("carol"), None]),
                ],
            ),
            Round::new(1, vec![bracket("alice", "carol", final_winners)]),
        ],
    )
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("{}-{}-{}", name, std::process::id(), uuid::Uuid::new_v4()))
}

#[test]
fn test_champion_from_single_bracket() {
    let results = two_rounds(&[Some("carol"), Some("carol"), None]);

    assert_eq!(results.number_of_rounds, 2);
    assert_eq!(results.winner_name, "carol");
    assert!(results.has_winner());
}

#[test]
fn test_tied_final_has_no_champion() {
    let results = two_rounds(&[Some("carol"), Some("alice")]);

    assert_eq!(results.winner_name, "");
    assert!(!results.has_winner());
}

#[test]
fn test_unfinished_has_no_champion() {
    let results = TournamentResults::new(
        3,
        vec![Round::new(
            0,
            vec![
                bracket("alice", "bob", &[Some("alice")]),
                bracket("carol", "dave", &[Some("dave")]),
            ],
        )],
    );

    assert_eq!(results.winner_name, "");
    assert_eq!(TournamentResults::new(3, Vec::new()).winner_name, "");
}

#[test]
fn test_json_layout() {
    let value = serde_json::to_value(two_rounds(&[Some("alice")])).unwrap();

    assert_eq!(value["boardSize"], 4);
    assert_eq!(value["numberOfRounds"], 2);
    assert_eq!(value["winnerName"], "alice");
    let final_match = &value["rounds"][1]["brackets"][0]["matches"][0];
    assert_eq!(final_match["player1Name"], "alice");
    assert_eq!(final_match["moveHistory"][2], serde_json::json!([0, 1]));
    assert_eq!(value["rounds"][0]["brackets"][1]["matches"][1]["winningPlayerName"], "");
}

#[test]
fn test_save_and_load() {
    let results = two_rounds(&[Some("carol")]);
    let path = temp_path("results.json");

    results.save(&path).unwrap();
    let loaded = TournamentResults::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, results);
}

#[test]
fn test_load_missing_file() {
    let err = TournamentResults::load(&temp_path("missing.json")).unwrap_err();

    assert!(matches!(err, TournamentError::Io { .. }));
}

#[test]
fn test_load_garbage() {
    let path = temp_path("garbage.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = TournamentResults::load(&path).unwrap_err();
    let _ = std::fs::remove_file(&path);

    assert!(matches!(err, TournamentError::Json(_)));
}

#[test]
fn test_report_contents() {
    let report = two_rounds(&[Some("alice"), Some("alice")]).generate_report();

    assert!(report.contains("4x4 board, 2 rounds"));
    assert!(report.contains("Round 0:"));
    assert!(report.contains("Round 1:"));
    assert!(report.contains("draw"));
    assert!(report.contains("alice (won)"));
    assert!(report.ends_with("Champion: alice\n"));
}

#[test]
fn test_report_without_champion() {
    let report = two_rounds(&[None]).generate_report();

    assert!(report.contains("No champion"));
}
