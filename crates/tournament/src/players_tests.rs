use super::*;
use crate::test_support::Forfeiter;
use random_strategy::RandomStrategy;
use ttt_core::{Board, LosingReason};

fn table() -> PlayerTable {
    let mut table = PlayerTable::new();
    table
        .insert(PlayerId::new("alice"), "random", Box::new(RandomStrategy::new()))
        .unwrap();
    table
        .insert(PlayerId::new("bob"), "forfeit", Box::new(Forfeiter))
        .unwrap();
    table
}

#[test]
fn test_new_players_start_at_zero() {
    let table = table();

    assert_eq!(table.len(), 2);
    assert_eq!(table.score(&PlayerId::new("alice")).unwrap(), 0);
    assert!(!table.is_filler(&PlayerId::new("bob")).unwrap());
}

#[test]
fn test_duplicate_insert_rejected() {
    let mut table = table();

    let err = table
        .insert(PlayerId::new("alice"), "greedy", Box::new(Forfeiter))
        .unwrap_err();
    assert!(matches!(err, TournamentError::DuplicateParticipant(_)));
    assert_eq!(table.get(&PlayerId::new("alice")).unwrap().strategy_id, "random");
}

#[test]
fn test_filler_names_are_unique() {
    let mut table = PlayerTable::new();

    let a = table.insert_filler("random", Box::new(RandomStrategy::new())).unwrap();
    let b = table.insert_filler("random", Box::new(RandomStrategy::new())).unwrap();

    assert_ne!(a, b);
    assert!(a.as_str().starts_with(FILLER_PREFIX));
    assert!(table.is_filler(&a).unwrap());
    assert_eq!(table.len(), 2);
}

#[test]
fn test_award_win() {
    let mut table = table();
    let alice = PlayerId::new("alice");

    table.award_win(&alice).unwrap();
    table.award_win(&alice).unwrap();

    assert_eq!(table.score(&alice).unwrap(), 2);
    assert!(matches!(
        table.award_win(&PlayerId::new("carol")),
        Err(TournamentError::UnknownPlayer(_))
    ));
}

#[test]
fn test_with_strategies_lends_and_returns() {
    let mut table = table();
    let alice = PlayerId::new("alice");
    let bob = PlayerId::new("bob");
    let mut board = Board::square(bob.clone(), alice.clone(), 3).unwrap();

    let result = table
        .with_strategies(&bob, &alice, |first, second| board.play(first, second))
        .unwrap();

    assert_eq!(result.winner, Some(alice.clone()));
    assert_eq!(result.reason, LosingReason::Forfeit);
    assert!(table.contains(&alice));
    assert!(table.contains(&bob));
    assert_eq!(table.len(), 2);
}

#[test]
fn test_with_strategies_unknown_player_keeps_table_intact() {
    let mut table = table();

    let err = table
        .with_strategies(&PlayerId::new("alice"), &PlayerId::new("carol"), |_, _| ())
        .unwrap_err();

    assert!(matches!(err, TournamentError::UnknownPlayer(id) if id.as_str() == "carol"));
    assert!(table.contains(&PlayerId::new("alice")));
}

#[test]
fn test_with_strategies_same_player_rejected() {
    let mut table = table();
    let alice = PlayerId::new("alice");

    assert!(table.with_strategies(&alice, &alice, |_, _| ()).is_err());
    assert_eq!(table.len(), 2);
}

#[test]
fn test_standings_order() {
    let mut table = table();
    table.award_win(&PlayerId::new("bob")).unwrap();
    table
        .insert(PlayerId::new("aaron"), "random", Box::new(RandomStrategy::new()))
        .unwrap();

    let names: Vec<&str> = table.standings().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(names, ["bob", "aaron", "alice"]);
}
