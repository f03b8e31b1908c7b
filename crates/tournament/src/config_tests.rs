use super::*;

#[test]
fn test_defaults() {
    let config = TournamentConfig::default();

    assert_eq!(config.board_size, 5);
    assert_eq!(config.matches_per_bracket, 4);
    assert_eq!(config.time_multiplier_ms, 30);
    assert!(!config.advance_default_players);
    assert_eq!(config.seed, None);
    assert!(config.participants.is_empty());
}

#[test]
fn test_move_time_limit_scales_with_board() {
    let mut config = TournamentConfig::default();
    assert_eq!(config.move_time_limit(), Duration::from_millis(150));

    config.board_size = 7;
    assert_eq!(config.move_time_limit(), Duration::from_millis(210));
}

#[test]
fn test_parse_roster() {
    let config = TournamentConfig::from_toml_str(
        r#"
        board_size = 4
        seed = 11

        [[participants]]
        name = "alice"
        strategy = "greedy"

        [[participants]]
        name = "bob"
        strategy = "random"
        "#,
    )
    .unwrap();

    assert_eq!(config.board_size, 4);
    assert_eq!(config.seed, Some(11));
    assert_eq!(config.matches_per_bracket, 4);
    assert_eq!(
        config.participants,
        vec![
            Participant::new("alice", "greedy"),
            Participant::new("bob", "random")
        ]
    );
    assert!(config.validate(&StrategyRegistry::with_defaults()).is_ok());
}

#[test]
fn test_sample_roster_is_valid() {
    let config = TournamentConfig::from_toml_str(include_str!("../tournament.toml")).unwrap();

    assert_eq!(config.participants.len(), 5);
    assert!(config.validate(&StrategyRegistry::with_defaults()).is_ok());
}

#[test]
fn test_malformed_toml() {
    let err = TournamentConfig::from_toml_str("board_size = \"big\"").unwrap_err();

    assert!(matches!(err, TournamentError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = TournamentConfig::load(Path::new("/nonexistent/roster.toml")).unwrap_err();

    assert!(matches!(err, TournamentError::Io { .. }));
}

#[test]
fn test_empty_roster_rejected() {
    let err = TournamentConfig::default()
        .validate(&StrategyRegistry::with_defaults())
        .unwrap_err();

    assert!(matches!(err, TournamentError::EmptyRoster));
}

#[test]
fn test_duplicate_name_rejected() {
    let config = TournamentConfig::with_participants(vec![
        Participant::new("alice", "random"),
        Participant::new("alice", "greedy"),
    ]);

    let err = config.validate(&StrategyRegistry::with_defaults()).unwrap_err();
    assert!(matches!(err, TournamentError::DuplicateParticipant(id) if id.as_str() == "alice"));
}

#[test]
fn test_unknown_strategy_rejected() {
    let config = TournamentConfig::with_participants(vec![Participant::new("alice", "minimax")]);

    let err = config.validate(&StrategyRegistry::with_defaults()).unwrap_err();
    assert!(matches!(
        err,
        TournamentError::UnknownStrategy { ref participant, ref strategy }
            if participant == "alice" && strategy == "minimax"
    ));
}
