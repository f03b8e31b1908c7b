use super::*;

#[test]
fn test_defaults_registered() {
    let registry = StrategyRegistry::with_defaults();

    let ids: Vec<&str> = registry.ids().collect();
    assert_eq!(ids, ["RandomPlayer", "greedy", "random"]);
    assert!(registry.contains(FILLER_STRATEGY));
}

#[test]
fn test_create_returns_fresh_instances() {
    let registry = StrategyRegistry::with_defaults();

    assert_eq!(registry.create("greedy").unwrap().name(), "Greedy v1.0");
    assert_eq!(registry.create("random").unwrap().name(), "Random v1.0");
    assert_eq!(registry.create("RandomPlayer").unwrap().name(), "Random v1.0");
}

#[test]
fn test_unknown_id() {
    let registry = StrategyRegistry::with_defaults();

    assert!(!registry.contains("minimax"));
    assert!(registry.create("minimax").is_none());
}

#[test]
fn test_register_custom() {
    let mut registry = StrategyRegistry::new();
    assert_eq!(registry.ids().count(), 0);

    registry.register("mine", || Box::new(GreedyStrategy::new()));

    assert!(registry.contains("mine"));
    assert_eq!(registry.create("mine").unwrap().name(), "Greedy v1.0");
}
