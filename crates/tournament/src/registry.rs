//! Strategy lookup by id.
//!
//! Roster files name strategies by string; the registry turns those ids into
//! fresh boxed instances, one per player.

use greedy_strategy::GreedyStrategy;
use random_strategy::RandomStrategy;
use std::collections::BTreeMap;
use ttt_core::Strategy;

/// Builds a new strategy instance.
pub type StrategyFactory = Box<dyn Fn() -> Box<dyn Strategy> + Send + Sync>;

/// Id used for filler players added to odd-sized pools.
pub const FILLER_STRATEGY: &str = "random";

pub struct StrategyRegistry {
    factories: BTreeMap<String, StrategyFactory>,
}

impl StrategyRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Registry with the built-in strategies.
    ///
    /// `RandomPlayer` is accepted as an alias for `random`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("random", || Box::new(RandomStrategy::new()));
        registry.register("RandomPlayer", || Box::new(RandomStrategy::new()));
        registry.register("greedy", || Box::new(GreedyStrategy::new()));
        registry
    }

    /// Add or replace a strategy under `id`.
    pub fn register<F>(&mut self, id: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn Strategy> + Send + Sync + 'static,
    {
        self.factories.insert(id.into(), Box::new(factory));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// A fresh instance, or `None` for an unregistered id.
    pub fn create(&self, id: &str) -> Option<Box<dyn Strategy>> {
        self.factories.get(id).map(|factory| factory())
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.factories.keys().map(String::as_str)
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
