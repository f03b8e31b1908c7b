//! Player table: every participant's strategy instance and running score.

use std::collections::HashMap;
use ttt_core::{PlayerId, Strategy};
use uuid::Uuid;

use crate::error::TournamentError;

/// Name prefix of synthetic players added to odd-sized pools.
pub const FILLER_PREFIX: &str = "RandomPlayer";

/// One registered player.
pub struct Entrant {
    pub id: PlayerId,
    pub strategy_id: String,
    /// Matches won so far, across every round
    pub score: u32,
    /// Synthetic filler rather than a roster participant
    pub is_filler: bool,
    strategy: Box<dyn Strategy>,
}

impl std::fmt::Debug for Entrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entrant")
            .field("id", &self.id)
            .field("strategy_id", &self.strategy_id)
            .field("score", &self.score)
            .field("is_filler", &self.is_filler)
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct PlayerTable {
    entrants: HashMap<PlayerId, Entrant>,
}

impl PlayerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a participant with a zero score.
    pub fn insert(
        &mut self,
        id: PlayerId,
        strategy_id: impl Into<String>,
        strategy: Box<dyn Strategy>,
    ) -> Result<(), TournamentError> {
        self.add(id, strategy_id.into(), strategy, false)
    }

    /// Register a filler player under a fresh `RandomPlayer<uuid>` name.
    pub fn insert_filler(
        &mut self,
        strategy_id: impl Into<String>,
        strategy: Box<dyn Strategy>,
    ) -> Result<PlayerId, TournamentError> {
        let id = PlayerId::new(format!("{FILLER_PREFIX}{}", Uuid::new_v4()));
        self.add(id.clone(), strategy_id.into(), strategy, true)?;
        Ok(id)
    }

    fn add(
        &mut self,
        id: PlayerId,
        strategy_id: String,
        strategy: Box<dyn Strategy>,
        is_filler: bool,
    ) -> Result<(), TournamentError> {
        if self.entrants.contains_key(&id) {
            return Err(TournamentError::DuplicateParticipant(id));
        }
        let entrant = Entrant {
            id: id.clone(),
            strategy_id,
            score: 0,
            is_filler,
            strategy,
        };
        self.entrants.insert(id, entrant);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entrants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrants.is_empty()
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.entrants.contains_key(id)
    }

    pub fn get(&self, id: &PlayerId) -> Result<&Entrant, TournamentError> {
        self.entrants
            .get(id)
            .ok_or_else(|| TournamentError::UnknownPlayer(id.clone()))
    }

    pub fn score(&self, id: &PlayerId) -> Result<u32, TournamentError> {
        Ok(self.get(id)?.score)
    }

    pub fn is_filler(&self, id: &PlayerId) -> Result<bool, TournamentError> {
        Ok(self.get(id)?.is_filler)
    }

    /// Credit one match win.
    pub fn award_win(&mut self, id: &PlayerId) -> Result<(), TournamentError> {
        let entrant = self
            .entrants
            .get_mut(id)
            .ok_or_else(|| TournamentError::UnknownPlayer(id.clone()))?;
        entrant.score += 1;
        Ok(())
    }

    /// Lend both players' strategies to `f` for one match.
    ///
    /// The two ids must differ.
    pub fn with_strategies<R>(
        &mut self,
        first: &PlayerId,
        second: &PlayerId,
        f: impl FnOnce(&mut dyn Strategy, &mut dyn Strategy) -> R,
    ) -> Result<R, TournamentError> {
        if first == second {
            return Err(TournamentError::DuplicateParticipant(first.clone()));
        }
        let mut a = self.take(first)?;
        let mut b = match self.take(second) {
            Ok(entrant) => entrant,
            Err(err) => {
                self.entrants.insert(first.clone(), a);
                return Err(err);
            }
        };

        let out = f(a.strategy.as_mut(), b.strategy.as_mut());

        self.entrants.insert(first.clone(), a);
        self.entrants.insert(second.clone(), b);
        Ok(out)
    }

    fn take(&mut self, id: &PlayerId) -> Result<Entrant, TournamentError> {
        self.entrants
            .remove(id)
            .ok_or_else(|| TournamentError::UnknownPlayer(id.clone()))
    }

    /// Players ordered by descending score, then name.
    pub fn standings(&self) -> Vec<&Entrant> {
        let mut all: Vec<&Entrant> = self.entrants.values().collect();
        all.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.id.cmp(&b.id)));
        all
    }
}

#[cfg(test)]
#[path = "players_tests.rs"]
mod players_tests;
