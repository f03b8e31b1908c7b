//! Single-elimination scheduling.
//!
//! Round 0 pairs a shuffled roster. Every later round pairs the players that
//! advanced out of the previous one, lowest score first. A round with an odd
//! pool gets a filler `RandomPlayer<uuid>`. The tournament is over once a
//! played round had a single bracket.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use random_strategy::RandomStrategy;
use tracing::{debug, info, instrument, warn};
use ttt_core::PlayerId;

use crate::bracket::{Bracket, Round};
use crate::config::TournamentConfig;
use crate::error::TournamentError;
use crate::match_runner::{MatchConfig, MatchRunner};
use crate::players::PlayerTable;
use crate::registry::{StrategyRegistry, FILLER_STRATEGY};
use crate::results::TournamentResults;

pub struct Tournament {
    config: TournamentConfig,
    players: PlayerTable,
    /// Every round created so far; the last one may still be unplayed
    rounds: Vec<Round>,
    /// Number of rounds played
    current_round: u32,
    rng: StdRng,
}

impl Tournament {
    /// Validate the roster and build one strategy instance per participant.
    pub fn new(
        config: TournamentConfig,
        registry: &StrategyRegistry,
    ) -> Result<Self, TournamentError> {
        config.validate(registry)?;

        let mut players = PlayerTable::new();
        for participant in &config.participants {
            let strategy = registry.create(&participant.strategy).ok_or_else(|| {
                TournamentError::UnknownStrategy {
                    participant: participant.name.clone(),
                    strategy: participant.strategy.clone(),
                }
            })?;
            players.insert(participant.id(), participant.strategy.as_str(), strategy)?;
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            players,
            rounds: Vec::new(),
            current_round: 0,
            rng,
        })
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn players(&self) -> &PlayerTable {
        &self.players
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Rounds played so far.
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn set_advance_default_players(&mut self, advance: bool) {
        self.config.advance_default_players = advance;
    }

    /// True once the most recently played round had exactly one bracket.
    pub fn is_finished(&self) -> bool {
        self.current_round > 0
            && self
                .rounds
                .get(self.current_round as usize - 1)
                .is_some_and(|round| round.brackets.len() == 1)
    }

    /// Build the brackets for the next round.
    ///
    /// Fails if that round already exists, or if nobody is left to pair.
    #[instrument(skip(self), fields(round = self.current_round))]
    pub fn create_next_round(&mut self) -> Result<&Round, TournamentError> {
        let round = self.current_round;
        if self.rounds.len() > round as usize {
            return Err(TournamentError::RoundAlreadyCreated(round));
        }

        let pool = if round == 0 {
            self.opening_pool()?
        } else {
            self.advancing_pool(round)?
        };

        let brackets: Vec<Bracket> = pool
            .chunks_exact(2)
            .map(|pair| Bracket::new(pair[0].clone(), pair[1].clone()))
            .collect();
        debug!(brackets = brackets.len(), "round created");

        self.rounds.push(Round::new(round, brackets));
        let created = self.rounds.len() - 1;
        Ok(&self.rounds[created])
    }

    /// The whole roster, padded to even and shuffled.
    fn opening_pool(&mut self) -> Result<Vec<PlayerId>, TournamentError> {
        let mut pool: Vec<PlayerId> = self.config.participants.iter().map(|p| p.id()).collect();
        if pool.is_empty() {
            return Err(TournamentError::EmptyRoster);
        }
        if pool.len() % 2 == 1 {
            pool.push(self.add_filler()?);
        }
        pool.shuffle(&mut self.rng);
        Ok(pool)
    }

    /// Players advancing out of the previous round, padded to even and
    /// sorted by ascending score. The sort is stable, so equal scores keep
    /// bracket order.
    fn advancing_pool(&mut self, round: u32) -> Result<Vec<PlayerId>, TournamentError> {
        let previous = round - 1;
        let mut pool = self
            .rounds
            .get(previous as usize)
            .map(Round::advancing_players)
            .unwrap_or_default();

        if !self.config.advance_default_players {
            let players = &self.players;
            pool.retain(|id| !players.is_filler(id).unwrap_or(false));
        }
        if pool.is_empty() {
            return Err(TournamentError::NoAdvancingPlayers { round: previous });
        }
        if pool.len() % 2 == 1 {
            pool.push(self.add_filler()?);
        }

        let mut scored = pool
            .into_iter()
            .map(|id| Ok((self.players.score(&id)?, id)))
            .collect::<Result<Vec<_>, TournamentError>>()?;
        scored.sort_by_key(|(score, _)| *score);
        Ok(scored.into_iter().map(|(_, id)| id).collect())
    }

    fn add_filler(&mut self) -> Result<PlayerId, TournamentError> {
        let id = self
            .players
            .insert_filler(FILLER_STRATEGY, Box::new(RandomStrategy::new()))?;
        info!(player = %id, "added filler player");
        Ok(id)
    }

    /// Play every bracket of the pending round, then advance the counter.
    #[instrument(skip(self), fields(round = self.current_round))]
    pub fn play_round(&mut self) -> Result<(), TournamentError> {
        let round_number = self.current_round;
        let round = self
            .rounds
            .get_mut(round_number as usize)
            .ok_or(TournamentError::NoPendingRound(round_number))?;

        info!(brackets = round.brackets.len(), "playing round {}", round_number);
        let runner = MatchRunner::new(MatchConfig::from(&self.config));
        for (idx, bracket) in round.brackets.iter_mut().enumerate() {
            debug!(
                bracket = idx,
                "playing bracket {} against {}",
                bracket.player1,
                bracket.player2
            );
            runner.run_bracket(bracket, &mut self.players, round_number)?;
        }

        self.current_round += 1;
        Ok(())
    }

    /// Create and play rounds until one is left with a single bracket.
    ///
    /// Stops early after `max_rounds` rounds, since drawn brackets advance
    /// both players and a pool of mutual ties never shrinks.
    pub fn run(&mut self) -> Result<TournamentResults, TournamentError> {
        while !self.is_finished() {
            if self.current_round >= self.config.max_rounds {
                warn!(rounds = self.current_round, "round limit reached without a final");
                break;
            }
            self.create_next_round()?;
            self.play_round()?;
        }

        let results = self.results();
        info!(
            rounds = results.number_of_rounds,
            winner = %results.winner_name,
            "tournament finished"
        );
        Ok(results)
    }

    /// Snapshot of everything played so far.
    pub fn results(&self) -> TournamentResults {
        TournamentResults::new(self.config.board_size, self.rounds.clone())
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
