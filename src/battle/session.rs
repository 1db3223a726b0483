//! A single battle session: one roster, one resolver, one stats recorder.

use super::resolver::{BattleOutcome, BattleResolver};
use super::roster::CombatantRoster;
use super::{DiscardStats, StatsRecorder};
use crate::core::{BattleConfig, BattleRng, RandomSource};
use crate::error::Result;
use crate::meals::Meal;

/// Owns everything one battle session mutates.
///
/// Sessions share nothing, so independent sessions can run side by side
/// (give each its own forked [`BattleRng`]).
///
/// ## Example
///
/// ```
/// use meal_max::battle::BattleSession;
/// use meal_max::core::BattleConfig;
/// use meal_max::meals::{Difficulty, Kitchen};
///
/// let mut kitchen = Kitchen::new();
/// let sushi = kitchen.create_meal("Sushi", "Japanese", 30.0, Difficulty::High).unwrap();
/// let pizza = kitchen.create_meal("Pizza", "Italian", 10.0, Difficulty::Med).unwrap();
///
/// let mut session = BattleSession::with_stats(BattleConfig::default().with_seed(1), kitchen).unwrap();
/// let a = session.stats().get_meal_by_id(sushi).unwrap().clone();
/// let b = session.stats().get_meal_by_id(pizza).unwrap().clone();
/// session.prep_combatant(a).unwrap();
/// session.prep_combatant(b).unwrap();
///
/// let winner = session.battle().unwrap();
/// assert!(winner == "Sushi" || winner == "Pizza");
/// assert_eq!(session.get_combatants().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct BattleSession<R = BattleRng, S = DiscardStats> {
    roster: CombatantRoster,
    resolver: BattleResolver<R>,
    stats: S,
}

impl BattleSession<BattleRng, DiscardStats> {
    /// Session that does not track stats, with the RNG the config describes.
    pub fn new(config: BattleConfig) -> Result<Self> {
        Self::with_stats(config, DiscardStats)
    }
}

impl<S: StatsRecorder> BattleSession<BattleRng, S> {
    /// Session recording results into `stats`.
    pub fn with_stats(config: BattleConfig, stats: S) -> Result<Self> {
        let rng = config.build_rng();
        Self::from_parts(rng, stats, config)
    }
}

impl<R: RandomSource, S: StatsRecorder> BattleSession<R, S> {
    /// Session from explicit collaborators.
    ///
    /// Fails if `config` does not validate.
    pub fn from_parts(rng: R, stats: S, config: BattleConfig) -> Result<Self> {
        Ok(Self {
            roster: CombatantRoster::new(),
            resolver: BattleResolver::new(rng, config)?,
            stats,
        })
    }

    /// See [`CombatantRoster::prep_combatant`].
    pub fn prep_combatant(&mut self, meal: Meal) -> Result<()> {
        self.roster.prep_combatant(meal)
    }

    pub fn clear_combatants(&mut self) {
        self.roster.clear_combatants();
    }

    #[must_use]
    pub fn get_combatants(&self) -> &[Meal] {
        self.roster.get_combatants()
    }

    #[must_use]
    pub fn get_battle_score(&self, meal: &Meal) -> f64 {
        self.resolver.get_battle_score(meal)
    }

    /// Fight the prepped combatants and return the winner's name.
    pub fn battle(&mut self) -> Result<String> {
        self.resolve().map(|outcome| outcome.winner.name().to_string())
    }

    /// Fight the prepped combatants and return the full outcome.
    pub fn resolve(&mut self) -> Result<BattleOutcome> {
        self.resolver.resolve(&mut self.roster, &mut self.stats)
    }

    #[must_use]
    pub fn roster(&self) -> &CombatantRoster {
        &self.roster
    }

    #[must_use]
    pub fn resolver(&self) -> &BattleResolver<R> {
        &self.resolver
    }

    #[must_use]
    pub fn stats(&self) -> &S {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut S {
        &mut self.stats
    }

    /// End the session, handing back the stats recorder.
    pub fn into_stats(self) -> S {
        self.stats
    }
}
