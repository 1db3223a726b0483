//! Battle resolution.
//!
//! ## Decision rule
//!
//! The higher-scoring combatant is the favourite (the first one on a tie).
//! With `gap = |score_a - score_b|`:
//!
//! ```text
//! edge = min(gap / score_scale, max_edge)
//! favourite wins  <=>  draw < 0.5 + edge
//! ```
//!
//! The favourite's chance grows linearly with the gap and is capped at
//! `0.5 + max_edge`, so with the default `max_edge` of 0.49 an upset always
//! keeps at least a 1% chance.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::roster::CombatantRoster;
use super::score::get_battle_score;
use super::StatsRecorder;
use crate::core::{BattleConfig, RandomSource};
use crate::error::{BattleError, Result};
use crate::meals::Meal;

/// Record of one resolved battle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub winner: Meal,
    pub loser: Meal,
    pub winner_score: f64,
    pub loser_score: f64,
    /// Chance the favourite had of winning.
    pub favourite_win_probability: f64,
    /// Uniform draw that decided the battle.
    pub draw: f64,
    /// True when the lower-scoring combatant won.
    pub upset: bool,
}

/// Scores combatants and picks a winner.
#[derive(Clone, Debug)]
pub struct BattleResolver<R> {
    rng: R,
    config: BattleConfig,
}

impl<R: RandomSource> BattleResolver<R> {
    /// Create a resolver drawing from `rng`.
    ///
    /// Fails with [`BattleError::InvalidConfig`] if `config` does not validate.
    pub fn new(rng: R, config: BattleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { rng, config })
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Battle score of a meal. See [`get_battle_score`].
    #[must_use]
    pub fn get_battle_score(&self, meal: &Meal) -> f64 {
        get_battle_score(meal)
    }

    /// Probability that the favourite wins given the score gap.
    ///
    /// Non-decreasing in `|score_gap|`, always within `[0.5, 0.5 + max_edge]`.
    #[must_use]
    pub fn win_probability(&self, score_gap: f64) -> f64 {
        let edge = (score_gap.abs() / self.config.score_scale).min(self.config.max_edge);
        0.5 + edge
    }

    /// Fight the two prepped combatants.
    ///
    /// Records the result through `stats` in one call, then evicts the loser
    /// so the roster holds only the winner. Any error leaves the roster as it
    /// was.
    pub fn resolve<S>(&mut self, roster: &mut CombatantRoster, stats: &mut S) -> Result<BattleOutcome>
    where
        S: StatsRecorder + ?Sized,
    {
        let [first, second] = roster.get_combatants() else {
            warn!(combatants = roster.len(), "battle requested without two combatants");
            return Err(BattleError::InsufficientCombatants);
        };

        let scores = [get_battle_score(first), get_battle_score(second)];
        let favourite = if scores[0] >= scores[1] { 0 } else { 1 };
        let probability = self.win_probability(scores[0] - scores[1]);
        let draw = self.rng.next_unit();

        let upset = draw >= probability;
        let winner_idx = if upset { 1 - favourite } else { favourite };
        let loser_idx = 1 - winner_idx;

        let combatants = [first, second];
        let winner = combatants[winner_idx].clone();
        let loser = combatants[loser_idx].clone();

        stats.record_battle(winner.id(), loser.id())?;
        roster.evict(loser_idx);

        info!(
            winner = winner.name(),
            loser = loser.name(),
            winner_score = scores[winner_idx],
            loser_score = scores[loser_idx],
            probability,
            draw,
            upset,
            "battle resolved"
        );

        Ok(BattleOutcome {
            winner,
            loser,
            winner_score: scores[winner_idx],
            loser_score: scores[loser_idx],
            favourite_win_probability: probability,
            draw,
            upset,
        })
    }
}
