//! Meal battles.
//!
//! - `CombatantRoster`: the two slots a battle is fought from
//! - `score`: deterministic battle score of a meal
//! - `BattleResolver`: probabilistic decision biased toward the higher score
//! - `BattleSession`: roster, resolver and stats recorder bundled together
//!
//! Results are reported through the [`StatsRecorder`] trait so the resolver
//! never depends on where meal records live.

mod resolver;
mod roster;
mod score;
mod session;

pub use resolver::{BattleOutcome, BattleResolver};
pub use roster::{CombatantRoster, ROSTER_CAPACITY};
pub use score::{difficulty_modifier, get_battle_score};
pub use session::BattleSession;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::meals::MealId;

/// Result of a battle from one combatant's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleResult {
    Win,
    Loss,
}

/// Sink for battle results.
///
/// Implemented by the meal catalog. `record_battle` must apply both sides
/// or neither: an error aborts the battle before the roster is touched.
pub trait StatsRecorder {
    fn record_battle(&mut self, winner: MealId, loser: MealId) -> Result<()>;
}

impl<S: StatsRecorder + ?Sized> StatsRecorder for &mut S {
    fn record_battle(&mut self, winner: MealId, loser: MealId) -> Result<()> {
        (**self).record_battle(winner, loser)
    }
}

/// Recorder that drops every result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiscardStats;

impl StatsRecorder for DiscardStats {
    fn record_battle(&mut self, _winner: MealId, _loser: MealId) -> Result<()> {
        Ok(())
    }
}
