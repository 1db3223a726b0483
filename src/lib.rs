//! # meal-max
//!
//! Two meals enter, one meal leaves.
//!
//! Each meal gets a deterministic battle score from its price, cuisine and
//! difficulty. A battle between the two prepped combatants is decided by a
//! single uniform draw biased toward the higher score, so favourites usually
//! win but upsets stay possible.
//!
//! ## Design Principles
//!
//! 1. **No global state**: rosters, random sources and stats sinks are
//!    values owned by a `BattleSession`. Concurrent sessions share nothing.
//!
//! 2. **Injectable randomness**: battles draw through `RandomSource`, so
//!    tests can script exact outcomes and runs can be replayed by seed.
//!
//! 3. **Validated records**: a `Meal` cannot exist with a non-positive price
//!    or an unknown difficulty.
//!
//! ## Modules
//!
//! - `core`: random sources and battle configuration
//! - `meals`: meal records and the in-memory `Kitchen` catalog
//! - `battle`: roster, scoring, resolution and sessions
//! - `logging`: `tracing` subscriber setup

pub mod battle;
pub mod core;
pub mod error;
pub mod logging;
pub mod meals;

// Re-export commonly used types
pub use crate::core::{BattleConfig, BattleRng, BattleRngState, RandomSource, ScriptedSource};

pub use crate::meals::{Difficulty, Kitchen, LeaderboardEntry, LeaderboardSort, Meal, MealId, MealStats};

pub use crate::battle::{
    get_battle_score, BattleOutcome, BattleResolver, BattleResult, BattleSession, CombatantRoster,
    DiscardStats, StatsRecorder, ROSTER_CAPACITY,
};

pub use crate::error::{BattleError, Result};
