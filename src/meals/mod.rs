//! Meals and the meal catalog.
//!
//! - `Meal`: validated, immutable combatant record
//! - `Kitchen`: in-memory catalog that also keeps win/loss statistics

mod kitchen;
mod meal;

pub use kitchen::{Kitchen, LeaderboardEntry, LeaderboardSort, MealStats};
pub use meal::{Difficulty, Meal, MealId};
