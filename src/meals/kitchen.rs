//! In-memory meal catalog with battle statistics.
//!
//! The `Kitchen` stores meals, hands out IDs, tracks wins and losses and
//! builds the leaderboard. Deletion is soft: a deleted meal keeps its
//! name and stats but can no longer be looked up or battled.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::str::FromStr;
use tracing::{debug, info};

use super::meal::{Difficulty, Meal, MealId};
use crate::battle::{BattleResult, StatsRecorder};
use crate::error::{BattleError, Result};

/// Win/loss counters for one meal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MealStats {
    pub battles: u32,
    pub wins: u32,
}

impl MealStats {
    /// Win percentage rounded to one decimal place. Zero before any battle.
    #[must_use]
    pub fn win_pct(&self) -> f64 {
        if self.battles == 0 {
            return 0.0;
        }
        let pct = f64::from(self.wins) / f64::from(self.battles) * 100.0;
        (pct * 10.0).round() / 10.0
    }
}

/// Leaderboard ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeaderboardSort {
    #[default]
    Wins,
    WinPct,
}

impl FromStr for LeaderboardSort {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wins" => Ok(LeaderboardSort::Wins),
            "win_pct" => Ok(LeaderboardSort::WinPct),
            other => Err(BattleError::InvalidSortField(other.to_string())),
        }
    }
}

/// One row of the leaderboard.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub meal: Meal,
    pub battles: u32,
    pub wins: u32,
    pub win_pct: f64,
}

#[derive(Clone, Debug)]
struct Entry {
    meal: Meal,
    stats: MealStats,
    deleted: bool,
}

/// Meal catalog.
///
/// ## Example
///
/// ```
/// use meal_max::meals::{Difficulty, Kitchen};
///
/// let mut kitchen = Kitchen::new();
/// let id = kitchen.create_meal("Sushi", "Japanese", 30.0, Difficulty::High).unwrap();
///
/// assert_eq!(kitchen.get_meal_by_id(id).unwrap().name(), "Sushi");
/// assert!(kitchen.create_meal("Sushi", "Fusion", 12.0, Difficulty::Low).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Kitchen {
    meals: FxHashMap<MealId, Entry>,
    names: FxHashMap<String, MealId>,
    last_id: u32,
}

impl Kitchen {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a meal and return its ID. IDs start at 1.
    ///
    /// Names are unique across the catalog, deleted meals included.
    pub fn create_meal(
        &mut self,
        name: impl Into<String>,
        cuisine: impl Into<String>,
        price: f64,
        difficulty: Difficulty,
    ) -> Result<MealId> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(BattleError::DuplicateMeal(name));
        }

        let next = self.last_id.checked_add(1).ok_or(BattleError::CatalogFull)?;
        let id = MealId::new(next);
        let meal = Meal::new(id, name.clone(), cuisine, price, difficulty)?;
        self.last_id = next;

        info!(meal_id = %id, name = %name, "meal created");
        self.names.insert(name, id);
        self.meals.insert(
            id,
            Entry {
                meal,
                stats: MealStats::default(),
                deleted: false,
            },
        );
        Ok(id)
    }

    /// Remove every meal and restart ID allocation.
    pub fn clear_meals(&mut self) {
        info!(count = self.meals.len(), "clearing meal catalog");
        self.meals.clear();
        self.names.clear();
        self.last_id = 0;
    }

    /// Soft-delete a meal.
    pub fn delete_meal(&mut self, id: MealId) -> Result<()> {
        let entry = self.live_entry_mut(id)?;
        entry.deleted = true;
        info!(meal_id = %id, "meal deleted");
        Ok(())
    }

    /// Look up a live meal by ID.
    pub fn get_meal_by_id(&self, id: MealId) -> Result<&Meal> {
        let entry = self.meals.get(&id).ok_or(BattleError::MealNotFound(id))?;
        if entry.deleted {
            return Err(BattleError::MealDeleted(id));
        }
        Ok(&entry.meal)
    }

    /// Look up a live meal by name.
    pub fn get_meal_by_name(&self, name: &str) -> Result<&Meal> {
        let id = self
            .names
            .get(name)
            .copied()
            .ok_or_else(|| BattleError::MealNameNotFound(name.to_string()))?;
        self.get_meal_by_id(id)
    }

    /// Battle statistics of a live meal.
    pub fn get_meal_stats(&self, id: MealId) -> Result<MealStats> {
        self.get_meal_by_id(id)?;
        Ok(self.meals[&id].stats)
    }

    /// Record a battle result for a live meal.
    pub fn update_meal_stats(&mut self, id: MealId, result: BattleResult) -> Result<()> {
        let entry = self.live_entry_mut(id)?;
        entry.stats.battles += 1;
        if result == BattleResult::Win {
            entry.stats.wins += 1;
        }
        debug!(meal_id = %id, ?result, battles = entry.stats.battles, wins = entry.stats.wins, "meal stats updated");
        Ok(())
    }

    /// Record one battle: a win for `winner` and a loss for `loser`.
    ///
    /// Both meals are checked before either is touched, so a failure leaves
    /// every counter as it was.
    pub fn record_battle(&mut self, winner: MealId, loser: MealId) -> Result<()> {
        self.live_entry_mut(winner)?;
        self.live_entry_mut(loser)?;
        self.update_meal_stats(winner, BattleResult::Win)?;
        self.update_meal_stats(loser, BattleResult::Loss)
    }

        /// Live meals that have fought at least once, best first.
    ///
    /// Ties are ordered by meal ID so the output is stable.
    #[must_use]
    pub fn get_leaderboard(&self, sort: LeaderboardSort) -> Vec<LeaderboardEntry> {
        let mut board: Vec<LeaderboardEntry> = self
            .meals
            .values()
            .filter(|e| !e.deleted && e.stats.battles > 0)
            .map(|e| LeaderboardEntry {
                meal: e.meal.clone(),
                battles: e.stats.battles,
                wins: e.stats.wins,
                win_pct: e.stats.win_pct(),
            })
            .collect();

        board.sort_by(|a, b| {
            let primary = match sort {
                LeaderboardSort::Wins => b.wins.cmp(&a.wins),
                LeaderboardSort::WinPct => b.win_pct.total_cmp(&a.win_pct),
            };
            primary.then_with(|| a.meal.id().cmp(&b.meal.id()))
        });
        board
    }

    /// Number of meals stored, deleted ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    fn live_entry_mut(&mut self, id: MealId) -> Result<&mut Entry> {
        let entry = self.meals.get_mut(&id).ok_or(BattleError::MealNotFound(id))?;
        if entry.deleted {
            return Err(BattleError::MealDeleted(id));
        }
        Ok(entry)
    }
}

impl StatsRecorder for Kitchen {
    fn record_battle(&mut self, winner: MealId, loser: MealId) -> Result<()> {
        Kitchen::record_battle(self, winner, loser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stocked() -> (Kitchen, MealId, MealId) {
        let mut kitchen = Kitchen::new();
        let sushi = kitchen.create_meal("Sushi", "Japanese", 30.0, Difficulty::High).unwrap();
        let pizza = kitchen.create_meal("Pizza", "Italian", 10.0, Difficulty::Med).unwrap();
        (kitchen, sushi, pizza)
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let (kitchen, sushi, pizza) = stocked();
        assert_eq!(sushi, MealId::new(1));
        assert_eq!(pizza, MealId::new(2));
        assert_eq!(kitchen.len(), 2);
    }

    #[test]
    fn test_create_rejects_bad_price_without_consuming_id() {
        let mut kitchen = Kitchen::new();
        let result = kitchen.create_meal("Water", "None", 0.0, Difficulty::Low);
        assert!(matches!(result, Err(BattleError::InvalidPrice(_))));
        assert!(kitchen.is_empty());

        let id = kitchen.create_meal("Tea", "Chinese", 2.0, Difficulty::Low).unwrap();
        assert_eq!(id, MealId::new(1));
    }

    #[test]
    fn test_duplicate_name() {
        let (mut kitchen, _, _) = stocked();
        let result = kitchen.create_meal("Pizza", "American", 8.0, Difficulty::Low);
        assert!(matches!(result, Err(BattleError::DuplicateMeal(n)) if n == "Pizza"));
    }

    #[test]
    fn test_lookup() {
        let (kitchen, sushi, _) = stocked();
        assert_eq!(kitchen.get_meal_by_name("Sushi").unwrap().id(), sushi);
        assert!(matches!(
            kitchen.get_meal_by_id(MealId::new(99)),
            Err(BattleError::MealNotFound(_))
        ));
        assert!(matches!(
            kitchen.get_meal_by_name("Tacos"),
            Err(BattleError::MealNameNotFound(_))
        ));
    }

    #[test]
    fn test_soft_delete() {
        let (mut kitchen, sushi, _) = stocked();
        kitchen.delete_meal(sushi).unwrap();

        assert!(matches!(kitchen.get_meal_by_id(sushi), Err(BattleError::MealDeleted(_))));
        assert!(matches!(kitchen.get_meal_by_name("Sushi"), Err(BattleError::MealDeleted(_))));
        assert!(matches!(kitchen.delete_meal(sushi), Err(BattleError::MealDeleted(_))));
        assert!(matches!(
            kitchen.update_meal_stats(sushi, BattleResult::Win),
            Err(BattleError::MealDeleted(_))
        ));
        // The name stays taken
        assert!(kitchen.create_meal("Sushi", "Japanese", 20.0, Difficulty::Low).is_err());
    }

    #[test]
    fn test_update_stats() {
        let (mut kitchen, sushi, _) = stocked();
        kitchen.update_meal_stats(sushi, BattleResult::Win).unwrap();
        kitchen.update_meal_stats(sushi, BattleResult::Loss).unwrap();
        kitchen.update_meal_stats(sushi, BattleResult::Win).unwrap();

        let stats = kitchen.get_meal_stats(sushi).unwrap();
        assert_eq!(stats, MealStats { battles: 3, wins: 2 });
        assert_eq!(stats.win_pct(), 66.7);
    }

    #[test]
    fn test_record_battle() {
        let (mut kitchen, sushi, pizza) = stocked();
        kitchen.record_battle(sushi, pizza).unwrap();

        assert_eq!(kitchen.get_meal_stats(sushi).unwrap(), MealStats { battles: 1, wins: 1 });
        assert_eq!(kitchen.get_meal_stats(pizza).unwrap(), MealStats { battles: 1, wins: 0 });
    }

    #[test]
    fn test_record_battle_is_all_or_nothing() {
        let (mut kitchen, sushi, pizza) = stocked();
        kitchen.delete_meal(pizza).unwrap();

        assert!(matches!(kitchen.record_battle(sushi, pizza), Err(BattleError::MealDeleted(id)) if id == pizza));
        assert!(matches!(
            kitchen.record_battle(sushi, MealId::new(99)),
            Err(BattleError::MealNotFound(_))
        ));
        assert_eq!(kitchen.get_meal_stats(sushi).unwrap(), MealStats::default());
    }

    #[test]
    fn test_create_when_ids_exhausted() {
        let mut kitchen = Kitchen::new();
        kitchen.last_id = u32::MAX;

        let result = kitchen.create_meal("Last", "Any", 1.0, Difficulty::Low);
        assert!(matches!(result, Err(BattleError::CatalogFull)));
        assert!(kitchen.is_empty());
        assert!(kitchen.get_meal_by_name("Last").is_err());
    }

        #[test]
    fn test_win_pct_without_battles() {
        assert_eq!(MealStats::default().win_pct(), 0.0);
    }

    #[test]
    fn test_clear_meals() {
        let (mut kitchen, _, _) = stocked();
        kitchen.clear_meals();
        assert!(kitchen.is_empty());
        assert_eq!(
            kitchen.create_meal("Pizza", "Italian", 10.0, Difficulty::Med).unwrap(),
            MealId::new(1)
        );
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!("wins".parse::<LeaderboardSort>().unwrap(), LeaderboardSort::Wins);
        assert_eq!("win_pct".parse::<LeaderboardSort>().unwrap(), LeaderboardSort::WinPct);
        assert!(matches!(
            "losses".parse::<LeaderboardSort>(),
            Err(BattleError::InvalidSortField(s)) if s == "losses"
        ));
    }
}
