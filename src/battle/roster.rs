//! Two-slot combatant roster.

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::error::{BattleError, Result};
use crate::meals::Meal;

/// Maximum number of combatants in a roster.
pub const ROSTER_CAPACITY: usize = 2;

/// Ordered list of at most two prepped meals.
///
/// Order only decides which combatant is "first" and "second"; it never
/// gives priority in a battle.
///
/// ## Example
///
/// ```
/// use meal_max::battle::CombatantRoster;
/// use meal_max::meals::{Difficulty, Meal, MealId};
///
/// let mut roster = CombatantRoster::new();
/// let soup = Meal::new(MealId::new(1), "Soup", "French", 8.0, Difficulty::Low).unwrap();
///
/// roster.prep_combatant(soup.clone()).unwrap();
/// roster.prep_combatant(soup.clone()).unwrap();
/// assert!(roster.prep_combatant(soup).is_err());
/// assert_eq!(roster.get_combatants().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CombatantRoster {
    combatants: SmallVec<[Meal; ROSTER_CAPACITY]>,
}

impl CombatantRoster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a combatant at the end of the roster.
    ///
    /// Fails with [`BattleError::CapacityError`] when two are already prepped;
    /// the roster is left untouched.
    pub fn prep_combatant(&mut self, meal: Meal) -> Result<()> {
        if self.is_full() {
            warn!(meal = meal.name(), "roster full, combatant rejected");
            return Err(BattleError::CapacityError);
        }
        debug!(meal_id = %meal.id(), meal = meal.name(), slot = self.combatants.len(), "combatant prepped");
        self.combatants.push(meal);
        Ok(())
    }

    /// Remove every combatant.
    pub fn clear_combatants(&mut self) {
        if !self.combatants.is_empty() {
            debug!(count = self.combatants.len(), "combatants cleared");
        }
        self.combatants.clear();
    }

    /// Current combatants in insertion order.
    #[must_use]
    pub fn get_combatants(&self) -> &[Meal] {
        &self.combatants
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.combatants.len() >= ROSTER_CAPACITY
    }

    /// Remove and return the combatant at `index`.
    pub(crate) fn evict(&mut self, index: usize) -> Meal {
        self.combatants.remove(index)
    }
}
