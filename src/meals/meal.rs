//! Meal records - the combatants of a battle.
//!
//! A `Meal` is an immutable value. It can only be built through
//! [`Meal::new`], which checks the price and difficulty, and
//! deserialization goes through the same checks.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{BattleError, Result};

/// Unique identifier for a meal in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MealId(pub u32);

impl MealId {
    /// Create a new meal ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MealId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How hard a meal is to prepare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Low,
    Med,
    High,
}

impl Difficulty {
    /// All difficulty levels, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Low, Difficulty::Med, Difficulty::High];

    /// Canonical upper-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Low => "LOW",
            Difficulty::Med => "MED",
            Difficulty::High => "HIGH",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "LOW" => Ok(Difficulty::Low),
            "MED" => Ok(Difficulty::Med),
            "HIGH" => Ok(Difficulty::High),
            other => Err(BattleError::InvalidDifficulty(other.to_string())),
        }
    }
}

/// A meal that can be prepped as a combatant.
///
/// ## Example
///
/// ```
/// use meal_max::meals::{Difficulty, Meal, MealId};
///
/// let sushi = Meal::new(MealId::new(1), "Sushi", "Japanese", 30.0, Difficulty::High).unwrap();
/// assert_eq!(sushi.cuisine(), "Japanese");
///
/// assert!(Meal::new(MealId::new(2), "Air", "None", 0.0, Difficulty::Low).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MealRecord")]
pub struct Meal {
    id: MealId,
    name: String,
    cuisine: String,
    price: f64,
    difficulty: Difficulty,
}

impl Meal {
    /// Create a meal, rejecting non-positive or non-finite prices.
    pub fn new(
        id: MealId,
        name: impl Into<String>,
        cuisine: impl Into<String>,
        price: f64,
        difficulty: Difficulty,
    ) -> Result<Self> {
        validate_price(price)?;
        Ok(Self {
            id,
            name: name.into(),
            cuisine: cuisine.into(),
            price,
            difficulty,
        })
    }

    /// Create a meal from a textual difficulty (`"LOW"`, `"MED"` or `"HIGH"`).
    pub fn parse(
        id: MealId,
        name: impl Into<String>,
        cuisine: impl Into<String>,
        price: f64,
        difficulty: &str,
    ) -> Result<Self> {
        let difficulty = difficulty.parse()?;
        Self::new(id, name, cuisine, price, difficulty)
    }

    #[must_use]
    pub fn id(&self) -> MealId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn cuisine(&self) -> &str {
        &self.cuisine
    }

    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

pub(crate) fn validate_price(price: f64) -> Result<()> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(BattleError::InvalidPrice(price))
    }
}

/// Unchecked wire shape of a meal.
#[derive(Deserialize)]
struct MealRecord {
    id: MealId,
    name: String,
    cuisine: String,
    price: f64,
    difficulty: String,
}

impl TryFrom<MealRecord> for Meal {
    type Error = BattleError;

    fn try_from(record: MealRecord) -> Result<Self> {
        Meal::parse(record.id, record.name, record.cuisine, record.price, &record.difficulty)
    }
}
