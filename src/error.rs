//! Crate error type.

use thiserror::Error;

use crate::meals::MealId;

#[derive(Error, Debug)]
pub enum BattleError {
    #[error("Combatant list is full, cannot add more combatants.")]
    CapacityError,

    #[error("Two combatants must be prepped for a battle.")]
    InsufficientCombatants,

    #[error("Invalid price: {0}. Price must be a positive number.")]
    InvalidPrice(f64),

    #[error("Invalid difficulty level: {0}. Must be 'LOW', 'MED', or 'HIGH'.")]
    InvalidDifficulty(String),

    #[error("Meal with name '{0}' already exists")]
    DuplicateMeal(String),

    #[error("Meal with ID {0} not found")]
    MealNotFound(MealId),

    #[error("Meal with name '{0}' not found")]
    MealNameNotFound(String),

    #[error("Meal with ID {0} has been deleted")]
    MealDeleted(MealId),

    #[error("Meal catalog is full, no IDs left to assign")]
    CatalogFull,

    #[error("Invalid sort_by parameter: {0}")]
    InvalidSortField(String),

    #[error("Invalid battle config: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse battle config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, BattleError>;
