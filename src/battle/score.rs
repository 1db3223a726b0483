//! Battle score computation.
//!
//! `score = price * cuisine_length - difficulty_modifier`
//!
//! Pricier meals and longer cuisine names hit harder. The difficulty
//! modifier is a penalty that shrinks as preparation gets harder, so
//! skilled dishes lose less.

use crate::meals::{Difficulty, Meal};

/// Penalty subtracted from the raw score.
#[must_use]
pub const fn difficulty_modifier(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::High => 1,
        Difficulty::Med => 2,
        Difficulty::Low => 3,
    }
}

/// Compute a meal's battle score.
///
/// Cuisine length counts characters, not bytes.
///
/// ```
/// use meal_max::battle::get_battle_score;
/// use meal_max::meals::{Difficulty, Meal, MealId};
///
/// let sushi = Meal::new(MealId::new(1), "Sushi", "Japanese", 30.0, Difficulty::High).unwrap();
/// assert_eq!(get_battle_score(&sushi), 239.0);
/// ```
#[must_use]
pub fn get_battle_score(meal: &Meal) -> f64 {
    let cuisine_len = meal.cuisine().chars().count() as f64;
    meal.price() * cuisine_len - f64::from(difficulty_modifier(meal.difficulty()))
}
