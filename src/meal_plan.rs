//! Weekly meal plan input and the recipe records the engine consumes.

use crate::consolidator::effective_servings;
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One recipe as handed to list generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeInput {
    pub name: String,
    /// Multiplier applied to every quantity of the recipe
    #[serde(default = "default_servings")]
    pub servings: f64,
    #[serde(default)]
    pub ingredient_lines: Vec<String>,
}

impl RecipeInput {
    pub fn new(name: impl Into<String>, servings: f64, ingredient_lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            servings,
            ingredient_lines,
        }
    }
}

fn default_servings() -> f64 {
    1.0
}

/// A meal scheduled on some day of the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub name: String,
    #[serde(default = "default_servings")]
    pub servings: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: Weekday,
    #[serde(default)]
    pub meals: Vec<PlannedMeal>,
}

/// A week of planned meals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    #[serde(default)]
    pub week_start: Option<NaiveDate>,
    #[serde(default)]
    pub days: Vec<DayPlan>,
}

impl MealPlan {
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let plan: MealPlan = serde_json::from_str(json)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Reject plans that list the same weekday twice
    pub fn validate(&self) -> AppResult<()> {
        let mut seen: Vec<Weekday> = Vec::with_capacity(self.days.len());
        for day in &self.days {
            if seen.contains(&day.day) {
                return Err(AppError::Validation(format!(
                    "Meal plan lists {} more than once",
                    day.day
                )));
            }
            seen.push(day.day);
        }
        Ok(())
    }

    /// Flatten the week into recipes, Monday first
    ///
    /// Meals keep their order within a day. Invalid servings count as one.
    pub fn to_recipes(&self) -> Vec<RecipeInput> {
        let mut days: Vec<&DayPlan> = self.days.iter().collect();
        days.sort_by_key(|d| d.day.num_days_from_monday());

        days.into_iter()
            .flat_map(|day| day.meals.iter())
            .map(|meal| RecipeInput {
                name: meal.name.clone(),
                servings: effective_servings(meal.servings),
                ingredient_lines: meal.ingredients.clone(),
            })
            .collect()
    }

    /// Date of a weekday within the plan's week, when the week start is known
    pub fn date_of(&self, day: Weekday) -> Option<NaiveDate> {
        let start = self.week_start?;
        let offset = (7 + day.num_days_from_monday() - start.weekday().num_days_from_monday()) % 7;
        start.checked_add_days(Days::new(u64::from(offset)))
    }

    pub fn meal_count(&self) -> usize {
        self.days.iter().map(|d| d.meals.len()).sum()
    }
}
