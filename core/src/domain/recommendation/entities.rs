use serde::{Deserialize, Serialize};

/// Parsed body of a successful `/get_recommendations` response.
///
/// Every field is optional: a missing field only means the matching section
/// is left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationResult {
    pub dietary_recommendations: Option<String>,
    pub meal_suggestions: Option<MealSuggestions>,
    pub foods_to_avoid: Option<Vec<String>>,
    pub recommended_foods: Option<Vec<String>>,
    pub health_advice: Option<String>,
    pub full_response: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MealSuggestions {
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub dinner: Option<String>,
    pub snacks: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl Meal {
    pub const ALL: [Meal; 4] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::Snacks];

    pub fn title(self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
            Meal::Snacks => "Snacks",
        }
    }
}

impl MealSuggestions {
    pub fn get(&self, meal: Meal) -> Option<&str> {
        match meal {
            Meal::Breakfast => self.breakfast.as_deref(),
            Meal::Lunch => self.lunch.as_deref(),
            Meal::Dinner => self.dinner.as_deref(),
            Meal::Snacks => self.snacks.as_deref(),
        }
    }
}
