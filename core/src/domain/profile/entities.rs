use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Answer to "Are you vegetarian?". Starts unset until the user picks one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VegetarianChoice {
    #[default]
    Unset,
    Yes,
    No,
}

impl VegetarianChoice {
    pub fn is_vegetarian(self) -> bool {
        matches!(self, VegetarianChoice::Yes)
    }

    pub fn label(self) -> &'static str {
        match self {
            VegetarianChoice::Unset => "Not specified",
            VegetarianChoice::Yes => "Yes, I follow a vegetarian diet",
            VegetarianChoice::No => "No, I eat meat and fish",
        }
    }
}

/// Only "yes" and "no" (or "y"/"n") pick a side; anything else leaves the
/// choice unset.
impl FromStr for VegetarianChoice {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => VegetarianChoice::Yes,
            "no" | "n" => VegetarianChoice::No,
            _ => VegetarianChoice::Unset,
        })
    }
}

impl fmt::Display for VegetarianChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            VegetarianChoice::Unset => "unset",
            VegetarianChoice::Yes => "yes",
            VegetarianChoice::No => "no",
        };
        write!(f, "{value}")
    }
}

/// The health profile a user fills in before asking for recommendations.
///
/// Values are kept exactly as typed; trimming only happens when deciding
/// whether the profile can be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileInput {
    pub health_conditions: String,
    pub allergies: String,
    pub is_vegetarian: VegetarianChoice,
}

impl ProfileInput {
    pub fn new(
        health_conditions: impl Into<String>,
        allergies: impl Into<String>,
        is_vegetarian: VegetarianChoice,
    ) -> Self {
        Self {
            health_conditions: health_conditions.into(),
            allergies: allergies.into(),
            is_vegetarian,
        }
    }

    pub fn is_submittable(&self) -> bool {
        !self.health_conditions.trim().is_empty() || !self.allergies.trim().is_empty()
    }
}
