use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use nourish_core::domain::profile::entities::{ProfileInput, VegetarianChoice};

const VEGETARIAN_CHOICES: [VegetarianChoice; 3] = [
    VegetarianChoice::Unset,
    VegetarianChoice::No,
    VegetarianChoice::Yes,
];

/// Asks for the three profile fields, pre-filled with the current values.
/// Blocks on stdin; run it off the async runtime.
pub fn edit_profile(current: ProfileInput) -> Result<ProfileInput, dialoguer::Error> {
    let theme = ColorfulTheme::default();

    let health_conditions: String = Input::with_theme(&theme)
        .with_prompt("Health Conditions (e.g., Diabetes, High blood pressure)")
        .with_initial_text(current.health_conditions)
        .allow_empty(true)
        .interact_text()?;

    let allergies: String = Input::with_theme(&theme)
        .with_prompt("Allergies & Intolerances (e.g., Peanuts, Gluten, Lactose)")
        .with_initial_text(current.allergies)
        .allow_empty(true)
        .interact_text()?;

    let labels: Vec<&str> = VEGETARIAN_CHOICES
        .iter()
        .map(|choice| choice.label())
        .collect();
    let selected = Select::with_theme(&theme)
        .with_prompt("Are you vegetarian?")
        .items(&labels)
        .default(choice_index(current.is_vegetarian))
        .interact()?;

    Ok(ProfileInput {
        health_conditions,
        allergies,
        is_vegetarian: VEGETARIAN_CHOICES
            .get(selected)
            .copied()
            .unwrap_or_default(),
    })
}

pub fn confirm_retry() -> Result<bool, dialoguer::Error> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Edit your profile and ask again?")
        .default(false)
        .interact()
}

fn choice_index(choice: VegetarianChoice) -> usize {
    VEGETARIAN_CHOICES
        .iter()
        .position(|candidate| *candidate == choice)
        .unwrap_or(0)
}
