use tokio::sync::watch;

use crate::domain::profile::entities::{ProfileInput, VegetarianChoice};

/// Form state controller: the only writer of user-entered profile data.
///
/// Every setter publishes the new profile to subscribers so a front end can
/// redraw on change instead of polling.
#[derive(Debug)]
pub struct ProfileForm {
    profile: watch::Sender<ProfileInput>,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileForm {
    pub fn new() -> Self {
        let (profile, _) = watch::channel(ProfileInput::default());
        Self { profile }
    }

    pub fn set_health_conditions(&self, text: impl Into<String>) {
        let text = text.into();
        self.profile
            .send_modify(|profile| profile.health_conditions = text);
    }

    pub fn set_allergies(&self, text: impl Into<String>) {
        let text = text.into();
        self.profile.send_modify(|profile| profile.allergies = text);
    }

    pub fn set_vegetarian(&self, choice: VegetarianChoice) {
        self.profile
            .send_modify(|profile| profile.is_vegetarian = choice);
    }

    pub fn is_submittable(&self) -> bool {
        self.profile.borrow().is_submittable()
    }

    pub fn profile(&self) -> ProfileInput {
        self.profile.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ProfileInput> {
        self.profile.subscribe()
    }
}
