use crate::domain::{
    profile::entities::ProfileInput, recommendation::value_objects::RequestState,
    rendering::entities::SectionView,
};

pub const SUBMIT_LABEL: &str = "Generate AI Recommendations";
pub const SUBMIT_PENDING_LABEL: &str = "Generating AI Insights...";

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub profile: ProfileInput,
    pub state: RequestState,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub sections: Vec<SectionView>,
}

impl SessionView {
    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message()
    }

    pub fn has_result(&self) -> bool {
        self.state.result().is_some()
    }
}
