use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    profile::entities::ProfileInput, recommendation::entities::RecommendationResult,
};

pub const RECOMMENDATIONS_PATH: &str = "get_recommendations";

/// Shown for every failed request, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Failed to get recommendations. Please try again.";

pub const SUCCESS_NOTIFICATION: &str = "✨ Recommendations generated successfully!";
pub const FAILURE_NOTIFICATION: &str = "Failed to get recommendations";

/// JSON body sent to the recommendation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub health_conditions: String,
    pub allergies: String,
    pub is_vegetarian: bool,
}

impl From<&ProfileInput> for RecommendationRequest {
    fn from(profile: &ProfileInput) -> Self {
        Self {
            health_conditions: profile.health_conditions.clone(),
            allergies: profile.allergies.clone(),
            is_vegetarian: profile.is_vegetarian.is_vegetarian(),
        }
    }
}

/// Lifecycle of the single outstanding recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Success {
        result: RecommendationResult,
    },
    Failed {
        message: String,
    },
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn result(&self) -> Option<&RecommendationResult> {
        match self {
            RequestState::Success { result } => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn failed() -> Self {
        RequestState::Failed {
            message: FAILURE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A transient message for the user, e.g. a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
    pub emitted_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            emitted_at: Utc::now(),
        }
    }

    pub fn success() -> Self {
        Self::new(NotificationKind::Success, SUCCESS_NOTIFICATION)
    }

    pub fn failure() -> Self {
        Self::new(NotificationKind::Failure, FAILURE_NOTIFICATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::entities::VegetarianChoice;

    #[test]
    fn test_request_body_matches_wire_format() {
        let profile = ProfileInput::new("Diabetes", "", VegetarianChoice::Yes);
        let body = serde_json::to_string(&RecommendationRequest::from(&profile)).unwrap();

        assert_eq!(
            body,
            r#"{"health_conditions":"Diabetes","allergies":"","is_vegetarian":true}"#
        );
    }

    #[test]
    fn test_unset_choice_is_not_vegetarian() {
        let profile = ProfileInput::new("", "Eggs", VegetarianChoice::Unset);
        assert!(!RecommendationRequest::from(&profile).is_vegetarian);
    }

    #[test]
    fn test_failed_state_carries_generic_message() {
        let state = RequestState::failed();
        assert_eq!(state.error_message(), Some(FAILURE_MESSAGE));
        assert!(state.result().is_none());
        assert!(!state.is_pending());
    }
}
