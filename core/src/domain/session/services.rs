use tokio::sync::watch;
use tracing::debug;

use crate::domain::{
    profile::{entities::ProfileInput, services::ProfileForm},
    recommendation::{
        ports::{Notifier, RecommendationClient, RecommendationService},
        services::RecommendationOrchestrator,
        value_objects::RequestState,
    },
    rendering::{markup::LightweightMarkup, ports::MarkupRenderer, services::select_sections},
    session::entities::{SUBMIT_LABEL, SUBMIT_PENDING_LABEL, SessionView},
};

/// Single source of truth for one user session. The form is written only
/// through [`ProfileForm`], the request state only by the orchestrator.
pub struct Session<C, N, M = LightweightMarkup>
where
    C: RecommendationClient,
    N: Notifier,
    M: MarkupRenderer,
{
    form: ProfileForm,
    recommendations: RecommendationOrchestrator<C, N>,
    renderer: M,
}

impl<C, N> Session<C, N>
where
    C: RecommendationClient,
    N: Notifier,
{
    pub fn new(client: C, notifier: N) -> Self {
        Self::with_renderer(client, notifier, LightweightMarkup)
    }
}

impl<C, N, M> Session<C, N, M>
where
    C: RecommendationClient,
    N: Notifier,
    M: MarkupRenderer,
{
    pub fn with_renderer(client: C, notifier: N, renderer: M) -> Self {
        Self {
            form: ProfileForm::new(),
            recommendations: RecommendationOrchestrator::new(client, notifier),
            renderer,
        }
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn state(&self) -> RequestState {
        self.recommendations.state()
    }

    pub fn submit_enabled(&self) -> bool {
        self.form.is_submittable() && !self.recommendations.state().is_pending()
    }

    /// Submits the current form contents. A disabled submit is a no-op that
    /// returns the current state.
    pub async fn submit(&self) -> RequestState {
        if !self.submit_enabled() {
            debug!("submit is disabled, skipping request");
            return self.state();
        }

        self.recommendations.submit(self.form.profile()).await
    }

    pub fn view(&self) -> SessionView {
        let state = self.state();
        let profile = self.form.profile();
        let pending = state.is_pending();
        let sections = state
            .result()
            .map(|result| select_sections(result, &self.renderer))
            .unwrap_or_default();

        SessionView {
            submit_enabled: profile.is_submittable() && !pending,
            submit_label: if pending {
                SUBMIT_PENDING_LABEL
            } else {
                SUBMIT_LABEL
            },
            profile,
            state,
            sections,
        }
    }

    pub fn subscribe_profile(&self) -> watch::Receiver<ProfileInput> {
        self.form.subscribe()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<RequestState> {
        self.recommendations.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use tokio::sync::Notify;

    use super::*;
    use crate::{
        domain::{
            common::entities::app_errors::CoreError,
            profile::entities::VegetarianChoice,
            recommendation::{
                entities::RecommendationResult,
                ports::MockRecommendationClient,
                value_objects::{FAILURE_MESSAGE, NotificationKind},
            },
            rendering::entities::{SectionBody, SectionKind},
        },
        test::{Reply, mock_client, mock_notifier},
    };

    #[tokio::test]
    async fn test_empty_form_never_submits() {
        let session = Session::new(mock_client(vec![]), mock_notifier(&[]));

        session.form().set_vegetarian(VegetarianChoice::Yes);
        let view = session.view();
        assert!(!view.submit_enabled);
        assert_eq!(view.submit_label, SUBMIT_LABEL);

        let state = session.submit().await;

        assert_eq!(state, RequestState::Idle);
    }

    #[tokio::test]
    async fn test_diabetes_scenario_renders_recommended_foods_only() {
        let mut client = MockRecommendationClient::new();
        client
            .expect_get_recommendations()
            .withf(|request| {
                serde_json::to_string(request).unwrap()
                    == r#"{"health_conditions":"Diabetes","allergies":"","is_vegetarian":true}"#
            })
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    Ok(RecommendationResult {
                        recommended_foods: Some(vec!["Oats".to_string(), "Lentils".to_string()]),
                        ..Default::default()
                    })
                })
            });
        let session = Session::new(client, mock_notifier(&[NotificationKind::Success]));

        session.form().set_health_conditions("Diabetes");
        session.form().set_allergies("");
        session.form().set_vegetarian(VegetarianChoice::Yes);
        assert!(session.view().submit_enabled);

        session.submit().await;

        let view = session.view();
        assert_eq!(view.sections.len(), 1);
        assert_eq!(view.sections[0].kind, SectionKind::RecommendedFoods);
        assert_eq!(
            view.sections[0].body,
            SectionBody::Foods(vec!["Oats".to_string(), "Lentils".to_string()])
        );
    }

    #[tokio::test]
    async fn test_pending_disables_submit_and_swaps_label() {
        let gate = Arc::new(Notify::new());
        let session = Arc::new(Session::new(
            mock_client(vec![
                Reply::ok(RecommendationResult::default()).gated(gate.clone()),
            ]),
            mock_notifier(&[NotificationKind::Success]),
        ));
        session.form().set_allergies("Peanuts");
        let mut state_rx = session.subscribe_state();

        let in_flight = tokio::spawn({
            let session = session.clone();
            async move { session.submit().await }
        });
        state_rx.wait_for(RequestState::is_pending).await.unwrap();

        let view = session.view();
        assert!(!view.submit_enabled);
        assert_eq!(view.submit_label, SUBMIT_PENDING_LABEL);
        assert!(view.sections.is_empty());

        assert_eq!(session.submit().await, RequestState::Pending);

        gate.notify_one();
        in_flight.await.unwrap();
        assert!(session.view().submit_enabled);
    }

    #[tokio::test]
    async fn test_failure_view_shows_generic_message() {
        let session = Session::new(
            mock_client(vec![Reply::err(CoreError::ExternalServiceError(
                "500".to_string(),
            ))]),
            mock_notifier(&[NotificationKind::Failure]),
        );
        session.form().set_health_conditions("Celiac disease");

        session.submit().await;

        let view = session.view();
        assert_eq!(view.error_message(), Some(FAILURE_MESSAGE));
        assert!(!view.has_result());
        assert!(view.sections.is_empty());
        assert!(view.submit_enabled);
    }

    #[tokio::test]
    async fn test_submit_stays_enabled_after_caller_gives_up() {
        let session = Session::new(
            mock_client(vec![
                Reply::ok(RecommendationResult::default()).gated(Arc::new(Notify::new())),
            ]),
            mock_notifier(&[NotificationKind::Failure]),
        );
        session.form().set_health_conditions("Gout");

        let outcome = tokio::time::timeout(Duration::from_millis(20), session.submit()).await;

        assert!(outcome.is_err());
        let view = session.view();
        assert!(view.submit_enabled);
        assert_eq!(view.submit_label, SUBMIT_LABEL);
        assert_eq!(view.error_message(), Some(FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn test_profile_subscribers_follow_form_edits() {
        let session = Session::new(mock_client(vec![]), mock_notifier(&[]));
        let mut profile_rx = session.subscribe_profile();

        session.form().set_allergies("Lactose");

        profile_rx.changed().await.unwrap();
        assert_eq!(profile_rx.borrow_and_update().allergies, "Lactose");
        assert!(session.view().submit_enabled);
    }
}
