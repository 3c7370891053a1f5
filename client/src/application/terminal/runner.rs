use nourish_core::domain::{
    profile::{entities::ProfileInput, services::ProfileForm},
    recommendation::{
        ports::{Notifier, RecommendationClient},
        value_objects::{Notification, NotificationKind, RequestState},
    },
    rendering::ports::MarkupRenderer,
    session::services::Session,
};
use tokio::sync::mpsc;
use tracing::debug;

use crate::{
    application::terminal::{presenter, prompt},
    args::ProfileArgs,
};

pub const NOTHING_TO_SUBMIT: &str =
    "Nothing to submit: enter health conditions or allergies to get recommendations.";

/// Process exit status: 0 after a successful request, 1 when the request
/// failed, 2 when the profile could not be submitted at all.
pub fn exit_status(state: &RequestState, submittable: bool) -> u8 {
    match state {
        RequestState::Failed { .. } => 1,
        _ if !submittable => 2,
        _ => 0,
    }
}

pub fn apply_profile_args(form: &ProfileForm, profile: &ProfileArgs) {
    if let Some(health_conditions) = &profile.health_conditions {
        form.set_health_conditions(health_conditions.as_str());
    }
    if let Some(allergies) = &profile.allergies {
        form.set_allergies(allergies.as_str());
    }
    if let Some(choice) = profile.vegetarian {
        form.set_vegetarian(choice);
    }
}

fn apply_profile(form: &ProfileForm, profile: ProfileInput) {
    form.set_health_conditions(profile.health_conditions);
    form.set_allergies(profile.allergies);
    form.set_vegetarian(profile.is_vegetarian);
}

/// Draws the form, submits once if the submit affordance is enabled, and
/// draws the outcome.
async fn submit_and_render<C, N, M>(session: &Session<C, N, M>, show_raw: bool) -> RequestState
where
    C: RecommendationClient,
    N: Notifier,
    M: MarkupRenderer,
{
    let view = session.view();
    println!("{}\n", presenter::render_form(&view));

    if !view.submit_enabled {
        debug!("submit disabled, no request issued");
        if !view.profile.is_submittable() {
            eprintln!("{NOTHING_TO_SUBMIT}");
        }
        return session.state();
    }

    let state = session.submit().await;
    let view = session.view();
    println!("{}", presenter::render_results(&view, show_raw));

    state
}

pub async fn run_once<C, N, M>(
    session: &Session<C, N, M>,
    profile: &ProfileArgs,
    show_raw: bool,
) -> RequestState
where
    C: RecommendationClient,
    N: Notifier,
    M: MarkupRenderer,
{
    apply_profile_args(session.form(), profile);
    submit_and_render(session, show_raw).await
}

pub async fn run_interactive<C, N, M>(
    session: &Session<C, N, M>,
    show_raw: bool,
) -> Result<RequestState, anyhow::Error>
where
    C: RecommendationClient,
    N: Notifier,
    M: MarkupRenderer,
{
    loop {
        let current = session.form().profile();
        let edited = tokio::task::spawn_blocking(move || prompt::edit_profile(current)).await??;
        apply_profile(session.form(), edited);

        let state = submit_and_render(session, show_raw).await;

        if !tokio::task::spawn_blocking(prompt::confirm_retry).await?? {
            return Ok(state);
        }
    }
}

/// Prints notifications as they arrive until every sender is gone.
pub async fn display_notifications(mut notifications: mpsc::UnboundedReceiver<Notification>) {
    while let Some(notification) = notifications.recv().await {
        eprintln!("{}", format_notification(&notification));
    }
}

fn format_notification(notification: &Notification) -> String {
    match notification.kind {
        NotificationKind::Success => notification.text.clone(),
        NotificationKind::Failure => format!("✖ {}", notification.text),
    }
}

#[cfg(test)]
mod tests {
    use nourish_core::domain::{
        common::entities::app_errors::CoreError,
        profile::entities::VegetarianChoice,
        recommendation::{entities::RecommendationResult, value_objects::RecommendationRequest},
    };

    use super::*;

    struct UnreachableClient;

    impl RecommendationClient for UnreachableClient {
        async fn get_recommendations(
            &self,
            _request: RecommendationRequest,
        ) -> Result<RecommendationResult, CoreError> {
            panic!("no request expected");
        }
    }

    struct SilentNotifier;

    impl Notifier for SilentNotifier {
        fn notify(&self, _notification: Notification) {}
    }

    #[test]
    fn test_apply_profile_args_only_touches_given_fields() {
        let form = ProfileForm::new();
        form.set_allergies("Eggs");

        apply_profile_args(
            &form,
            &ProfileArgs {
                health_conditions: Some("Hypertension".to_string()),
                allergies: None,
                vegetarian: Some(VegetarianChoice::No),
            },
        );

        assert_eq!(
            form.profile(),
            ProfileInput::new("Hypertension", "Eggs", VegetarianChoice::No)
        );
    }

    #[tokio::test]
    async fn test_run_once_with_blank_profile_issues_no_request() {
        let session = Session::new(UnreachableClient, SilentNotifier);

        let state = run_once(
            &session,
            &ProfileArgs {
                health_conditions: Some("   ".to_string()),
                allergies: Some(String::new()),
                vegetarian: Some(VegetarianChoice::Yes),
            },
            false,
        )
        .await;

        assert_eq!(state, RequestState::Idle);
        assert_eq!(exit_status(&state, session.form().is_submittable()), 2);
    }

    #[test]
    fn test_exit_status() {
        let success = RequestState::Success {
            result: RecommendationResult::default(),
        };

        assert_eq!(exit_status(&success, true), 0);
        assert_eq!(exit_status(&RequestState::failed(), true), 1);
        assert_eq!(exit_status(&RequestState::Idle, false), 2);
    }

    #[test]
    fn test_failure_notification_is_marked() {
        assert_eq!(
            format_notification(&Notification::failure()),
            "✖ Failed to get recommendations"
        );
        assert_eq!(
            format_notification(&Notification::success()),
            "✨ Recommendations generated successfully!"
        );
    }
}
