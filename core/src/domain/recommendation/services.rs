use tokio::sync::watch;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::domain::{
    profile::entities::ProfileInput,
    recommendation::{
        ports::{Notifier, RecommendationClient, RecommendationService},
        value_objects::{Notification, RecommendationRequest, RequestState},
    },
};

/// Owns the request lifecycle: Idle -> Pending -> Success | Failed.
///
/// The state lives in a watch channel so the presentation layer can follow
/// transitions. Only this type writes to it.
pub struct RecommendationOrchestrator<C, N>
where
    C: RecommendationClient,
    N: Notifier,
{
    client: C,
    notifier: N,
    state: watch::Sender<RequestState>,
}

impl<C, N> RecommendationOrchestrator<C, N>
where
    C: RecommendationClient,
    N: Notifier,
{
    pub fn new(client: C, notifier: N) -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self {
            client,
            notifier,
            state,
        }
    }

    /// Moves to `Pending` unless a request is already in flight. Check and
    /// set happen under the channel lock.
    fn begin_request(&self) -> Option<PendingRequest<'_, C, N>> {
        let started = self.state.send_if_modified(|state| {
            if state.is_pending() {
                return false;
            }
            *state = RequestState::Pending;
            true
        });

        started.then(|| PendingRequest {
            orchestrator: self,
            request_id: Uuid::now_v7(),
            settled: false,
        })
    }

    fn finish(&self, next: RequestState, notification: Notification) {
        self.state.send_replace(next);
        self.notifier.notify(notification);
    }
}

/// The in-flight request. Dropping it before [`PendingRequest::settle`]
/// (an aborted task, an outer timeout) fails the request so the session can
/// submit again.
struct PendingRequest<'a, C, N>
where
    C: RecommendationClient,
    N: Notifier,
{
    orchestrator: &'a RecommendationOrchestrator<C, N>,
    request_id: Uuid,
    settled: bool,
}

impl<C, N> PendingRequest<'_, C, N>
where
    C: RecommendationClient,
    N: Notifier,
{
    fn settle(mut self, next: RequestState, notification: Notification) -> RequestState {
        self.settled = true;
        self.orchestrator.finish(next.clone(), notification);
        next
    }
}

impl<C, N> Drop for PendingRequest<'_, C, N>
where
    C: RecommendationClient,
    N: Notifier,
{
    fn drop(&mut self) {
        if !self.settled {
            warn!(request_id = %self.request_id, "recommendation request cancelled before completion");
            self.orchestrator
                .finish(RequestState::failed(), Notification::failure());
        }
    }
}

impl<C, N> RecommendationService for RecommendationOrchestrator<C, N>
where
    C: RecommendationClient,
    N: Notifier,
{
    async fn submit(&self, profile: ProfileInput) -> RequestState {
        if !profile.is_submittable() {
            debug!("profile has no health conditions or allergies, nothing to submit");
            return self.state();
        }

        let Some(pending) = self.begin_request() else {
            debug!("recommendation request already pending, ignoring submission");
            return self.state();
        };

        let request_id = pending.request_id;
        info!(%request_id, is_vegetarian = profile.is_vegetarian.is_vegetarian(), "requesting recommendations");

        let (next, notification) = match self
            .client
            .get_recommendations(RecommendationRequest::from(&profile))
            .await
        {
            Ok(result) => {
                info!(%request_id, "recommendations received");
                (RequestState::Success { result }, Notification::success())
            }
            Err(e) => {
                error!(%request_id, error = %e, "recommendation request failed");
                (RequestState::failed(), Notification::failure())
            }
        };

        pending.settle(next, notification)
    }

    fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }
}
