use std::future::Future;

use tokio::sync::watch;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::entities::ProfileInput,
    recommendation::{
        entities::RecommendationResult,
        value_objects::{Notification, RecommendationRequest, RequestState},
    },
};

/// Client trait for the remote recommendation service
#[cfg_attr(test, mockall::automock)]
pub trait RecommendationClient: Send + Sync {
    fn get_recommendations(
        &self,
        request: RecommendationRequest,
    ) -> impl Future<Output = Result<RecommendationResult, CoreError>> + Send;
}

/// Fire-and-forget sink for transient user notifications.
///
/// Implementations must not block and must swallow their own failures.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Service trait for the recommendation request lifecycle
pub trait RecommendationService: Send + Sync {
    fn submit(&self, profile: ProfileInput) -> impl Future<Output = RequestState> + Send;

    fn state(&self) -> RequestState;

    fn subscribe(&self) -> watch::Receiver<RequestState>;
}
