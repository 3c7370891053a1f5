use crate::{
    domain::{
        common::{NourishConfig, entities::app_errors::CoreError},
        recommendation::ports::Notifier,
        session::services::Session,
    },
    infrastructure::recommendation::HttpRecommendationClient,
};

pub type NourishSession<N> = Session<HttpRecommendationClient, N>;

/// Wires a session against the configured recommendation service.
pub fn create_session<N: Notifier>(
    config: NourishConfig,
    notifier: N,
) -> Result<NourishSession<N>, CoreError> {
    let client = HttpRecommendationClient::new(config.recommendation_service)?;

    Ok(Session::new(client, notifier))
}
