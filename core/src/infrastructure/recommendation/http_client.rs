use reqwest::Client;
use url::Url;

use crate::domain::{
    common::{RecommendationServiceConfig, entities::app_errors::CoreError},
    recommendation::{
        entities::RecommendationResult,
        ports::RecommendationClient,
        value_objects::{RECOMMENDATIONS_PATH, RecommendationRequest},
    },
};

/// Talks to the recommendation service over HTTP: one JSON `POST` per call.
#[derive(Debug, Clone)]
pub struct HttpRecommendationClient {
    endpoint: Url,
    client: Client,
}

impl HttpRecommendationClient {
    pub fn new(config: RecommendationServiceConfig) -> Result<Self, CoreError> {
        let endpoint = recommendations_endpoint(&config.base_url)?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CoreError::InvalidConfig(format!("Failed to build HTTP client: {}", e)))?;

        tracing::info!(
            endpoint = %endpoint,
            timeout_secs = config.request_timeout.as_secs_f64(),
            "Initializing recommendation client"
        );

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn recommendations_endpoint(base_url: &str) -> Result<Url, CoreError> {
    let mut base = Url::parse(base_url.trim()).map_err(|e| {
        CoreError::InvalidConfig(format!("Invalid service URL '{}': {}", base_url, e))
    })?;

    if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
        return Err(CoreError::InvalidConfig(format!(
            "Service URL must be an http(s) URL, got '{}'",
            base_url
        )));
    }

    // Keep any path prefix on the base URL when joining.
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(RECOMMENDATIONS_PATH)
        .map_err(|e| CoreError::InvalidConfig(format!("Invalid service URL: {}", e)))
}

fn transport_error(e: reqwest::Error) -> CoreError {
    if e.is_timeout() {
        tracing::error!("Recommendation request timed out: {}", e);
        CoreError::Timeout
    } else {
        tracing::error!("Recommendation request failed: {}", e);
        CoreError::ExternalServiceError(format!("Recommendation service error: {}", e))
    }
}

impl RecommendationClient for HttpRecommendationClient {
    async fn get_recommendations(
        &self,
        request: RecommendationRequest,
    ) -> Result<RecommendationResult, CoreError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Recommendation service error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Recommendation service returned error: {} - {}",
                status, error_text
            )));
        }

        let body = response.text().await.map_err(transport_error)?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse recommendation response: {}", e);
            CoreError::InvalidResponse(format!("Failed to parse recommendation response: {}", e))
        })
    }
}
