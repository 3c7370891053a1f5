use std::time::Duration;

pub mod entities;

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
pub struct NourishConfig {
    pub recommendation_service: RecommendationServiceConfig,
}

#[derive(Clone, Debug)]
pub struct RecommendationServiceConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for RecommendationServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}
