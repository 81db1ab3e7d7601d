//! The seam between the client core and the career-guidance HTTP API.

use serde_json::Value;

use crate::errors::AppError;
use crate::models::{
    BookingConfirmation, CounselingRequest, HealthStatus, RoadmapRequest, RoadmapResponse, SuccessStory,
};
use crate::request::MentorRequest;
use crate::topics::MentorEndpoint;

pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";
pub const API_PREFIX: &str = "/uccha-shiksha/career-guidance";

pub const ROADMAP_PATH: &str = "/roadmap";
pub const SCHEDULE_PATH: &str = "/schedule";
pub const SUCCESS_STORIES_PATH: &str = "/success-stories";
pub const HEALTH_PATH: &str = "/health";

/// Where the API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    origin: String,
}

impl ApiConfig {
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self { origin: origin.trim_end_matches('/').to_string() }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Absolute URL of `path` under the API prefix.
    pub fn url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.origin)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN)
    }
}

/// Calls the career-guidance API. Implemented over `reqwest` natively and
/// over `gloo-net` in the browser; neither future is required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait CareerGateway {
    /// POSTs a mentor request and returns the raw JSON response.
    async fn ask_mentor(&self, endpoint: MentorEndpoint, body: &MentorRequest) -> Result<Value, AppError>;

    async fn generate_roadmap(&self, request: &RoadmapRequest) -> Result<RoadmapResponse, AppError>;

    async fn schedule_session(&self, request: &CounselingRequest) -> Result<BookingConfirmation, AppError>;

    async fn success_stories(&self) -> Result<Vec<SuccessStory>, AppError>;

    async fn health(&self) -> Result<HealthStatus, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_prefixed() {
        let config = ApiConfig::new("http://api.example.com/");
        assert_eq!(config.origin(), "http://api.example.com");
        assert_eq!(
            config.url(MentorEndpoint::SkillsGap.path()),
            "http://api.example.com/uccha-shiksha/career-guidance/mentor/skills-gap"
        );
        assert_eq!(
            ApiConfig::default().url(SUCCESS_STORIES_PATH),
            "http://localhost:8000/uccha-shiksha/career-guidance/success-stories"
        );
    }
}
