use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::errors::AppError;
use crate::gateway::{ApiConfig, CareerGateway, HEALTH_PATH, ROADMAP_PATH, SCHEDULE_PATH, SUCCESS_STORIES_PATH};
use crate::models::{
    BookingConfirmation, CounselingRequest, ErrorBody, HealthStatus, RoadmapRequest, RoadmapResponse, SuccessStory,
};
use crate::request::MentorRequest;
use crate::topics::MentorEndpoint;

/// [`CareerGateway`] over `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    config: ApiConfig,
}

impl HttpGateway {
    pub fn new(config: ApiConfig, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build().map_err(AppError::network)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, AppError> {
        let url = self.config.url(path);
        debug!("POST {url}");
        let resp = self.client.post(&url).json(body).send().await.map_err(|e| {
            error!("POST {url} failed: {e}");
            AppError::network(e)
        })?;
        read_json(resp).await
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, AppError> {
        let url = self.config.url(path);
        debug!("GET {url}");
        let resp = self.client.get(&url).send().await.map_err(|e| {
            error!("GET {url} failed: {e}");
            AppError::network(e)
        })?;
        read_json(resp).await
    }
}

/// Decodes a 2xx body, or turns the response into [`AppError::Server`].
///
/// A body cut short by the connection is a [`AppError::Network`] failure;
/// only a complete body that is not the expected JSON is [`AppError::Decode`].
async fn read_json<R: DeserializeOwned>(resp: Response) -> Result<R, AppError> {
    let status = resp.status();
    if !status.is_success() {
        let detail = resp.json::<ErrorBody>().await.ok().and_then(|b| b.message());
        error!("Server error {status}: {}", detail.as_deref().unwrap_or("<no detail>"));
        return Err(AppError::Server { status: status.as_u16(), detail });
    }
    let bytes = resp.bytes().await.map_err(|e| {
        error!("Reading {status} body failed: {e}");
        AppError::network(e)
    })?;
    serde_json::from_slice(&bytes).map_err(AppError::decode)
}

impl CareerGateway for HttpGateway {
    async fn ask_mentor(&self, endpoint: MentorEndpoint, body: &MentorRequest) -> Result<Value, AppError> {
        self.post(endpoint.path(), body).await
    }

    async fn generate_roadmap(&self, request: &RoadmapRequest) -> Result<RoadmapResponse, AppError> {
        self.post(ROADMAP_PATH, request).await
    }

    async fn schedule_session(&self, request: &CounselingRequest) -> Result<BookingConfirmation, AppError> {
        self.post(SCHEDULE_PATH, request).await
    }

    async fn success_stories(&self) -> Result<Vec<SuccessStory>, AppError> {
        self.get(SUCCESS_STORIES_PATH).await
    }

    async fn health(&self) -> Result<HealthStatus, AppError> {
        self.get(HEALTH_PATH).await
    }
}
