use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use career_mentor::gateway::{
    ApiConfig, CareerGateway, DEFAULT_ORIGIN, HEALTH_PATH, ROADMAP_PATH, SCHEDULE_PATH, SUCCESS_STORIES_PATH,
};
use career_mentor::models::{
    BookingConfirmation, CounselingRequest, ErrorBody, HealthStatus, RoadmapRequest, RoadmapResponse, SuccessStory,
};
use career_mentor::request::MentorRequest;
use career_mentor::topics::MentorEndpoint;
use career_mentor::AppError;

/// Origin of the backend API server, overridable at build time.
const API_ORIGIN: &str = match option_env!("CAREER_API_ORIGIN") {
    Some(origin) => origin,
    None => DEFAULT_ORIGIN,
};

/// [`CareerGateway`] over the browser's `fetch`.
#[derive(Clone, Debug)]
pub struct GlooGateway {
    config: ApiConfig,
}

/// Gateway for the configured API origin.
pub fn gateway() -> GlooGateway {
    GlooGateway { config: ApiConfig::new(API_ORIGIN) }
}

impl GlooGateway {
    async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, AppError> {
        let resp = Request::post(&self.config.url(path))
            .json(body)
            .map_err(|e| AppError::decode(format!("Serialize error: {e}")))?
            .send()
            .await
            .map_err(AppError::network)?;
        read_json(resp).await
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, AppError> {
        let resp = Request::get(&self.config.url(path))
            .send()
            .await
            .map_err(AppError::network)?;
        read_json(resp).await
    }
}

async fn read_json<R: DeserializeOwned>(resp: Response) -> Result<R, AppError> {
    if !resp.ok() {
        let detail = resp.json::<ErrorBody>().await.ok().and_then(|b| b.message());
        return Err(AppError::Server { status: resp.status(), detail });
    }
    let text = resp.text().await.map_err(AppError::network)?;
    serde_json::from_str(&text).map_err(AppError::decode)
}

impl CareerGateway for GlooGateway {
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
