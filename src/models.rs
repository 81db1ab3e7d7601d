use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mentor response fields, in the order they are tried.
pub const ADVICE_FIELDS: [&str; 6] = ["response", "analysis", "benchmark", "guidance", "script", "strategies"];

/// Pulls the advice text out of a mentor endpoint's JSON response.
/// The first non-null candidate field wins; non-string values are rendered
/// as JSON text.
pub fn extract_advice(body: &Value) -> Option<String> {
    ADVICE_FIELDS
        .iter()
        .filter_map(|name| body.get(name))
        .find(|value| !value.is_null())
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
}

/// Error body of a non-2xx response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// The `detail` message, if the server sent one.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Request body for `/roadmap`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapRequest {
    pub career_field: String,
    pub experience_level: String,
    pub interests: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RoadmapResponse {
    #[serde(default)]
    pub roadmap: Option<String>,
}

impl RoadmapResponse {
    /// The roadmap split into its newline-delimited steps.
    pub fn steps(&self) -> Vec<&str> {
        self.roadmap.as_deref().map(|r| r.split('\n').collect()).unwrap_or_default()
    }
}

/// Request body for `/schedule`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounselingRequest {
    pub counselor_id: String,
    pub session_type: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub user_id: String,
}

/// The booked session as echoed back by `/schedule`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub id: u64,
    pub session_type: String,
    pub preferred_date: String,
    pub preferred_time: String,
    #[serde(default)]
    pub counselor_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessStory {
    pub id: u64,
    pub name: String,
    pub field: String,
    pub story: String,
}

/// Response of `/health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub api_key_configured: bool,
    #[serde(default)]
    pub model_initialized: bool,
    #[serde(default)]
    pub model_used: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn advice_field_order() {
        assert_eq!(extract_advice(&json!({ "analysis": "a", "response": "r" })), Some("r".into()));
        assert_eq!(extract_advice(&json!({ "response": null, "script": "s" })), Some("s".into()));
        assert_eq!(extract_advice(&json!({ "strategies": "calm" })), Some("calm".into()));
        assert_eq!(extract_advice(&json!({ "detail": "x" })), None);
        assert_eq!(extract_advice(&json!([1, 2])), None);
    }

    #[test]
    fn non_string_advice_is_rendered_as_json() {
        assert_eq!(extract_advice(&json!({ "guidance": ["a"] })), Some(r#"["a"]"#.into()));
    }

    #[test]
    fn error_detail() {
        let body: ErrorBody = serde_json::from_value(json!({ "detail": "AI model not available" })).unwrap();
        assert_eq!(body.message().as_deref(), Some("AI model not available"));
        let body: ErrorBody = serde_json::from_value(json!({})).unwrap();
        assert_eq!(body.message(), None);
    }

    #[test]
    fn booking_confirmation_parses_server_echo() {
        let conf: BookingConfirmation = serde_json::from_value(json!({
            "counselor_id": "2",
            "session_type": "video",
            "preferred_date": "2024-01-01",
            "preferred_time": "10:00",
            "user_id": "1",
            "id": 3,
            "status": "scheduled",
            "meeting_link": "https://meet.google.com/placeholder-3"
        }))
        .unwrap();
        assert_eq!(conf.id, 3);
        assert_eq!(conf.meeting_link.as_deref(), Some("https://meet.google.com/placeholder-3"));
    }

    #[test]
    fn roadmap_steps_follow_lines() {
        let resp = RoadmapResponse { roadmap: Some("1. Learn\n2. Build".into()) };
        assert_eq!(resp.steps(), vec!["1. Learn", "2. Build"]);
        assert!(RoadmapResponse::default().steps().is_empty());
    }
}
