//! Request body construction for the mentor endpoints.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::fields::{FieldDescriptor, FormState};
use crate::topics::{MentorEndpoint, PayloadShape};

const CONCISE_SUFFIX: &str = "Please provide a concise response with key points only. Limit to 3-4 main points.";

const DEFAULT_USER_NAME: &str = "User";
const DEFAULT_PLATFORM: &str = "linkedin";
const DEFAULT_CONFIDENCE_CONTEXT: &str = "Career Development";

/// Appends the concision instruction to the user's question.
pub fn concise_query(query: &str) -> String {
    format!("{query} {CONCISE_SUFFIX}")
}

/// Body of `/mentor/networking-script`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkingRequest {
    pub user_name: String,
    pub target_contact_role: String,
    pub shared_interests: Vec<String>,
    pub platform: String,
    pub purpose: String,
}

/// Body of `/mentor/confidence-building`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfidenceRequest {
    pub query: String,
    pub context: String,
    pub past_experiences: Vec<String>,
}

/// A mentor request body, serialized as a bare JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MentorRequest {
    Generic(Map<String, Value>),
    Networking(NetworkingRequest),
    Confidence(ConfidenceRequest),
}

impl MentorRequest {
    pub fn to_json(&self) -> String {
        // Maps with string keys and plain structs always serialize.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Builds the body `endpoint` expects from the raw query and form values.
pub fn build_request(
    endpoint: MentorEndpoint,
    query: &str,
    fields: &[FieldDescriptor],
    form: &FormState,
) -> MentorRequest {
    let query = concise_query(query);
    if fields.is_empty() {
        return generic(query, &[], form);
    }

    match endpoint.payload_shape() {
        PayloadShape::Networking => MentorRequest::Networking(NetworkingRequest {
            user_name: form.text("user_name").unwrap_or(DEFAULT_USER_NAME).to_string(),
            target_contact_role: form.text("target_contact_role").unwrap_or_default().to_string(),
            shared_interests: form.tags("shared_interests").map(<[String]>::to_vec).unwrap_or_default(),
            platform: form
                .text("platform")
                .map(str::to_lowercase)
                .unwrap_or_else(|| DEFAULT_PLATFORM.to_string()),
            purpose: query,
        }),
        PayloadShape::Confidence => MentorRequest::Confidence(ConfidenceRequest {
            query,
            context: form.text("context").unwrap_or(DEFAULT_CONFIDENCE_CONTEXT).to_string(),
            past_experiences: form
                .text("past_experiences")
                .map(|s| vec![s.to_string()])
                .unwrap_or_default(),
        }),
        PayloadShape::Generic => generic(query, fields, form),
    }
}

fn generic(query: String, fields: &[FieldDescriptor], form: &FormState) -> MentorRequest {
    let mut body = Map::new();
    body.insert("query".to_string(), Value::String(query));
    for field in fields {
        if let Some(value) = form.get(field.name).filter(|v| v.is_truthy()) {
            if let Ok(json) = serde_json::to_value(value) {
                body.insert(field.name.to_string(), json);
            }
        }
    }
    MentorRequest::Generic(body)
}
