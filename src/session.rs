//! The mentor query orchestrator.
//!
//! A [`MentorSession`] holds everything one mentor view needs: the active
//! topic, its form values, the free-text query, the last answer per topic
//! and the request lifecycle. Submitting is split into [`MentorSession::submit`]
//! and [`MentorSession::complete`] so a UI can release its state borrow while
//! the request is in flight; [`MentorSession::ask`] chains both for callers
//! that simply await.
//!
//! Answers are applied in completion order. Each one writes only its own
//! topic's slot, so a late answer for a topic the user already left still
//! lands in the cache and shows up on return.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::errors::AppError;
use crate::fields::FormState;
use crate::gateway::CareerGateway;
use crate::models::extract_advice;
use crate::request::{build_request, MentorRequest};
use crate::segment::{segment, Card};
use crate::topics::{MentorEndpoint, Topic, TopicId};

/// Lifecycle of the session's request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Sending,
}

/// A submitted query waiting for its response.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingQuery {
    pub topic: TopicId,
    pub endpoint: MentorEndpoint,
    pub body: MentorRequest,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MentorSession {
    active: TopicId,
    form: FormState,
    query: String,
    responses: BTreeMap<TopicId, String>,
    error: Option<String>,
    phase: Phase,
}

/// User-facing message for a failed mentor call on `topic`.
pub fn failure_message(topic: TopicId) -> String {
    format!("Failed to get {topic} advice. Please try again.")
}

impl MentorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_topic(&self) -> TopicId {
        self.active
    }

    pub fn topic(&self) -> &'static Topic {
        self.active.topic()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_sending(&self) -> bool {
        self.phase == Phase::Sending
    }

    /// Last answer received for `topic`, if any call for it has succeeded.
    pub fn response(&self, topic: TopicId) -> Option<&str> {
        self.responses.get(&topic).map(String::as_str)
    }

    /// Cards for the active topic's last answer; `None` before the first answer.
    pub fn cards(&self) -> Option<Vec<Card>> {
        self.response(self.active).map(segment)
    }

    /// Switches topics. The form starts over; cached answers and the error
    /// banner are left alone.
    pub fn select_topic(&mut self, topic: TopicId) {
        debug!("Selecting topic {topic}");
        self.active = topic;
        self.form.clear();
    }

    /// Stores raw control input for one of the active topic's fields.
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<(), AppError> {
        let topic = self.topic();
        let field = topic.field(name).ok_or_else(|| AppError::UnknownField {
            topic: topic.id.to_string(),
            field_name: name.to_string(),
        })?;
        self.form.set_input(field, raw);
        Ok(())
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Starts a request for the active topic. A blank query is ignored and
    /// leaves the session untouched.
    pub fn submit(&mut self) -> Option<PendingQuery> {
        if self.query.trim().is_empty() {
            return None;
        }
        let topic = self.topic();
        let body = build_request(topic.endpoint, &self.query, topic.fields, &self.form);
        self.phase = Phase::Sending;
        self.error = None;
        info!("Submitting {} query to {}", topic.id, topic.endpoint.path());
        Some(PendingQuery { topic: topic.id, endpoint: topic.endpoint, body })
    }

    /// Applies the outcome of a request started by [`MentorSession::submit`].
    pub fn complete(&mut self, pending: PendingQuery, outcome: Result<Value, AppError>) {
        self.phase = Phase::Idle;
        let body = match outcome {
            Ok(body) => body,
            Err(AppError::Decode { message }) => {
                warn!("Unreadable {} response, treating as empty: {message}", pending.topic);
                Value::Null
            }
            Err(err) => {
                error!("Mentor call for {} failed: {err}", pending.topic);
                self.error = Some(failure_message(pending.topic));
                return;
            }
        };

        let advice = extract_advice(&body).unwrap_or_else(|| {
            warn!("No advice field in {} response", pending.topic);
            String::new()
        });
        self.responses.insert(pending.topic, advice);
        self.error = None;
        self.query.clear();
    }

    /// Submits the current query through `gateway` and applies the result.
    /// Returns `false` when the query was blank and nothing was sent.
    pub async fn ask<G: CareerGateway>(&mut self, gateway: &G) -> bool {
        let Some(pending) = self.submit() else {
            return false;
        };
        let outcome = gateway.ask_mentor(pending.endpoint, &pending.body).await;
        self.complete(pending, outcome);
        true
    }
}
