//! Career roadmap request form.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::RoadmapRequest;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] =
        [ExperienceLevel::Beginner, ExperienceLevel::Intermediate, ExperienceLevel::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

impl std::str::FromStr for ExperienceLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown experience level: {s}"))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoadmapForm {
    pub career_field: String,
    pub experience_level: ExperienceLevel,
    interests: Vec<String>,
}

impl RoadmapForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Adds one interest; blank input is ignored. Returns whether it was added.
    pub fn add_interest(&mut self, raw: &str) -> bool {
        let interest = raw.trim();
        if interest.is_empty() {
            return false;
        }
        self.interests.push(interest.to_string());
        true
    }

    pub fn remove_interest(&mut self, index: usize) -> Option<String> {
        (index < self.interests.len()).then(|| self.interests.remove(index))
    }

    /// Whether the required career field has been filled in.
    pub fn is_ready(&self) -> bool {
        !self.career_field.trim().is_empty()
    }

    pub fn to_request(&self) -> Result<RoadmapRequest, AppError> {
        if !self.is_ready() {
            return Err(AppError::empty_field("career_field"));
        }
        Ok(RoadmapRequest {
            career_field: self.career_field.trim().to_string(),
            experience_level: self.experience_level.as_str().to_string(),
            interests: self.interests.clone(),
        })
    }
}
