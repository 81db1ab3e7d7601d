//! Counseling session booking form.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::CounselingRequest;

/// User id attached to every booking until accounts exist.
pub const DEMO_USER_ID: &str = "1";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counselor {
    pub id: &'static str,
    pub name: &'static str,
    pub specialization: &'static str,
}

impl Counselor {
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.name, self.specialization)
    }
}

pub static COUNSELORS: [Counselor; 3] = [
    Counselor { id: "1", name: "Dr. Sarah Johnson", specialization: "Career Transition" },
    Counselor { id: "2", name: "Prof. Michael Chen", specialization: "Technical Careers" },
    Counselor { id: "3", name: "Ms. Emily Parker", specialization: "Student Guidance" },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    #[default]
    Chat,
    Video,
}

impl SessionType {
    pub const ALL: [SessionType; 2] = [SessionType::Chat, SessionType::Video];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Chat => "chat",
            SessionType::Video => "video",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionType::Chat => "Chat Session",
            SessionType::Video => "Video Session",
        }
    }
}

impl std::str::FromStr for SessionType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chat" => Ok(SessionType::Chat),
            "video" => Ok(SessionType::Video),
            other => Err(format!("Unknown session type: {other}")),
        }
    }
}

/// Values entered on the booking screen. Dates and times are kept as the
/// strings the inputs produce (`YYYY-MM-DD`, `HH:MM`); only presence is
/// checked, so a past date is accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingForm {
    pub counselor_id: String,
    pub session_type: SessionType,
    pub preferred_date: String,
    pub preferred_time: String,
    pub user_id: String,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            counselor_id: String::new(),
            session_type: SessionType::default(),
            preferred_date: String::new(),
            preferred_time: String::new(),
            user_id: DEMO_USER_ID.to_string(),
        }
    }
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of required fields that are still blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("counselor_id", &self.counselor_id),
            ("preferred_date", &self.preferred_date),
            ("preferred_time", &self.preferred_time),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn to_request(&self) -> Result<CounselingRequest, AppError> {
        if let Some(field) = self.missing_fields().first() {
            return Err(AppError::empty_field(*field));
        }
        Ok(CounselingRequest {
            counselor_id: self.counselor_id.trim().to_string(),
            session_type: self.session_type.as_str().to_string(),
            preferred_date: self.preferred_date.trim().to_string(),
            preferred_time: self.preferred_time.trim().to_string(),
            user_id: self.user_id.clone(),
        })
    }
}
