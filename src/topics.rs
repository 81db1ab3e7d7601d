//! The fixed catalogue of mentor topics and the endpoints behind them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::fields::FieldDescriptor;

const EXPERIENCE_LEVELS: &[&str] = &["Entry Level", "Mid Level", "Senior Level"];
const PLATFORMS: &[&str] = &["LinkedIn", "Email", "In Person", "Twitter"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicId {
    #[default]
    General,
    Skills,
    Salary,
    Portfolio,
    Networking,
    Confidence,
    Stress,
}

impl TopicId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicId::General => "general",
            TopicId::Skills => "skills",
            TopicId::Salary => "salary",
            TopicId::Portfolio => "portfolio",
            TopicId::Networking => "networking",
            TopicId::Confidence => "confidence",
            TopicId::Stress => "stress",
        }
    }

    pub fn topic(&self) -> &'static Topic {
        // TOPICS is declared in TopicId order.
        &TOPICS[*self as usize]
    }
}

impl std::fmt::Display for TopicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicId {
    type Err = AppError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        TOPICS
            .iter()
            .map(|t| t.id)
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| AppError::UnknownTopic { id: s.to_string() })
    }
}

/// How a mentor endpoint expects its request body to be shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// `{query}` plus every filled-in form field under its own name.
    Generic,
    Networking,
    Confidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MentorEndpoint {
    General,
    SkillsGap,
    SalaryBenchmark,
    PortfolioGuidance,
    NetworkingScript,
    ConfidenceBuilding,
    StressManagement,
}

impl MentorEndpoint {
    /// Path relative to the API prefix.
    pub fn path(&self) -> &'static str {
        match self {
            MentorEndpoint::General => "/mentor",
            MentorEndpoint::SkillsGap => "/mentor/skills-gap",
            MentorEndpoint::SalaryBenchmark => "/mentor/salary-benchmark",
            MentorEndpoint::PortfolioGuidance => "/mentor/portfolio-guidance",
            MentorEndpoint::NetworkingScript => "/mentor/networking-script",
            MentorEndpoint::ConfidenceBuilding => "/mentor/confidence-building",
            MentorEndpoint::StressManagement => "/mentor/stress-management",
        }
    }

    pub fn payload_shape(&self) -> PayloadShape {
        match self {
            MentorEndpoint::NetworkingScript => PayloadShape::Networking,
            MentorEndpoint::ConfidenceBuilding => PayloadShape::Confidence,
            MentorEndpoint::General
            | MentorEndpoint::SkillsGap
            | MentorEndpoint::SalaryBenchmark
            | MentorEndpoint::PortfolioGuidance
            | MentorEndpoint::StressManagement => PayloadShape::Generic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub id: TopicId,
    pub label: &'static str,
    pub description: &'static str,
    pub endpoint: MentorEndpoint,
    pub fields: &'static [FieldDescriptor],
}

impl Topic {
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Placeholder of the free-text query input.
    pub fn query_placeholder(&self) -> String {
        format!("Ask about {}...", self.label.to_lowercase())
    }
}

pub static TOPICS: [Topic; 7] = [
    Topic {
        id: TopicId::General,
        label: "General Advice",
        description: "Get general career advice and guidance",
        endpoint: MentorEndpoint::General,
        fields: &[],
    },
    Topic {
        id: TopicId::Skills,
        label: "Skills Analysis",
        description: "Analyze your skills gap for your target role",
        endpoint: MentorEndpoint::SkillsGap,
        fields: &[
            FieldDescriptor::tags("current_skills", "Your Current Skills", "e.g., JavaScript, Python, React"),
            FieldDescriptor::text("target_role", "Target Role", "e.g., Software Developer"),
            FieldDescriptor::select("experience_level", "Experience Level", EXPERIENCE_LEVELS),
            FieldDescriptor::text("location", "Location", "e.g., United States, Remote"),
        ],
    },
    Topic {
        id: TopicId::Salary,
        label: "Salary Insights",
        description: "Get salary insights and benchmarks",
        endpoint: MentorEndpoint::SalaryBenchmark,
        fields: &[
            FieldDescriptor::text("role", "Job Role", "e.g., Software Developer"),
            FieldDescriptor::text("location", "Location", "e.g., United States"),
            FieldDescriptor::number("experience_years", "Years of Experience", "0"),
            FieldDescriptor::tags("skills", "Key Skills", "e.g., React, Node.js, Python"),
        ],
    },
    Topic {
        id: TopicId::Portfolio,
        label: "Portfolio Guide",
        description: "Receive guidance on building your portfolio",
        endpoint: MentorEndpoint::PortfolioGuidance,
        fields: &[
            FieldDescriptor::text("target_role", "Target Role", "e.g., Frontend Developer"),
            FieldDescriptor::tags("current_skills", "Current Skills", "e.g., HTML, CSS, JavaScript"),
            FieldDescriptor::select("experience_level", "Experience Level", EXPERIENCE_LEVELS),
            FieldDescriptor::tags("interests", "Areas of Interest", "e.g., Web Development, UI/UX, Mobile Apps"),
        ],
    },
    Topic {
        id: TopicId::Networking,
        label: "Networking Tips",
        description: "Learn effective networking strategies",
        endpoint: MentorEndpoint::NetworkingScript,
        fields: &[
            FieldDescriptor::text("user_name", "Your Name", "e.g., John Doe"),
            FieldDescriptor::text("target_contact_role", "Target Contact Role", "e.g., Engineering Manager"),
            FieldDescriptor::tags("shared_interests", "Shared Interests", "e.g., Technology, AI, Startups"),
            FieldDescriptor::select("platform", "Platform", PLATFORMS),
        ],
    },
    Topic {
        id: TopicId::Confidence,
        label: "Confidence Building",
        description: "Build your confidence and overcome challenges",
        endpoint: MentorEndpoint::ConfidenceBuilding,
        fields: &[
            FieldDescriptor::text("context", "Context", "e.g., Job Interview, Public Speaking"),
            FieldDescriptor::textarea("past_experiences", "Past Experiences", "Describe your past experiences..."),
        ],
    },
    Topic {
        id: TopicId::Stress,
        label: "Stress Management",
        description: "Get tips for managing career-related stress",
        endpoint: MentorEndpoint::StressManagement,
        fields: &[
            FieldDescriptor::textarea("current_situation", "Current Situation", "Describe your current situation..."),
            FieldDescriptor::tags("stress_factors", "Stress Factors", "e.g., Deadlines, Work-Life Balance"),
            FieldDescriptor::tags("previous_strategies", "Previous Strategies", "e.g., Meditation, Exercise"),
        ],
    },
];
