use clap::{Parser, Subcommand};

use career_mentor::booking::SessionType;
use career_mentor::gateway::DEFAULT_ORIGIN;
use career_mentor::roadmap::ExperienceLevel;
use career_mentor::TopicId;

#[derive(Parser, Debug)]
#[clap(
    name = "career_mentor",
    about = "Ask the AI career mentor from the terminal",
    rename_all = "kebab-case"
)]
pub struct Cli {
    /// Origin of the career-guidance API
    #[arg(long, env = "CAREER_API_ORIGIN", default_value = DEFAULT_ORIGIN)]
    pub origin: String,

    /// Request timeout in seconds
    #[arg(long, env = "CAREER_API_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List mentor topics and their form fields
    Topics,
    /// Ask the mentor a question
    Ask {
        /// Topic to ask about
        #[arg(long, short, default_value = "general")]
        topic: TopicId,

        /// Form field as name=value (tags are comma separated)
        #[arg(long = "field", short = 'f', value_parser = parse_field)]
        fields: Vec<(String, String)>,

        /// The question
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Generate a career roadmap
    Roadmap {
        #[arg(long)]
        career_field: String,

        #[arg(long, default_value = "beginner")]
        level: ExperienceLevel,

        /// Interest to include (repeatable)
        #[arg(long = "interest")]
        interests: Vec<String>,
    },
    /// Book a counseling session
    Book {
        /// Counselor id, see `counselors`
        #[arg(long)]
        counselor: String,

        #[arg(long, default_value = "chat")]
        session_type: SessionType,

        /// Preferred date, YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Preferred time, HH:MM
        #[arg(long)]
        time: String,
    },
    /// List the counselors available for booking
    Counselors,
    /// Show success stories
    Stories,
    /// Check that the API is up
    Health,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))
}
