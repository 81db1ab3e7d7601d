mod cli;

use std::time::Duration;

use clap::Parser;
use tracing::info;

use career_mentor::booking::{BookingForm, COUNSELORS};
use career_mentor::http::HttpGateway;
use career_mentor::roadmap::RoadmapForm;
use career_mentor::segment::Card;
use career_mentor::{ApiConfig, CareerGateway, MentorSession, TOPICS};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout only carries answers
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "career_mentor=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ApiConfig::new(cli.origin);
    info!("Using career-guidance API at {}", config.origin());
    let gateway = HttpGateway::new(config, Duration::from_secs(cli.timeout_secs))?;

    match cli.command {
        Commands::Topics => {
            for topic in &TOPICS {
                println!("{:<12} {} ({})", topic.id.as_str(), topic.label, topic.endpoint.path());
                println!("             {}", topic.description);
                for field in topic.fields {
                    let options = if field.options.is_empty() {
                        String::new()
                    } else {
                        format!(" [{}]", field.options.join(" | "))
                    };
                    println!("    -f {}=<{}>  {}{options}", field.name, field.kind, field.label);
                }
            }
        }
        Commands::Ask { topic, fields, query } => {
            let mut session = MentorSession::new();
            session.select_topic(topic);
            for (name, value) in &fields {
                session.set_field(name, value)?;
            }
            session.set_query(query.join(" "));

            if !session.ask(&gateway).await {
                anyhow::bail!("Nothing to ask: the question is empty");
            }
            if let Some(err) = session.error() {
                anyhow::bail!("{err}");
            }
            for card in session.cards().unwrap_or_default() {
                print_card(&card);
            }
        }
        Commands::Roadmap { career_field, level, interests } => {
            let mut form = RoadmapForm::new();
            form.career_field = career_field;
            form.experience_level = level;
            for interest in &interests {
                form.add_interest(interest);
            }
            let roadmap = gateway.generate_roadmap(&form.to_request()?).await?;
            for step in roadmap.steps() {
                println!("{step}");
            }
        }
        Commands::Book { counselor, session_type, date, time } => {
            let form = BookingForm {
                counselor_id: counselor,
                session_type,
                preferred_date: date,
                preferred_time: time,
                ..BookingForm::new()
            };
            let booking = gateway.schedule_session(&form.to_request()?).await?;
            println!("Booking Confirmed!");
            println!("Session ID: {}", booking.id);
            println!("Type: {}", booking.session_type);
            println!("Date: {}", booking.preferred_date);
            println!("Time: {}", booking.preferred_time);
            if let Some(link) = &booking.meeting_link {
                println!("Meeting Link: {link}");
            }
        }
        Commands::Counselors => {
            for counselor in &COUNSELORS {
                println!("{}  {}", counselor.id, counselor.display_name());
            }
        }
        Commands::Stories => {
            let stories = gateway.success_stories().await?;
            if stories.is_empty() {
                println!("No success stories available at the moment.");
            }
            for story in stories {
                println!("## {} ({})\n{}\n", story.name, story.field, story.story);
            }
        }
        Commands::Health => {
            let health = gateway.health().await?;
            println!("status:             {}", health.status);
            println!("api key configured: {}", health.api_key_configured);
            println!("model initialized:  {}", health.model_initialized);
            println!("model used:         {}", health.model_used.as_deref().unwrap_or("-"));
        }
    }

    Ok(())
}

fn print_card(card: &Card) {
    if let Some(title) = card.title() {
        println!("## {title}");
    }
    println!("{}\n", card.body());
}
