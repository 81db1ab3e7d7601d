#![cfg(feature = "native")]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use career_mentor::booking::{BookingForm, SessionType};
use career_mentor::http::HttpGateway;
use career_mentor::roadmap::RoadmapForm;
use career_mentor::segment::Card;
use career_mentor::{ApiConfig, AppError, CareerGateway, MentorSession, TopicId};

const PREFIX: &str = "/uccha-shiksha/career-guidance";

#[derive(Clone, Default)]
struct StubState {
    bookings: Arc<AtomicU64>,
}

async fn mentor(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({ "response": format!("### You asked\n{}", body["query"].as_str().unwrap_or_default()) }))
}

async fn skills_gap(Json(body): Json<Value>) -> Json<Value> {
    let skills = body["current_skills"].as_array().map(Vec::len).unwrap_or_default();
    Json(json!({ "analysis": format!(
        "* You listed {skills} skills\n* Target: *{}*",
        body["target_role"].as_str().unwrap_or_default()
    ) }))
}

async fn networking(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({ "script": format!("Hello from {} via {}", body["user_name"].as_str().unwrap(), body["platform"].as_str().unwrap()) }))
}

async fn stress() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": "AI model not available" }))).into_response()
}

async fn portfolio() -> Response {
    (StatusCode::OK, "not json").into_response()
}

async fn roadmap(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({ "roadmap": format!("1. Study {}\n2. Build projects", body["career_field"].as_str().unwrap()) }))
}

async fn schedule(State(state): State<StubState>, Json(mut body): Json<Value>) -> Json<Value> {
    let id = state.bookings.fetch_add(1, Ordering::SeqCst) + 1;
    body["id"] = json!(id);
    body["status"] = json!("scheduled");
    if body["session_type"] == "video" {
        body["meeting_link"] = json!(format!("https://meet.google.com/placeholder-{id}"));
    }
    Json(body)
}

async fn success_stories() -> Json<Value> {
    Json(json!([
        { "id": 1, "name": "John Doe", "field": "Software Engineering", "story": "Self-taught, now leads a team." },
        { "id": 2, "name": "Jane Smith", "field": "Data Science", "story": "Moved over from marketing." }
    ]))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "api_key_configured": true, "model_initialized": true, "model_used": "stub" }))
}

/// Starts the stub API on an ephemeral port and returns a gateway pointed at it.
async fn spawn_stub() -> HttpGateway {
    let api = Router::new()
        .route("/mentor", post(mentor))
        .route("/mentor/skills-gap", post(skills_gap))
        .route("/mentor/networking-script", post(networking))
        .route("/mentor/stress-management", post(stress))
        .route("/mentor/portfolio-guidance", post(portfolio))
        .route("/roadmap", post(roadmap))
        .route("/schedule", post(schedule))
        .route("/success-stories", get(success_stories))
        .route("/health", get(health))
        .with_state(StubState::default());
    let app = Router::new().nest(PREFIX, api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    HttpGateway::new(ApiConfig::new(format!("http://{addr}")), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn general_question_round_trip() {
    let gateway = spawn_stub().await;
    let mut session = MentorSession::new();
    session.set_query("How do I start?");

    assert!(session.ask(&gateway).await);
    let cards = session.cards().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title(), Some("You asked"));
    assert!(cards[0].body().starts_with("How do I start? Please provide a concise response"));
    assert_eq!(session.query(), "");
}

#[tokio::test]
async fn skills_answer_is_read_from_analysis_field() {
    let gateway = spawn_stub().await;
    let mut session = MentorSession::new();
    session.select_topic(TopicId::Skills);
    session.set_field("current_skills", "Rust, SQL, Go").unwrap();
    session.set_field("target_role", "Backend Engineer").unwrap();
    session.set_query("gaps?");
    session.ask(&gateway).await;

    let cards = session.cards().unwrap();
    assert_eq!(
        cards,
        vec![
            Card::Paragraph { body: "- You listed 3 skills".into() },
            Card::Paragraph { body: "- Target: **Backend Engineer**".into() },
        ]
    );
}

#[tokio::test]
async fn networking_defaults_reach_the_server() {
    let gateway = spawn_stub().await;
    let mut session = MentorSession::new();
    session.select_topic(TopicId::Networking);
    session.set_query("help me connect");
    session.ask(&gateway).await;
    assert_eq!(session.response(TopicId::Networking), Some("Hello from User via linkedin"));
}

#[tokio::test]
async fn server_detail_is_surfaced_by_the_gateway() {
    let gateway = spawn_stub().await;
    let topic = TopicId::Stress.topic();
    let body = career_mentor::request::build_request(
        topic.endpoint,
        "overwhelmed",
        topic.fields,
        &Default::default(),
    );
    let err = gateway.ask_mentor(topic.endpoint, &body).await.unwrap_err();
    assert_eq!(err, AppError::Server { status: 500, detail: Some("AI model not available".into()) });

    let mut session = MentorSession::new();
    session.select_topic(TopicId::Stress);
    session.set_query("overwhelmed");
    session.ask(&gateway).await;
    assert_eq!(session.error(), Some("Failed to get stress advice. Please try again."));
    assert_eq!(session.query(), "overwhelmed");
}

#[tokio::test]
async fn unreadable_success_body_shows_placeholder() {
    let gateway = spawn_stub().await;
    let mut session = MentorSession::new();
    session.select_topic(TopicId::Portfolio);
    session.set_query("what to build");
    session.ask(&gateway).await;
    assert_eq!(session.error(), None);
    assert_eq!(session.cards(), Some(vec![Card::Placeholder]));
}

/// Answers the first request with 200 headers and a truncated body, then
/// closes the connection.
async fn spawn_truncating_stub() -> HttpGateway {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        read_request(&mut socket).await;
        socket
            .write_all(
                b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 200\r\n\r\n{\"response\":",
            )
            .await
            .unwrap();
        socket.flush().await.unwrap();
    });

    HttpGateway::new(ApiConfig::new(format!("http://{addr}")), Duration::from_secs(5)).unwrap()
}

/// Consumes one request: headers, then `content-length` bytes of body.
async fn read_request(socket: &mut tokio::net::TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..head_end]).to_ascii_lowercase();
        let body_len = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|len| len.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= head_end + 4 + body_len {
            return;
        }
    }
}

#[tokio::test]
async fn body_cut_short_is_a_network_failure() {
    let gateway = spawn_truncating_stub().await;
    let mut session = MentorSession::new();
    session.select_topic(TopicId::Skills);
    session.set_query("what am I missing?");

    assert!(session.ask(&gateway).await);
    assert_eq!(session.error(), Some("Failed to get skills advice. Please try again."));
    assert_eq!(session.query(), "what am I missing?");
    assert_eq!(session.response(TopicId::Skills), None);
    assert_eq!(session.cards(), None);
}

#[tokio::test]
async fn truncated_body_error_is_transport_not_decode() {
    let gateway = spawn_truncating_stub().await;
    let stories = gateway.success_stories().await.unwrap_err();
    assert!(matches!(stories, AppError::Network { .. }), "got {stories:?}");
}

#[tokio::test]
async fn unreachable_api_is_a_network_error() {
    let gateway = HttpGateway::new(ApiConfig::new("http://127.0.0.1:9"), Duration::from_secs(2)).unwrap();
    let err = gateway.success_stories().await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn roadmap_steps() {
    let gateway = spawn_stub().await;
    let mut form = RoadmapForm::new();
    form.career_field = "Data Science".into();
    form.add_interest("ML");
    let roadmap = gateway.generate_roadmap(&form.to_request().unwrap()).await.unwrap();
    assert_eq!(roadmap.steps(), vec!["1. Study Data Science", "2. Build projects"]);
}

#[tokio::test]
async fn booking_with_past_date_is_sent_and_confirmed() {
    let gateway = spawn_stub().await;
    let form = BookingForm {
        counselor_id: "3".into(),
        session_type: SessionType::Video,
        preferred_date: "1999-12-31".into(),
        preferred_time: "09:00".into(),
        ..BookingForm::new()
    };
    let booking = gateway.schedule_session(&form.to_request().unwrap()).await.unwrap();
    assert_eq!(booking.id, 1);
    assert_eq!(booking.preferred_date, "1999-12-31");
    assert_eq!(booking.meeting_link.as_deref(), Some("https://meet.google.com/placeholder-1"));

    let chat = BookingForm { session_type: SessionType::Chat, ..form };
    let booking = gateway.schedule_session(&chat.to_request().unwrap()).await.unwrap();
    assert_eq!(booking.id, 2);
    assert_eq!(booking.meeting_link, None);
}

#[tokio::test]
async fn stories_and_health() {
    let gateway = spawn_stub().await;
    let stories = gateway.success_stories().await.unwrap();
    assert_eq!(stories.len(), 2);
    assert_eq!(stories[1].field, "Data Science");

    let health = gateway.health().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.model_used.as_deref(), Some("stub"));
}
