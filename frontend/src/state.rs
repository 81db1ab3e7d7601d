use leptos::prelude::*;
use leptos::task::spawn_local;

use career_mentor::{CareerGateway, MentorSession, TopicId};

use crate::api;

/// Top-level screens reachable from the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Mentor,
    Roadmap,
    Booking,
    Stories,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Mentor, Page::Roadmap, Page::Booking, Page::Stories];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Mentor => "AI Mentor",
            Page::Roadmap => "Roadmap Generator",
            Page::Booking => "Book Counseling",
            Page::Stories => "Success Stories",
        }
    }
}

/// Shared application state, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct AppState {
    // --- Read signals (for components to subscribe to) ---
    pub page: ReadSignal<Page>,
    pub session: ReadSignal<MentorSession>,

    // --- Write signals (for mutating state) ---
    pub set_page: WriteSignal<Page>,
    pub set_session: WriteSignal<MentorSession>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let (page, set_page) = signal(Page::default());
        let (session, set_session) = signal(MentorSession::new());

        let state = Self { page, session, set_page, set_session };
        provide_context(state);
        state
    }

    pub fn select_topic(&self, topic: TopicId) {
        self.set_session.update(|s| s.select_topic(topic));
    }

    pub fn set_field(&self, name: &str, raw: &str) {
        self.set_session.update(|s| {
            if let Err(e) = s.set_field(name, raw) {
                log::warn!("Ignoring input: {e}");
            }
        });
    }

    pub fn set_query(&self, query: String) {
        self.set_session.update(|s| s.set_query(query));
    }

    /// Submit the active topic's query; the answer lands in the session's
    /// cache for that topic whenever it arrives.
    pub fn submit(&self) {
        let mut pending = None;
        self.set_session.update(|s| pending = s.submit());
        let Some(pending) = pending else {
            return;
        };

        let set_session = self.set_session;
        spawn_local(async move {
            let outcome = api::gateway().ask_mentor(pending.endpoint, &pending.body).await;
            if let Err(e) = &outcome {
                log::error!("Mentor request for {} failed: {e}", pending.topic);
            }
            set_session.update(|s| s.complete(pending, outcome));
        });
    }
}
