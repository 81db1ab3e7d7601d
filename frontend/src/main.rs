mod api;
mod components;
mod markdown;
mod state;

use leptos::prelude::*;
use leptos::mount::mount_to_body;

use components::booking::BookingPage;
use components::mentor::MentorPage;
use components::nav::Navigation;
use components::roadmap::RoadmapPage;
use components::stories::StoriesPage;
use state::{AppState, Page};

/// Root application component.
#[component]
fn App() -> impl IntoView {
    let state = AppState::provide();

    view! {
        <div class="app">
            <Navigation />
            <main class="main-content">
                {move || match state.page.get() {
                    Page::Mentor => view! { <MentorPage /> }.into_any(),
                    Page::Roadmap => view! { <RoadmapPage /> }.into_any(),
                    Page::Booking => view! { <BookingPage /> }.into_any(),
                    Page::Stories => view! { <StoriesPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
