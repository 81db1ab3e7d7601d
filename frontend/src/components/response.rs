use leptos::prelude::*;

use career_mentor::segment::{Card, PLACEHOLDER_TEXT};

use crate::markdown;
use crate::state::AppState;

/// Answer area for the active topic: loading text, error, or cards.
#[component]
pub fn ResponseDisplay() -> impl IntoView {
    let state = expect_context::<AppState>();
    let is_sending = Memo::new(move |_| state.session.with(|s| s.is_sending()));
    let error = Memo::new(move |_| state.session.with(|s| s.error().map(str::to_string)));
    let cards = Memo::new(move |_| state.session.with(|s| s.cards()));

    view! {
        <div class="response-container">
            {move || {
                if is_sending.get() {
                    return view! { <div class="loading">"Loading your response..."</div> }.into_any();
                }
                if let Some(err) = error.get() {
                    return view! { <div class="error">{err}</div> }.into_any();
                }
                match cards.get() {
                    Some(cards) => view! {
                        <div class="response-cards">
                            {cards.into_iter().map(|card| view! { <ResponseCard card=card /> }).collect_view()}
                        </div>
                    }
                    .into_any(),
                    None => "".into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn ResponseCard(card: Card) -> impl IntoView {
    if card.is_placeholder() {
        return view! { <div class="no-response">{PLACEHOLDER_TEXT}</div> }.into_any();
    }

    let title = card.title().map(|t| view! { <h3 class="card-title">{t.to_string()}</h3> });
    let body = markdown::to_html(card.body());

    view! {
        <div class="response-card">
            {title}
            <div class="card-content" inner_html=body></div>
        </div>
    }
    .into_any()
}
