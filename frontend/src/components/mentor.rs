use leptos::ev;
use leptos::prelude::*;

use career_mentor::{TopicId, TOPICS};

use crate::components::fields::FormFields;
use crate::components::response::ResponseDisplay;
use crate::state::AppState;

/// Tabbed mentor screen: topic tabs, topic fields, question box and answer.
#[component]
pub fn MentorPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let active = Memo::new(move |_| state.session.with(|s| s.active_topic()));

    view! {
        <div class="ai-mentor">
            <h2>"AI Career Mentor"</h2>
            <TopicTabs active=active />
            <div class="tab-description">{move || active.get().topic().description}</div>
            <QueryForm active=active />
            <ResponseDisplay />
        </div>
    }
}

#[component]
fn TopicTabs(active: Memo<TopicId>) -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="tabs">
            {TOPICS
                .iter()
                .map(|topic| {
                    let id = topic.id;
                    view! {
                        <button
                            class="tab"
                            class:active=move || active.get() == id
                            on:click=move |_| state.select_topic(id)
                        >
                            {topic.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn QueryForm(active: Memo<TopicId>) -> impl IntoView {
    let state = expect_context::<AppState>();
    let is_sending = move || state.session.with(|s| s.is_sending());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.submit();
    };

    view! {
        <form class="query-form" on:submit=on_submit>
            // Rebuilt only when the tab changes, so typing keeps focus
            {move || {
                let fields = active.get().topic().fields;
                (!fields.is_empty()).then(|| view! { <FormFields fields=fields /> })
            }}
            <div class="query-input-group">
                <input
                    type="text"
                    class="query-input"
                    placeholder=move || active.get().topic().query_placeholder()
                    prop:value=move || state.session.with(|s| s.query().to_string())
                    on:input=move |ev| state.set_query(event_target_value(&ev))
                    disabled=is_sending
                />
                <button type="submit" class="send-btn" disabled=is_sending>
                    {move || if is_sending() { "Sending..." } else { "Send" }}
                </button>
            </div>
        </form>
    }
}
