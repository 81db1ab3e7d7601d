use leptos::prelude::*;
use leptos::task::spawn_local;

use career_mentor::models::SuccessStory;
use career_mentor::CareerGateway;

use crate::api;

/// Success stories, fetched once when the screen opens.
#[component]
pub fn StoriesPage() -> impl IntoView {
    let (stories, set_stories) = signal(Vec::<SuccessStory>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::gateway().success_stories().await {
            Ok(list) => set_stories.set(list),
            Err(e) => log::error!("Failed to load success stories: {e}"),
        }
        set_loading.set(false);
    });

    view! {
        <div class="success-stories">
            <h2>"Success Stories"</h2>
            {move || {
                if loading.get() {
                    return view! { <div class="loading">"Loading success stories..."</div> }.into_any();
                }
                let list = stories.get();
                if list.is_empty() {
                    return view! {
                        <div class="no-stories">"No success stories available at the moment."</div>
                    }
                    .into_any();
                }
                view! {
                    <div class="stories-grid">
                        <For each=move || stories.get() key=|story| story.id let:story>
                            <div class="story-card">
                                <h3>{story.name}</h3>
                                <h4>{story.field}</h4>
                                <p>{story.story}</p>
                            </div>
                        </For>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
