use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use career_mentor::models::RoadmapResponse;
use career_mentor::roadmap::{ExperienceLevel, RoadmapForm};
use career_mentor::CareerGateway;

use crate::api;

const ROADMAP_FAILURE: &str = "Failed to generate roadmap. Please try again.";

/// Career roadmap generator: field, level and interests in, steps out.
#[component]
pub fn RoadmapPage() -> impl IntoView {
    let form = RwSignal::new(RoadmapForm::new());
    let (interest, set_interest) = signal(String::new());
    let (roadmap, set_roadmap) = signal(None::<RoadmapResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let add_interest = move || {
        let mut added = false;
        form.update(|f| added = f.add_interest(&interest.get_untracked()));
        if added {
            set_interest.set(String::new());
        }
    };

    let on_interest_key = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            add_interest();
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let request = match form.with_untracked(RoadmapForm::to_request) {
            Ok(request) => request,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::gateway().generate_roadmap(&request).await {
                Ok(resp) => set_roadmap.set(Some(resp)),
                Err(e) => {
                    log::error!("Roadmap request failed: {e}");
                    set_error.set(Some(ROADMAP_FAILURE.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="roadmap-generator">
            <h2>"Career Roadmap Generator"</h2>
            <form class="roadmap-form" on:submit=on_submit>
                <div class="form-group">
                    <label>"Career Field"</label>
                    <input
                        type="text"
                        class="form-input"
                        placeholder="e.g. Software Engineering"
                        prop:value=move || form.with(|f| f.career_field.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.career_field = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Experience Level"</label>
                    <select
                        class="form-select"
                        on:change=move |ev| {
                            match event_target_value(&ev).parse::<ExperienceLevel>() {
                                Ok(level) => form.update(|f| f.experience_level = level),
                                Err(e) => log::warn!("{e}"),
                            }
                        }
                    >
                        {ExperienceLevel::ALL
                            .into_iter()
                            .map(|level| {
                                view! {
                                    <option
                                        value=level.as_str()
                                        selected=move || form.with(|f| f.experience_level == level)
                                    >
                                        {level.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Interests"</label>
                    <div class="interest-input">
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Add an interest and press Enter"
                            prop:value=interest
                            on:input=move |ev| set_interest.set(event_target_value(&ev))
                            on:keydown=on_interest_key
                        />
                        <button type="button" on:click=move |_| add_interest()>"Add"</button>
                    </div>
                    <div class="interest-tags">
                        {move || {
                            form.with(|f| {
                                f.interests()
                                    .iter()
                                    .enumerate()
                                    .map(|(index, interest)| {
                                        let interest = interest.clone();
                                        view! {
                                            <span class="interest-tag">
                                                {interest}
                                                <button
                                                    type="button"
                                                    on:click=move |_| form.update(|f| {
                                                        f.remove_interest(index);
                                                    })
                                                >
                                                    "×"
                                                </button>
                                            </span>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </div>
                </div>
                <button
                    type="submit"
                    class="submit-btn"
                    disabled=move || loading.get() || !form.with(RoadmapForm::is_ready)
                >
                    {move || if loading.get() { "Generating..." } else { "Generate Roadmap" }}
                </button>
            </form>

            {move || error.get().map(|err| view! { <div class="error">{err}</div> })}

            {move || {
                roadmap.get().map(|resp| {
                    view! {
                        <div class="roadmap-result">
                            <h3>"Your Career Roadmap"</h3>
                            <div class="roadmap-content">
                                {resp
                                    .steps()
                                    .into_iter()
                                    .map(|step| view! { <p>{step.to_string()}</p> })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
