use leptos::prelude::*;

use career_mentor::fields::{FieldDescriptor, FieldKind};

use crate::state::AppState;

/// Inputs for the active topic's extra fields.
#[component]
pub fn FormFields(fields: &'static [FieldDescriptor]) -> impl IntoView {
    view! {
        <div class="form-fields">
            {fields
                .iter()
                .map(|field| {
                    view! {
                        <div class="form-group">
                            <label>{field.label}</label>
                            <FieldInput field=field />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// One input. The raw text stays local so partial input such as a
/// trailing comma or a lone `-` survives parsing into the form.
#[component]
fn FieldInput(field: &'static FieldDescriptor) -> impl IntoView {
    let state = expect_context::<AppState>();
    let initial = state.session.with_untracked(|s| s.form().display(field.name));
    let (raw, set_raw) = signal(initial);

    let apply = move |value: String| {
        state.set_field(field.name, &value);
        set_raw.set(value);
    };
    let placeholder = field.placeholder.unwrap_or_default();

    match field.kind {
        FieldKind::Text | FieldKind::Tags => view! {
            <input
                type="text"
                class="form-input"
                placeholder=placeholder
                prop:value=raw
                on:input=move |ev| apply(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Number => view! {
            <input
                type="number"
                class="form-input"
                placeholder=placeholder
                prop:value=raw
                on:input=move |ev| apply(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Textarea => view! {
            <textarea
                class="form-textarea"
                rows="3"
                placeholder=placeholder
                prop:value=raw
                on:input=move |ev| apply(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Select => view! {
            <select class="form-select" on:change=move |ev| apply(event_target_value(&ev))>
                <option value="">{field.select_prompt()}</option>
                {field
                    .options
                    .iter()
                    .map(|&option| {
                        view! {
                            <option value=option selected=move || raw.get() == option>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
    }
}
