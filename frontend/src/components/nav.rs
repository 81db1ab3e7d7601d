use leptos::prelude::*;

use crate::state::{AppState, Page};

/// Top navigation bar switching between the main screens.
#[component]
pub fn Navigation() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <nav class="navbar">
            <div class="nav-brand">"Career Mentor"</div>
            <div class="nav-links">
                {Page::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="nav-link"
                                class:active=move || state.page.get() == page
                                on:click=move |_| state.set_page.set(page)
                            >
                                {page.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
