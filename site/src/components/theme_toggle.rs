//! Light/dark toggle button.

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::util::storage::LocalStorage;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    view! {
        <button
            id="theme-toggle"
            class="btn theme-toggle"
            title="Toggle dark mode"
            aria-label="Toggle dark mode"
            on:click=move |_| {
                theme.update(|t| {
                    t.toggle(&LocalStorage);
                });
            }
        >
            <span class="theme-toggle__icon">{move || theme.get().theme.icon()}</span>
        </button>
    }
}
