//! Fixed page header: brand, section links, theme toggle, mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Scroll position drives the compact header style and the active link;
//! both are recomputed from live geometry on every scroll event.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::nav::{NavState, SECTIONS};

/// Element id of the fixed header, used to offset smooth-scroll targets.
pub const HEADER_ID: &str = "header";

/// Smooth-scroll to section `id` and close the mobile menu.
pub fn scroll_to_section(nav: RwSignal<NavState>, id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::nav::scroll_target;
        use crate::util::dom;

        if let Some(top) = dom::document_top(id) {
            dom::smooth_scroll_to(scroll_target(top, dom::offset_height(HEADER_ID)));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
    nav.update(NavState::close_menu);
}

#[cfg(feature = "hydrate")]
fn refresh_scroll_state(nav: RwSignal<NavState>) {
    use crate::state::nav::section_ids;
    use crate::util::dom;

    let spans = dom::section_spans(&section_ids());
    let scroll_y = dom::scroll_y();
    nav.try_update(|n| n.on_scroll(scroll_y, &spans));
}

#[component]
pub fn NavBar(brand: String) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || refresh_scroll_state(nav));
        let scroll = window_event_listener(leptos::ev::scroll, move |_| refresh_scroll_state(nav));
        let keys = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                nav.update(NavState::close_menu);
            }
        });
        on_cleanup(move || {
            scroll.remove();
            keys.remove();
        });
    }

    let follow = move |ev: leptos::ev::MouseEvent, id: &'static str| {
        ev.prevent_default();
        scroll_to_section(nav, id);
    };

    view! {
        <header id=HEADER_ID class="header" class:scrolled=move || nav.get().header_scrolled>
            <nav class="nav">
                <a href="#home" class="nav__brand" on:click=move |ev| follow(ev, "home")>
                    {brand}
                </a>
                <ul class="nav__menu" class:active=move || nav.get().menu_open>
                    {SECTIONS
                        .iter()
                        .map(|(id, label)| {
                            let id = *id;
                            view! {
                                <li class="nav__item">
                                    <a
                                        href=format!("#{id}")
                                        class="nav__link"
                                        class:active=move || nav.get().is_active(id)
                                        on:click=move |ev| follow(ev, id)
                                    >
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="nav__actions">
                    <ThemeToggle/>
                    <button
                        class="nav__toggle"
                        class:active=move || nav.get().hamburger_open
                        aria-label="Toggle navigation"
                        aria-expanded=move || nav.get().menu_open.to_string()
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        <span class="nav__bar"></span>
                        <span class="nav__bar"></span>
                        <span class="nav__bar"></span>
                    </button>
                </div>
            </nav>
        </header>
    }
}
