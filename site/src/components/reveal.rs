//! Scroll-triggered reveals.
//!
//! `Reveal` wraps a content block and animates it in the first time an
//! `IntersectionObserver` sees enough of it. `watch_section` is the
//! scroll-position trigger shared by the stats and skills panels.

use leptos::prelude::*;

use crate::state::reveal::RevealState;

/// Run `on_position(section_top, viewport_height)` once after mount and on
/// every scroll. Missing sections are skipped silently.
pub fn watch_section<F>(id: &'static str, on_position: F)
where
    F: Fn(f64, f64) + Copy + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use crate::util::dom;

        let check = move || {
            if let Some(top) = dom::viewport_top(id) {
                on_position(top, dom::viewport_size().1);
            }
        };
        Effect::new(move || check());
        let handle = window_event_listener(leptos::ev::scroll, move |_| check());
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, on_position);
    }
}

#[cfg(feature = "hydrate")]
fn observe(el: &web_sys::HtmlDivElement, id: String, state: RwSignal<RevealState>) {
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::state::reveal::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

    let key = id.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let ratio = entry.intersection_ratio();
                if state.try_update(|s| s.observe(&key, ratio)).unwrap_or(true) {
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(el);
            callback.forget();
        }
        Err(e) => {
            // Without an observer the block would never appear; show it now.
            log::warn!("reveal observer unavailable: {e:?}");
            state.update(|s| {
                s.observe(&id, 1.0);
            });
        }
    }
}

#[component]
pub fn Reveal(#[prop(into)] id: String, #[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let state = expect_context::<RwSignal<RevealState>>();
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let id = id.clone();
        Effect::new(move || {
            if let Some(el) = node.get() {
                observe(&el, id.clone(), state);
            }
        });
    }
    let key = id.clone();

    view! {
        <div
            node_ref=node
            id=id
            class=format!("reveal {class}")
            class:animate-in=move || state.with(|s| s.is_revealed(&key))
        >
            {children()}
        </div>
    }
}
