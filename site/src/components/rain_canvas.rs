//! Bridge between Leptos and the imperative `canvas::engine::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns the simulation and painting; this host owns timing.
//! A local task ticks every `TICK_INTERVAL_MS`, re-reads the reduced-motion
//! preference and the theme on each tick, and applies any pending resize.

use leptos::prelude::*;

#[component]
pub fn RainCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::time::Duration;

        use canvas::consts::TICK_INTERVAL_MS;
        use canvas::engine::{Engine, js_random};

        use crate::state::theme::ThemeState;
        use crate::util::capabilities::{Browser, Capabilities};
        use crate::util::dom;

        let theme = expect_context::<RwSignal<ThemeState>>();
        let viewport = RwSignal::new(dom::viewport_size());
        let resize = window_event_listener(leptos::ev::resize, move |_| viewport.set(dom::viewport_size()));

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = Arc::clone(&alive);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let (width, height) = viewport.get_untracked();
            let mut engine = match Engine::new(canvas, width, height) {
                Ok(engine) => engine,
                Err(e) => {
                    log::warn!("rain canvas disabled: {e:?}");
                    return;
                }
            };
            let alive = Arc::clone(&alive_task);
            leptos::task::spawn_local(async move {
                let mut size = (width, height);
                while alive.load(Ordering::Relaxed) {
                    gloo_timers::future::sleep(Duration::from_millis(u64::from(TICK_INTERVAL_MS))).await;
                    let Some(latest) = viewport.try_get_untracked() else {
                        break;
                    };
                    if latest != size {
                        engine.resize(latest.0, latest.1);
                        size = latest;
                    }
                    if Browser.prefers_reduced_motion() {
                        continue;
                    }
                    let dark = theme.try_get_untracked().is_some_and(|t| t.theme.is_dark());
                    if let Err(e) = engine.step(dark, &mut js_random) {
                        log::warn!("rain canvas stopped: {e:?}");
                        break;
                    }
                }
            });
        });

        on_cleanup(move || {
            alive.store(false, Ordering::Relaxed);
            resize.remove();
        });
    }

    view! { <canvas node_ref=canvas_ref id="matrix-canvas" class="hero__canvas" aria-hidden="true"></canvas> }
}
