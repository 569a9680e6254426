//! Hero section: rain background, floating decoration, particles, intro.

use leptos::prelude::*;

use crate::components::nav_bar::scroll_to_section;
use crate::components::rain_canvas::RainCanvas;
use crate::state::motion::{ParticleSpec, TYPEWRITER_CURSOR, Typewriter, decor_style, parallax_offset};
use crate::state::nav::NavState;

/// One floating decorative element.
#[derive(Clone, Copy, Debug)]
struct Decor {
    class: &'static str,
    text: Option<&'static str>,
    /// Delay after load before its float animation starts.
    delay_ms: u32,
    duration_s: f64,
}

const DECOR: &[Decor] = &[
    Decor { class: "shape shape--circle", text: None, delay_ms: 0, duration_s: 8.0 },
    Decor { class: "shape shape--square", text: None, delay_ms: 300, duration_s: 10.0 },
    Decor { class: "shape shape--triangle", text: None, delay_ms: 600, duration_s: 12.0 },
    Decor { class: "code-element", text: Some("fn main() {}"), delay_ms: 200, duration_s: 6.0 },
    Decor { class: "code-element", text: Some("let x = 42;"), delay_ms: 700, duration_s: 7.0 },
    Decor { class: "code-element", text: Some("impl Display"), delay_ms: 1200, duration_s: 8.0 },
    Decor { class: "code-element", text: Some("async move {}"), delay_ms: 1700, duration_s: 6.5 },
];

#[component]
fn DecorItem(
    decor: Decor,
    index: usize,
    pointer: RwSignal<Option<(f64, f64)>>,
    viewport: RwSignal<(f64, f64)>,
) -> impl IntoView {
    let started = RwSignal::new(false);
    let hovered = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(decor.delay_ms, move || {
        started.try_set(true);
    })
    .forget();

    let style = move || {
        let offset = pointer
            .get()
            .map_or((0.0, 0.0), |p| parallax_offset(p, viewport.get(), index));
        decor_style(decor.duration_s, started.get(), hovered.get(), offset)
    };

    view! {
        <div
            class=decor.class
            style=style
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            {decor.text}
        </div>
    }
}

/// Floating shapes and code snippets with pointer parallax, plus particles.
#[component]
fn HeroDecor() -> impl IntoView {
    let pointer = RwSignal::new(None::<(f64, f64)>);
    let viewport = RwSignal::new((0.0_f64, 0.0_f64));
    let particles = RwSignal::new(Vec::<ParticleSpec>::new());

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::state::motion::{FrameCoalescer, particles as make_particles};
        use crate::util::capabilities::{Browser, Capabilities};
        use crate::util::dom;

        Effect::new(move || {
            particles.set(make_particles(&Browser, &mut canvas::engine::js_random));
        });

        // At most one parallax recomputation per display frame; intermediate
        // pointer positions are dropped.
        let frames = Rc::new(RefCell::new(FrameCoalescer::<(f64, f64)>::default()));
        let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            if Browser.prefers_reduced_motion() {
                return;
            }
            let position = (f64::from(ev.client_x()), f64::from(ev.client_y()));
            if !frames.borrow_mut().push(position) {
                return;
            }
            let frames = Rc::clone(&frames);
            request_animation_frame(move || {
                let Some(position) = frames.borrow_mut().take() else {
                    return;
                };
                viewport.try_set(dom::viewport_size());
                pointer.try_set(Some(position));
            });
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="hero__decor" aria-hidden="true">
            {DECOR
                .iter()
                .enumerate()
                .map(|(index, decor)| view! { <DecorItem decor=*decor index pointer viewport/> })
                .collect_view()}
            <div class="particles">
                {move || {
                    particles
                        .get()
                        .into_iter()
                        .map(|p| view! { <span class="particle" style=p.style()></span> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// Tagline that types itself out after load. The server renders the full
/// text; hydration restarts it from empty unless motion is reduced.
#[component]
fn TypedTagline(text: String) -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::finished(&text));

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::time::Duration;

        use gloo_timers::future::sleep;

        use crate::state::motion::{TYPEWRITER_CHAR_MS, TYPEWRITER_CURSOR_HOLD_MS, TYPEWRITER_START_DELAY_MS};
        use crate::util::capabilities::{Browser, Capabilities};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = Arc::clone(&alive);
        Effect::new(move || {
            if Browser.prefers_reduced_motion() {
                return;
            }
            typewriter.set(Typewriter::new(&text));
            let alive = Arc::clone(&alive_task);
            leptos::task::spawn_local(async move {
                sleep(Duration::from_millis(u64::from(TYPEWRITER_START_DELAY_MS))).await;
                while alive.load(Ordering::Relaxed) {
                    match typewriter.try_update(Typewriter::step) {
                        Some(false) => sleep(Duration::from_millis(u64::from(TYPEWRITER_CHAR_MS))).await,
                        _ => break,
                    }
                }
                sleep(Duration::from_millis(u64::from(TYPEWRITER_CURSOR_HOLD_MS))).await;
                typewriter.try_update(Typewriter::hide_cursor);
            });
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! {
        <p class="hero__tagline">
            {move || typewriter.with(Typewriter::visible_text)}
            {move || {
                typewriter
                    .with(Typewriter::cursor_visible)
                    .then(|| view! { <span class="typewriter-cursor">{TYPEWRITER_CURSOR}</span> })
            }}
        </p>
    }
}

#[component]
pub fn Hero(name: String, title: String, tagline: String) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <section id="home" class="hero">
            <RainCanvas/>
            <HeroDecor/>
            <div class="hero__content">
                <p class="hero__greeting">"Hi, I'm"</p>
                <h1 class="hero__name">{name}</h1>
                <h2 class="hero__title">{title}</h2>
                <TypedTagline text=tagline/>
                <div class="hero__actions">
                    <a
                        href="#projects"
                        class="btn btn--primary"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section(nav, "projects");
                        }
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="btn btn--outline"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section(nav, "contact");
                        }
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}
