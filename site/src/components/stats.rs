//! About-section statistics that count up once when scrolled into view.

use leptos::prelude::*;

use crate::components::reveal::watch_section;
use crate::content::Stat;
use crate::state::stats::StatsState;

const STATS_ID: &str = "stats";
/// The counters start when this section crosses the trigger line.
const TRIGGER_SECTION_ID: &str = "about";

#[cfg(feature = "hydrate")]
fn run_counters(state: RwSignal<StatsState>) {
    use std::time::Duration;

    use crate::state::stats::COUNTER_TICK_MS;

    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(Duration::from_millis(u64::from(COUNTER_TICK_MS))).await;
            match state.try_update(StatsState::tick) {
                Some(false) => {}
                _ => break,
            }
        }
    });
}

#[component]
pub fn StatsPanel(stats: Vec<Stat>) -> impl IntoView {
    let values = stats.iter().map(|s| s.value.as_str()).collect::<Vec<_>>();
    let state = RwSignal::new(StatsState::new(&values));

    watch_section(TRIGGER_SECTION_ID, move |top, viewport_height| {
        if state.try_update(|s| s.on_scroll(top, viewport_height)) == Some(true) {
            #[cfg(feature = "hydrate")]
            run_counters(state);
        }
    });

    view! {
        <div id=STATS_ID class="stats">
            {stats
                .into_iter()
                .enumerate()
                .map(|(i, stat)| {
                    view! {
                        <div class="stat">
                            <span class="stat__number">{move || state.with(|s| s.text(i))}</span>
                            <span class="stat__label">{stat.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
