//! Notification banner host.
//!
//! Renders whatever `NotificationState` holds and owns the auto-dismiss
//! timers, so callers only ever call `NotificationState::show`.

use leptos::prelude::*;

use crate::state::notification::NotificationState;
#[cfg(feature = "hydrate")]
use crate::state::notification::AUTO_DISMISS_MS;

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationState>>();

    #[cfg(feature = "hydrate")]
    {
        let current_id = Memo::new(move |_| notices.with(|n| n.current.as_ref().map(|c| c.id)));
        Effect::new(move || {
            let Some(id) = current_id.get() else {
                return;
            };
            gloo_timers::callback::Timeout::new(AUTO_DISMISS_MS, move || {
                notices.try_update(|n| n.dismiss(id));
            })
            .forget();
        });
    }

    view! {
        {move || {
            notices
                .get()
                .current
                .map(|n| {
                    let id = n.id;
                    view! {
                        <div
                            class=format!("notification notification--{}", n.severity.as_str())
                            role="status"
                            aria-live="polite"
                        >
                            <span class="notification__message">{n.message}</span>
                            <button
                                class="notification__close"
                                aria-label="Dismiss notification"
                                on:click=move |_| {
                                    notices.update(|s| {
                                        s.dismiss(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
