//! `mailto:` link that copies the address instead of navigating when it can.

use leptos::prelude::*;

use crate::state::notification::NotificationState;

#[component]
pub fn EmailLink(email: String) -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationState>>();
    let href = format!("mailto:{email}");
    let label = email.clone();

    let on_click = {
        let href = href.clone();
        move |ev: leptos::ev::MouseEvent| {
            #[cfg(feature = "hydrate")]
            {
                use crate::util::capabilities::Browser;
                use crate::util::clipboard::{copied_notice, copy_text};

                ev.prevent_default();
                let email = email.clone();
                let href = href.clone();
                leptos::task::spawn_local(async move {
                    if let Some((message, severity)) = copied_notice(copy_text(&email, &Browser).await) {
                        notices.try_update(|n| n.show(message, severity));
                    } else if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&href);
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&ev, &email, &href, notices);
            }
        }
    };

    view! {
        <a href=href class="contact__email" title="Click to copy" on:click=on_click>
            {label}
        </a>
    }
}
