//! Contact form with inline validation and a simulated send.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::form::{ContactFormState, Field, SubmitOutcome};
use crate::state::notification::NotificationState;

#[component]
fn FormField(
    form: RwSignal<ContactFormState>,
    field: Field,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.fields.get(field).to_owned());
    let error = move || form.with(|f| f.error_for(field));
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.fields.set(field, event_target_value(&ev)));

    let control = if multiline {
        view! { <textarea id=field.as_str() name=field.as_str() rows="5" prop:value=value on:input=on_input></textarea> }
            .into_any()
    } else {
        view! { <input id=field.as_str() name=field.as_str() type=input_type prop:value=value on:input=on_input/> }
            .into_any()
    };

    view! {
        <div class="form-group" class:error=move || error().is_some()>
            <label for=field.as_str()>{label}</label>
            {control}
            {move || error().map(|message| view! { <span class="error-message">{message}</span> })}
        </div>
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationState>>();
    let form = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut outcome = SubmitOutcome::Ignored;
        notices.update(|n| form.update(|f| outcome = f.submit(n)));
        if outcome != SubmitOutcome::Accepted {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use std::time::Duration;

            use crate::state::form::SEND_DELAY_MS;

            gloo_timers::future::sleep(Duration::from_millis(u64::from(SEND_DELAY_MS))).await;
            notices.try_update(|n| form.try_update(|f| f.complete(n)));
        });
    };

    view! {
        <form id="contact-form" class="contact-form" novalidate=true on:submit=on_submit>
            <FormField form field=Field::Name label="Name"/>
            <FormField form field=Field::Email label="Email" input_type="email"/>
            <FormField form field=Field::Message label="Message" multiline=true/>
            <button type="submit" class="btn btn--primary" disabled=move || form.get().is_sending()>
                {move || form.get().submit_label()}
            </button>
        </form>
    }
}
