//! Root application component, page shell, and shared context.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notification::NotificationHost;
use crate::pages::home::HomePage;
use crate::state::nav::NavState;
use crate::state::notification::NotificationState;
use crate::state::theme::ThemeState;
use crate::util::storage::LocalStorage;
use crate::util::theme_root;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared theme, navigation, and notification state, then
/// routes to the single home page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::default());
    let nav = RwSignal::new(NavState::default());
    let notices = RwSignal::new(NotificationState::default());

    provide_context(theme);
    provide_context(nav);
    provide_context(notices);

    // Effects only run in the browser: the stored preference replaces the
    // light default after hydration, and the root attribute follows it.
    Effect::new(move || {
        theme.set(ThemeState::load(&LocalStorage));
    });
    Effect::new(move || theme_root::apply(theme.get().theme));

    view! {
        <Stylesheet id="site" href="/style.css"/>
        <Title text="Portfolio"/>
        <Meta name="description" content="Personal portfolio: projects, skills, and contact."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
        <NotificationHost/>
    }
}
