//! Reusable page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render state from `crate::state` and own the browser wiring
//! (listeners, timers, observers) for their piece of the page. Browser-only
//! code sits behind the `hydrate` feature so SSR renders plain markup.

pub mod contact_form;
pub mod email_link;
pub mod hero;
pub mod nav_bar;
pub mod notification;
pub mod rain_canvas;
pub mod reveal;
pub mod skills;
pub mod stats;
pub mod theme_toggle;
