//! Page state controllers.
//!
//! DESIGN
//! ======
//! Each behavior owns one small state struct with the operations that mutate
//! it. Components hold these in `RwSignal`s (shared ones via context) and
//! render whatever the state says, so every rule here is testable without a
//! browser.

pub mod form;
pub mod motion;
pub mod nav;
pub mod notification;
pub mod reveal;
pub mod stats;
pub mod theme;
