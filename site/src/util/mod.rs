//! Utility helpers shared across site modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component and
//! state logic. Everything that calls into `web_sys` outside a component lives
//! here, behind `hydrate` gates, so the state layer stays testable natively.

pub mod capabilities;
pub mod clipboard;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod storage;
pub mod theme_root;
