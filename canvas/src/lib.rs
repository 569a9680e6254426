//! Falling-glyph background animation for the portfolio hero.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! rain simulation and the only code that touches a 2D canvas context. The
//! Leptos host in `site` decides *when* to tick (interval, reduced motion,
//! theme); this crate decides *what* a tick does.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::Engine`] binding a [`rain::RainField`] to a canvas element |
//! | [`rain`] | Pure drop simulation, testable without a browser |
//! | [`render`] | Paints one [`rain::Frame`] to a `CanvasRenderingContext2d` |
//! | [`consts`] | Grid sizes, timing, and reset probability |

pub mod consts;
pub mod engine;
pub mod rain;
pub mod render;
