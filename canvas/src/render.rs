//! Rendering: paints one rain frame to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only [`Frame`] and produces pixels; it does not mutate
//! simulation state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::step`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{GLYPH_FONT_PX, TRAIL_FILL};
use crate::rain::Frame;

/// Glyph color for a light page: translucent teal so the hero text stays
/// readable over the rain.
pub const GLYPH_COLOR_LIGHT: &str = "rgba(33, 128, 141, 0.3)";
/// Glyph color for a dark page.
pub const GLYPH_COLOR_DARK: &str = "rgba(50, 184, 198, 0.5)";

/// Pick the glyph color for the current theme.
#[must_use]
pub fn glyph_color(dark: bool) -> &'static str {
    if dark { GLYPH_COLOR_DARK } else { GLYPH_COLOR_LIGHT }
}

/// Draw a frame: decay rectangle first, then one glyph per column.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, frame: &Frame, dark: bool) -> Result<(), JsValue> {
    ctx.set_fill_style_str(TRAIL_FILL);
    ctx.fill_rect(0.0, 0.0, frame.width, frame.height);

    ctx.set_fill_style_str(glyph_color(dark));
    ctx.set_font(&format!("{GLYPH_FONT_PX}px monospace"));
    for g in &frame.glyphs {
        ctx.fill_text(g.glyph.as_str(), g.x, g.y)?;
    }
    Ok(())
}
