//! Shared numeric constants for the canvas crate.

// ── Grid ────────────────────────────────────────────────────────

/// Horizontal width of one glyph column, in CSS pixels.
pub const COLUMN_WIDTH_PX: f64 = 20.0;

/// Vertical distance a drop falls per tick, in CSS pixels.
pub const ROW_HEIGHT_PX: f64 = 20.0;

/// Font size used for glyphs. Slightly smaller than a row so trails separate.
pub const GLYPH_FONT_PX: f64 = 16.0;

// ── Timing ──────────────────────────────────────────────────────

/// Repaint period for the host interval.
pub const TICK_INTERVAL_MS: u32 = 50;

/// Chance per tick that a drop past the bottom edge restarts at the top.
pub const RESET_PROBABILITY: f64 = 0.025;

// ── Paint ───────────────────────────────────────────────────────

/// Decay rectangle painted over the whole surface before each frame.
pub const TRAIL_FILL: &str = "rgba(0, 0, 0, 0.05)";
