//! Rain simulation: one falling drop per column.
//!
//! The field knows nothing about canvases or timers. Each call to
//! [`RainField::tick`] yields the glyphs to paint for that frame and then
//! advances every drop by one row. Randomness is injected as a closure
//! returning values in `[0, 1)` so tests can drive it deterministically.

#[cfg(test)]
#[path = "rain_test.rs"]
mod rain_test;

use crate::consts::{COLUMN_WIDTH_PX, RESET_PROBABILITY, ROW_HEIGHT_PX};

/// The two characters the rain is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Zero,
    One,
}

impl Glyph {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::One => "1",
        }
    }

    /// Pick a glyph from a uniform sample in `[0, 1)`.
    #[must_use]
    pub fn from_sample(sample: f64) -> Self {
        if sample < 0.5 { Self::Zero } else { Self::One }
    }
}

/// A single glyph placement within a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphDraw {
    pub x: f64,
    pub y: f64,
    pub glyph: Glyph,
}

/// Everything the renderer needs for one repaint.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub glyphs: Vec<GlyphDraw>,
}

/// Drop positions plus the surface size they fall through.
#[derive(Debug, Clone, PartialEq)]
pub struct RainField {
    width: f64,
    height: f64,
    drops: Vec<f64>,
}

impl RainField {
    /// Create a field sized for a `width` x `height` surface, with each drop
    /// seeded at `rng() * height` so the columns start scattered.
    ///
    /// The column count is fixed here and never recomputed, even when the
    /// surface is later resized.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let columns = (width / COLUMN_WIDTH_PX).floor() as usize;
        let drops = (0..columns).map(|_| rng() * height).collect();
        Self { width, height, drops }
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    #[must_use]
    pub fn drops(&self) -> &[f64] {
        &self.drops
    }

    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Lowest position a drop can occupy: one row below the bottom edge.
    #[must_use]
    pub fn floor_y(&self) -> f64 {
        self.height + ROW_HEIGHT_PX
    }

    /// Track a new surface size. Drops keep their columns; positions are
    /// clamped so a shrink never leaves one further down than `floor_y`.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let floor = self.floor_y();
        for y in &mut self.drops {
            *y = y.min(floor);
        }
    }

    /// Produce this tick's glyphs, then advance every drop one row.
    ///
    /// A drop already past the bottom edge restarts at the top with
    /// probability [`RESET_PROBABILITY`]; otherwise it waits at `floor_y`.
    #[allow(clippy::cast_precision_loss)]
    pub fn tick(&mut self, rng: &mut impl FnMut() -> f64) -> Frame {
        let floor = self.floor_y();
        let mut glyphs = Vec::with_capacity(self.drops.len());
        for (i, y) in self.drops.iter_mut().enumerate() {
            glyphs.push(GlyphDraw { x: i as f64 * COLUMN_WIDTH_PX, y: *y, glyph: Glyph::from_sample(rng()) });

            if *y > self.height && rng() < RESET_PROBABILITY {
                *y = 0.0;
            } else {
                *y = (*y + ROW_HEIGHT_PX).min(floor);
            }
        }
        Frame { width: self.width, height: self.height, glyphs }
    }
}
