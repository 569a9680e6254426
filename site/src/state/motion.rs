//! Decorative hero motion: particles, pointer parallax, staggered reveal,
//! and the typewriter tagline.
//!
//! Randomness is injected as a closure returning samples in `[0, 1)`; the
//! browser passes `Math.random`, tests pass fixed sequences.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::util::capabilities::Capabilities;

/// Number of particles injected into the hero.
pub const PARTICLE_COUNT: usize = 6;
/// Particle float duration range, in seconds.
pub const PARTICLE_DURATION_S: (f64, f64) = (3.0, 7.0);
/// Particle start delay upper bound, in seconds.
pub const PARTICLE_MAX_DELAY_S: f64 = 2.0;

/// Intensity added per tracked element index.
pub const PARALLAX_STEP: f64 = 0.5;
/// Offset in pixels at intensity 1 when the pointer is at a viewport edge.
pub const PARALLAX_RANGE_PX: f64 = 20.0;

/// Animation rate multiplier while a decorative element is hovered.
pub const HOVER_SPEEDUP: f64 = 2.0;
pub const HOVER_SCALE: f64 = 1.1;

/// Delay after load before the tagline starts typing.
pub const TYPEWRITER_START_DELAY_MS: u32 = 1_500;
/// Delay between typed characters.
pub const TYPEWRITER_CHAR_MS: u32 = 50;
/// How long the cursor stays after the last character.
pub const TYPEWRITER_CURSOR_HOLD_MS: u32 = 1_000;
pub const TYPEWRITER_CURSOR: &str = "|";

/// Randomized placement and timing for one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl ParticleSpec {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left_pct, self.top_pct, self.duration_s, self.delay_s
        )
    }
}

/// Generate the hero particles, or none when motion should be reduced.
pub fn particles(caps: &impl Capabilities, rng: &mut impl FnMut() -> f64) -> Vec<ParticleSpec> {
    if caps.prefers_reduced_motion() {
        return Vec::new();
    }
    let (min_s, max_s) = PARTICLE_DURATION_S;
    (0..PARTICLE_COUNT)
        .map(|_| ParticleSpec {
            left_pct: rng() * 100.0,
            top_pct: rng() * 100.0,
            duration_s: min_s + rng() * (max_s - min_s),
            delay_s: rng() * PARTICLE_MAX_DELAY_S,
        })
        .collect()
}

/// Parallax intensity for the element at `index`; deeper layers move more.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn parallax_intensity(index: usize) -> f64 {
    (index + 1) as f64 * PARALLAX_STEP
}

/// Offset for element `index` given a pointer position and viewport size.
///
/// The pointer is normalized to `[-0.5, 0.5]` around the viewport center; a
/// zero-sized viewport yields no offset.
#[must_use]
pub fn parallax_offset(pointer: (f64, f64), viewport: (f64, f64), index: usize) -> (f64, f64) {
    let (vw, vh) = viewport;
    if vw <= 0.0 || vh <= 0.0 {
        return (0.0, 0.0);
    }
    let nx = pointer.0 / vw - 0.5;
    let ny = pointer.1 / vh - 0.5;
    let k = parallax_intensity(index) * PARALLAX_RANGE_PX;
    (nx * k, ny * k)
}

/// CSS for a decorative element: paused until its reveal delay elapses,
/// faster and scaled while hovered, shifted by parallax.
#[must_use]
pub fn decor_style(base_duration_s: f64, started: bool, hovered: bool, offset: (f64, f64)) -> String {
    let (duration, scale) = if hovered { (base_duration_s / HOVER_SPEEDUP, HOVER_SCALE) } else { (base_duration_s, 1.0) };
    let state = if started { "running" } else { "paused" };
    format!(
        "animation-duration: {duration:.2}s; animation-play-state: {state}; \
         transform: translate({:.1}px, {:.1}px) scale({scale});",
        offset.0, offset.1
    )
}

/// Collapses bursts of events into one unit of work per animation frame.
///
/// `push` stores the latest value and reports whether a frame callback must
/// be requested; `take` runs inside that callback and yields the value.
#[derive(Clone, Debug)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
    frame_requested: bool,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self { pending: None, frame_requested: false }
    }
}

impl<T> FrameCoalescer<T> {
    /// Returns `true` when the caller should request a frame.
    pub fn push(&mut self, value: T) -> bool {
        self.pending = Some(value);
        !std::mem::replace(&mut self.frame_requested, true)
    }

    pub fn take(&mut self) -> Option<T> {
        self.frame_requested = false;
        self.pending.take()
    }
}

/// Tagline that types itself out one character at a time behind a cursor.
///
/// Counts characters, not bytes, so multi-byte text never splits a code
/// point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
    cursor: bool,
}

impl Typewriter {
    /// Nothing typed yet, cursor showing.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), typed: 0, cursor: true }
    }

    /// Fully typed with no cursor: the server render and the reduced-motion
    /// state.
    #[must_use]
    pub fn finished(text: &str) -> Self {
        let chars = text.chars().collect::<Vec<_>>();
        Self { typed: chars.len(), chars, cursor: false }
    }

    /// Type one more character. Returns `true` once the whole text is typed.
    pub fn step(&mut self) -> bool {
        self.typed = (self.typed + 1).min(self.chars.len());
        self.is_typed()
    }

    #[must_use]
    pub fn is_typed(&self) -> bool {
        self.typed == self.chars.len()
    }

    pub fn hide_cursor(&mut self) {
        self.cursor = false;
    }

    #[must_use]
    pub fn cursor_visible(&self) -> bool {
        self.cursor
    }

    #[must_use]
    pub fn visible_text(&self) -> String {
        self.chars[..self.typed].iter().collect()
    }
}
