//! One-shot reveal transitions: content blocks and skill tags.
//!
//! Both are monotonic. Once something is revealed it stays revealed for the
//! rest of the page lifetime, whatever the scroll position does afterwards.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::BTreeSet;

/// Fraction of a block that must be visible before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Observer root margin: the viewport's bottom edge is pulled up 50 px.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// A section triggers once its top is this far above the viewport bottom.
pub const SECTION_TRIGGER_OFFSET_PX: f64 = 200.0;
/// Per-tag delay for the skill tag stagger.
pub const SKILL_STAGGER_MS: u32 = 50;

/// A guard that lets something happen at most once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    /// Returns `true` only on the first call.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    #[must_use]
    pub fn fired(self) -> bool {
        self.fired
    }
}

/// Whether a section whose top sits at `section_top` (viewport coordinates)
/// has scrolled far enough into view to start its animation.
#[must_use]
pub fn section_triggered(section_top: f64, viewport_height: f64) -> bool {
    section_top < viewport_height - SECTION_TRIGGER_OFFSET_PX
}

#[must_use]
pub fn skill_tag_delay_ms(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(SKILL_STAGGER_MS)
}

/// Blocks that have already animated in, keyed by element id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: BTreeSet<String>,
}

impl RevealState {
    /// Record an intersection report. Only a report at or above the threshold
    /// reveals; returns `true` when this call revealed the block.
    pub fn observe(&mut self, id: &str, visible_ratio: f64) -> bool {
        if visible_ratio < REVEAL_THRESHOLD || self.revealed.contains(id) {
            return false;
        }
        self.revealed.insert(id.to_owned());
        true
    }

    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}

/// Skill tags become visible together (each with its own stagger delay) the
/// first time the skills section crosses the trigger line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkillsState {
    shown: OneShot,
}

impl SkillsState {
    /// Returns `true` on the scroll event that reveals the tags.
    pub fn on_scroll(&mut self, section_top: f64, viewport_height: f64) -> bool {
        section_triggered(section_top, viewport_height) && self.shown.fire()
    }

    #[must_use]
    pub fn visible(self) -> bool {
        self.shown.fired()
    }
}
