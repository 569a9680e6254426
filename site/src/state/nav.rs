//! Navigation: mobile menu toggles and scroll-derived header state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll offset past which the header switches to its compact style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// How far below the scroll offset a section must start to count as active.
pub const ACTIVE_LOOKAHEAD_PX: f64 = 150.0;
/// Gap left between the header and a smooth-scroll target.
pub const SCROLL_MARGIN_PX: f64 = 20.0;

/// Section ids in page order, paired with their navigation labels.
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[must_use]
pub fn section_ids() -> Vec<&'static str> {
    SECTIONS.iter().map(|(id, _)| *id).collect()
}

/// Vertical extent of one page section, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The section containing `scroll_y + ACTIVE_LOOKAHEAD_PX`, if any.
///
/// Page structure keeps spans contiguous and disjoint, so at most one matches.
#[must_use]
pub fn active_section(spans: &[SectionSpan], scroll_y: f64) -> Option<&'static str> {
    let probe = scroll_y + ACTIVE_LOOKAHEAD_PX;
    spans.iter().find(|span| span.contains(probe)).map(|span| span.id)
}

/// Scroll offset that puts a section just below the fixed header.
#[must_use]
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    (section_top - header_height - SCROLL_MARGIN_PX).max(0.0)
}

/// `"#about"` -> `"about"`. Anything that is not an in-page anchor is `None`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub menu_open: bool,
    pub hamburger_open: bool,
    pub header_scrolled: bool,
    pub active: Option<&'static str>,
}

impl NavState {
    /// Hamburger click: the menu and the icon each flip.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        self.hamburger_open = !self.hamburger_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
        self.hamburger_open = false;
    }

    /// Recompute everything that depends on the scroll position.
    pub fn on_scroll(&mut self, scroll_y: f64, spans: &[SectionSpan]) {
        self.header_scrolled = scroll_y > SCROLLED_THRESHOLD_PX;
        self.active = active_section(spans, scroll_y);
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active == Some(id)
    }
}
