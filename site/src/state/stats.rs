//! Count-up animation for the "about" statistics.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::state::reveal::{OneShot, section_triggered};

/// Delay between counter steps.
pub const COUNTER_TICK_MS: u32 = 60;
/// Approximate number of steps from zero to the target.
pub const COUNTER_STEPS: u32 = 30;

/// One statistic counting from 0 up to its target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCounter {
    pub target: u32,
    pub suffix: String,
    pub current: u32,
    step: u32,
}

impl StatCounter {
    /// Parse a display value such as `"50+"` or `"12"`. A trailing `+` is
    /// kept as the suffix; anything else that is not a whole number yields
    /// `None` and is displayed as-is.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        let (digits, suffix) = match label.strip_suffix('+') {
            Some(rest) => (rest, "+"),
            None => (label, ""),
        };
        let target = digits.parse::<u32>().ok()?;
        Some(Self { target, suffix: suffix.to_owned(), current: 0, step: target.div_ceil(COUNTER_STEPS).max(1) })
    }

    #[must_use]
    pub fn step(&self) -> u32 {
        self.step
    }

    #[must_use]
    pub fn text(&self) -> String {
        format!("{}{}", self.current, self.suffix)
    }

    #[must_use]
    pub fn done(&self) -> bool {
        self.current >= self.target
    }

    /// Advance one step, clamped at the target.
    pub fn advance(&mut self) {
        self.current = self.current.saturating_add(self.step).min(self.target);
    }
}

/// A stat as shown on the page: a counter, or a fixed label when the value
/// is not numeric.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatValue {
    Counting(StatCounter),
    Fixed(String),
}

impl StatValue {
    #[must_use]
    pub fn new(label: &str) -> Self {
        StatCounter::parse(label).map_or_else(|| Self::Fixed(label.to_owned()), Self::Counting)
    }

    /// Text once the animation is running, or `None` while a counter has not
    /// taken its first step yet.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Counting(counter) if counter.current == 0 && !counter.done() => None,
            Self::Counting(counter) => Some(counter.text()),
            Self::Fixed(label) => Some(label.clone()),
        }
    }
}

/// All counters on the page plus the guard that starts them once.
///
/// Until a counter takes its first step it shows its original label, so the
/// server-rendered page reads correctly before hydration and no stat flashes
/// `0` when the animation starts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsState {
    pub values: Vec<StatValue>,
    labels: Vec<String>,
    started: OneShot,
}

impl StatsState {
    #[must_use]
    pub fn new(labels: &[&str]) -> Self {
        Self {
            values: labels.iter().map(|l| StatValue::new(l)).collect(),
            labels: labels.iter().map(|l| (*l).to_owned()).collect(),
            started: OneShot::default(),
        }
    }

    /// Returns `true` on the scroll event that starts the animation. Later
    /// calls never restart it.
    pub fn on_scroll(&mut self, section_top: f64, viewport_height: f64) -> bool {
        section_triggered(section_top, viewport_height) && self.started.fire()
    }

    #[must_use]
    pub fn started(&self) -> bool {
        self.started.fired()
    }

    /// Advance every counter one step. Returns `true` once all are done.
    pub fn tick(&mut self) -> bool {
        let mut all_done = true;
        for value in &mut self.values {
            if let StatValue::Counting(counter) = value {
                counter.advance();
                all_done &= counter.done();
            }
        }
        all_done
    }

    /// Text currently shown for stat `index`.
    #[must_use]
    pub fn text(&self, index: usize) -> String {
        let running = if self.started() { self.values.get(index).and_then(StatValue::text) } else { None };
        running.or_else(|| self.labels.get(index).cloned()).unwrap_or_default()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        (0..self.values.len()).map(|i| self.text(i)).collect()
    }
}
