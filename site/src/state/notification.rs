//! Single-slot notification banner.
//!
//! DESIGN
//! ======
//! Showing a notification replaces whatever is visible; nothing queues.
//! Every notification gets a fresh id and auto-dismiss timers dismiss by id,
//! so a timer left over from a replaced notification cannot remove the one
//! that replaced it.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

/// Delay before a notification removes itself.
pub const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    pub current: Option<Notification>,
    next_id: u64,
}

impl NotificationState {
    /// Replace the visible notification. Returns the new id for the caller's
    /// dismiss timer.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notification { id, message: message.into(), severity });
        id
    }

    /// Remove notification `id` if it is still the visible one.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn visible(&self) -> usize {
        usize::from(self.current.is_some())
    }
}
