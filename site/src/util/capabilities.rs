//! Environment capability queries.
//!
//! DESIGN
//! ======
//! Reduced-motion and clipboard checks are consulted through one trait so
//! animation and copy logic can be driven by fixed answers in tests. The
//! browser implementation re-queries on every call: the user can flip the
//! reduced-motion setting while the page is open.

pub trait Capabilities {
    /// The platform asks for minimized animation.
    fn prefers_reduced_motion(&self) -> bool;

    /// The async clipboard API can be called.
    fn clipboard_available(&self) -> bool;
}

/// Live answers from the current browser window.
///
/// Outside `hydrate` builds there is no window: motion is reported as reduced
/// so server rendering never emits animated decoration, and the clipboard is
/// unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct Browser;

impl Capabilities for Browser {
    fn prefers_reduced_motion(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            true
        }
    }

    fn clipboard_available(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            crate::util::clipboard::async_clipboard().is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

/// Fixed answers, for tests and for callers that already know.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fixed {
    pub reduced_motion: bool,
    pub clipboard: bool,
}

impl Capabilities for Fixed {
    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn clipboard_available(&self) -> bool {
        self.clipboard
    }
}
