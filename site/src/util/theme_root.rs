//! Mirrors the active theme onto the document root.
//!
//! Applies a `data-theme` attribute to the `<html>` element; stylesheet rules
//! key off that attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Server rendering has no document, so SSR paths no-op and the attribute is
//! set once hydration has read the stored preference.

use crate::state::theme::Theme;

/// Attribute written on `<html>`.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                if let Err(e) = el.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                    log::warn!("could not set {THEME_ATTRIBUTE}: {e:?}");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

