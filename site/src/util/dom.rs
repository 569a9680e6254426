//! Window and element geometry helpers for hydrated components.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::state::nav::SectionSpan;

/// Current vertical scroll offset of the window.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Inner width and height of the window in CSS pixels.
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Distance from the viewport top to the element's top edge.
pub fn viewport_top(id: &str) -> Option<f64> {
    Some(element_by_id(id)?.get_bounding_client_rect().top())
}

/// Distance from the document top to the element's top edge.
pub fn document_top(id: &str) -> Option<f64> {
    Some(viewport_top(id)? + scroll_y())
}

pub fn offset_height(id: &str) -> f64 {
    element_by_id(id).map_or(0.0, |el| f64::from(el.offset_height()))
}

/// Vertical spans of the given sections, skipping any that are missing.
pub fn section_spans(ids: &[&'static str]) -> Vec<SectionSpan> {
    ids.iter()
        .filter_map(|id| {
            let el = element_by_id(id)?;
            Some(SectionSpan { id, top: f64::from(el.offset_top()), height: f64::from(el.offset_height()) })
        })
        .collect()
}

/// Animate the window scroll position to `top`.
pub fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}
