//! Copy-to-clipboard with cascading fallbacks.
//!
//! Order: async clipboard API, then a hidden `<textarea>` plus
//! `execCommand("copy")`. When both fail the caller lets the original link
//! navigate. Nothing here surfaces an error to the user.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use std::future::Future;

use crate::state::notification::Severity;

pub const COPIED_MESSAGE: &str = "Email address copied to clipboard!";

/// Which step of the cascade handled the copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Written through `navigator.clipboard`.
    Clipboard,
    /// Written through the selection + `execCommand` fallback.
    Manual,
    /// Nothing worked; the caller should follow the link instead.
    Navigate,
}

impl CopyOutcome {
    #[must_use]
    pub fn copied(self) -> bool {
        !matches!(self, Self::Navigate)
    }
}

/// Notification to show for a finished cascade; `None` when the caller should
/// navigate instead.
#[must_use]
pub fn copied_notice(outcome: CopyOutcome) -> Option<(&'static str, Severity)> {
    outcome.copied().then_some((COPIED_MESSAGE, Severity::Success))
}

/// Run the cascade. `primary` is `None` when the async API is missing.
pub async fn copy_with_fallbacks<F, M>(primary: Option<F>, manual: M) -> CopyOutcome
where
    F: Future<Output = bool>,
    M: FnOnce() -> bool,
{
    if let Some(write) = primary {
        if write.await {
            return CopyOutcome::Clipboard;
        }
    }
    if manual() { CopyOutcome::Manual } else { CopyOutcome::Navigate }
}

/// `navigator.clipboard`, when the page is allowed to use it.
///
/// Looked up reflectively: insecure origins leave the property undefined even
/// though the typed binding claims it always exists.
#[cfg(feature = "hydrate")]
pub fn async_clipboard() -> Option<web_sys::Clipboard> {
    use wasm_bindgen::{JsCast, JsValue};

    let navigator = web_sys::window()?.navigator();
    let value = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    value.dyn_into::<web_sys::Clipboard>().ok()
}

#[cfg(feature = "hydrate")]
async fn write_async(text: &str) -> bool {
    let Some(clipboard) = async_clipboard() else {
        return false;
    };
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .is_ok()
}

#[cfg(feature = "hydrate")]
fn write_manual(text: &str) -> bool {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Some(area) = document
        .create_element("textarea")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
    else {
        return false;
    };
    area.set_value(text);
    let _ = area.set_attribute("readonly", "");
    let _ = area.set_attribute("style", "position:fixed;top:0;left:0;opacity:0;");
    if body.append_child(&area).is_err() {
        return false;
    }
    area.select();
    let copied = document
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
        .and_then(|html| html.exec_command("copy").ok())
        .unwrap_or(false);
    area.remove();
    copied
}

/// Copy `text` through the full cascade.
#[cfg(feature = "hydrate")]
pub async fn copy_text(text: &str, caps: &impl crate::util::capabilities::Capabilities) -> CopyOutcome {
    let primary = caps.clipboard_available().then(|| write_async(text));
    copy_with_fallbacks(primary, || write_manual(text)).await
}
