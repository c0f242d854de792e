//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Viewport width in CSS pixels.
pub fn viewport_width() -> Option<f64> {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
}

/// Browser user-agent string (empty if unavailable).
pub fn user_agent() -> String {
    window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

/// Preferred browser language tag, e.g. `"fr-FR"`.
pub fn browser_language() -> Option<String> {
    window()?.navigator().language()
}

/// Set the `data-theme` attribute on `<html>`.
pub fn apply_theme_attribute(theme: &str) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", theme);
    }
}

/// Set the `lang` attribute on `<html>`.
pub fn apply_lang_attribute(lang: &str) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("lang", lang);
    }
}

/// Lock or release scrolling of the page body.
pub fn set_body_scroll_lock(locked: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}

/// Elements Tab can land on inside an overlay.
const FOCUSABLE: &str = "a[href], button:not([disabled]), iframe, input:not([disabled]), \
                         [tabindex]:not([tabindex=\"-1\"])";

/// Currently focused element.
pub fn active_element() -> Option<Element> {
    document()?.active_element()
}

/// Focusable descendants of `root`, in document order.
pub fn focusable_within(root: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = root.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}
