//! [`PreviewHost`] backed by the browser window and document.

use leptos::prelude::*;
use pfe_core::{PreviewError, PreviewHost};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::config::PREVIEW_CONTENT_ID;
use crate::utils::dom;

#[derive(Clone, Copy)]
pub struct BrowserPreviewHost {
    /// Element to refocus when the overlay closes, usually the card's open
    /// button.
    saved_focus: StoredValue<Option<HtmlElement>, LocalStorage>,
}

impl BrowserPreviewHost {
    pub fn new() -> Self {
        Self {
            saved_focus: StoredValue::new_local(None),
        }
    }
}

impl Default for BrowserPreviewHost {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewHost for BrowserPreviewHost {
    fn open_external(&self, url: &str) -> Result<(), PreviewError> {
        let window = dom::window().ok_or(PreviewError::Blocked)?;

        // Popup blockers either throw or hand back no window.
        let opened = window
            .open_with_url_and_target(url, "_blank")
            .map_err(|_| PreviewError::Blocked)?
            .ok_or(PreviewError::Blocked)?;

        // Detach the new context from this page.
        let _ = opened.set_opener(&JsValue::NULL);
        Ok(())
    }

    fn set_scroll_lock(&self, locked: bool) {
        dom::set_body_scroll_lock(locked);
    }

    fn request_fullscreen(&self) -> Result<(), PreviewError> {
        let element = dom::document()
            .and_then(|d| d.get_element_by_id(PREVIEW_CONTENT_ID))
            .ok_or_else(|| PreviewError::Fullscreen("preview content not mounted".to_string()))?;

        element
            .request_fullscreen()
            .map_err(|e| PreviewError::Fullscreen(format!("{:?}", e)))
    }

    fn exit_fullscreen(&self) -> Result<(), PreviewError> {
        let document = dom::document()
            .ok_or_else(|| PreviewError::Fullscreen("no document".to_string()))?;
        document.exit_fullscreen();
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        dom::document()
            .and_then(|d| d.fullscreen_element())
            .is_some()
    }

    fn save_focus(&self) {
        let focused = dom::active_element().and_then(|e| e.dyn_into::<HtmlElement>().ok());
        self.saved_focus.try_set_value(focused);
    }

    fn restore_focus(&self) {
        let saved = self.saved_focus.try_update_value(Option::take).flatten();
        if let Some(element) = saved
            && element.is_connected()
        {
            let _ = element.focus();
        }
    }
}
