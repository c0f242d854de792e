//! Document preview: overlay component plus its browser host.
//!
//! [`use_preview`] owns one [`PreviewController`] per catalog mount and wires
//! it to the document (Escape, `fullscreenchange`). Components receive the
//! returned [`PreviewHandle`], which is `Copy`.

mod host;
mod modal;

use leptos::{ev, prelude::*};
use leptos_use::use_media_query;
use pfe_core::{
    EnvironmentSignals, ListingEntry, PreviewController, PreviewState, classify_environment,
};

use crate::utils::dom;

pub use host::BrowserPreviewHost;
pub use modal::PreviewOverlay;

/// What the overlay currently presents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// Embedded viewer.
    Inline(ListingEntry),
    /// Manual new-tab link after a blocked open.
    Fallback(ListingEntry),
}

impl Presentation {
    fn from_state(state: &PreviewState) -> Option<Self> {
        match state {
            PreviewState::InlinePreview { entry, .. } => Some(Self::Inline(entry.clone())),
            PreviewState::ExternalFallback(entry) => Some(Self::Fallback(entry.clone())),
            PreviewState::Closed | PreviewState::Opening(_) => None,
        }
    }

    pub fn entry(&self) -> &ListingEntry {
        match self {
            Self::Inline(entry) | Self::Fallback(entry) => entry,
        }
    }
}

#[derive(Clone, Copy)]
pub struct PreviewHandle {
    controller: RwSignal<PreviewController<BrowserPreviewHost>>,
    coarse_pointer: Signal<bool>,
    /// Only changes when the shown document or mode changes, so toggling
    /// fullscreen does not rebuild the viewer.
    pub presentation: Memo<Option<Presentation>>,
    pub fullscreen: Signal<bool>,
}

impl PreviewHandle {
    /// Open `entry`, classifying the device at request time.
    pub fn open(&self, entry: ListingEntry) {
        let signals = EnvironmentSignals {
            viewport_width: dom::viewport_width(),
            user_agent: dom::user_agent(),
            coarse_pointer: self.coarse_pointer.get_untracked(),
        };
        let environment = classify_environment(&signals);
        self.controller.update(|c| c.open(entry, environment));
    }

    pub fn close(&self) {
        self.controller.update(|c| c.close());
    }

    pub fn toggle_fullscreen(&self) {
        self.controller.update(|c| c.toggle_fullscreen());
    }

    /// Whether Tab has to stay inside the overlay right now.
    pub fn traps_focus(&self) -> bool {
        self.controller.with_untracked(|c| c.traps_focus())
    }
}

/// Create the preview controller for the current view.
///
/// Document listeners are removed and the scroll lock released when the
/// owning view is disposed.
pub fn use_preview() -> PreviewHandle {
    let controller = RwSignal::new(PreviewController::new(BrowserPreviewHost::new()));
    let coarse_pointer = use_media_query("(pointer: coarse)");

    let presentation =
        Memo::new(move |_| controller.with(|c| Presentation::from_state(c.state())));
    let fullscreen = Signal::derive(move || {
        controller.with(|c| {
            matches!(
                c.state(),
                PreviewState::InlinePreview {
                    fullscreen: true,
                    ..
                }
            )
        })
    });

    let keydown = window_event_listener(ev::keydown, move |ev| {
        let key = ev.key();
        let mut consumed = false;
        controller.maybe_update(|c| {
            consumed = c.handle_key(&key);
            consumed
        });
        if consumed {
            ev.prevent_default();
        }
    });

    let fullscreen_change = window_event_listener_untyped("fullscreenchange", move |_| {
        controller.update(|c| c.sync_fullscreen());
    });

    on_cleanup(move || {
        keydown.remove();
        fullscreen_change.remove();
        dom::set_body_scroll_lock(false);
    });

    PreviewHandle {
        controller,
        coarse_pointer,
        presentation,
        fullscreen,
    }
}
