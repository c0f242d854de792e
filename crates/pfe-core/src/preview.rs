//! Preview controller.
//!
//! Decides per request between an in-page overlay and a new browsing
//! context, and owns the overlay lifecycle (focus, scroll lock, fullscreen,
//! Escape-to-close). Browser side effects go through [`PreviewHost`].
//!
//! ```text
//! Closed ──open──> Opening ──desktop──────────────> InlinePreview ──close──> Closed
//!                     │
//!                     ├──touch, new tab opened───> Closed
//!                     └──touch, new tab blocked──> ExternalFallback ──close──> Closed
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::entry::ListingEntry;
use crate::error::PreviewError;

// =============================================================================
// Environment classification
// =============================================================================

/// Viewports narrower than this are treated as touch-like.
pub const TOUCH_VIEWPORT_MAX: f64 = 768.0;

static MOBILE_USER_AGENT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)android|webos|iphone|ipad|ipod|blackberry|iemobile|opera mini|mobile").ok()
});

/// Raw device signals, gathered by the caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnvironmentSignals {
    /// Viewport width in CSS pixels, if known.
    pub viewport_width: Option<f64>,
    pub user_agent: String,
    /// Result of the `(pointer: coarse)` media query.
    pub coarse_pointer: bool,
}

/// Classification of the current environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnvironmentClass {
    pub touch_like: bool,
}

/// Classify an environment as touch-like.
///
/// Any one signal is enough: narrow viewport, mobile user-agent token, or
/// coarse pointer.
pub fn classify_environment(signals: &EnvironmentSignals) -> EnvironmentClass {
    let narrow = signals
        .viewport_width
        .is_some_and(|width| width < TOUCH_VIEWPORT_MAX);
    let mobile_agent = MOBILE_USER_AGENT
        .as_ref()
        .is_some_and(|re| re.is_match(&signals.user_agent));

    EnvironmentClass {
        touch_like: narrow || mobile_agent || signals.coarse_pointer,
    }
}

// =============================================================================
// Host seam
// =============================================================================

/// Browser side effects needed by the controller.
pub trait PreviewHost {
    /// Open `url` in a new, independent browsing context.
    fn open_external(&self, url: &str) -> Result<(), PreviewError>;
    /// Lock or release background scrolling.
    fn set_scroll_lock(&self, locked: bool);
    /// Present the overlay content fullscreen.
    fn request_fullscreen(&self) -> Result<(), PreviewError>;
    /// Leave fullscreen presentation.
    fn exit_fullscreen(&self) -> Result<(), PreviewError>;
    /// Whether the document currently has a fullscreen element.
    fn is_fullscreen(&self) -> bool;
    /// Remember the element focused before the overlay opened.
    fn save_focus(&self);
    /// Return focus to the element remembered by [`PreviewHost::save_focus`].
    fn restore_focus(&self);
}

/// Index Tab should move to so focus stays inside the overlay.
///
/// `current` is the position of the focused element among the overlay's
/// `count` focusable elements, `None` when focus is outside it. Returns
/// `None` when the browser's own move already stays inside.
pub fn focus_trap_target(count: usize, current: Option<usize>, backwards: bool) -> Option<usize> {
    let last = count.checked_sub(1)?;
    match (current, backwards) {
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(0), true) => Some(last),
        (Some(index), false) if index >= last => Some(0),
        (Some(index), true) if index > last => Some(last),
        _ => None,
    }
}

// =============================================================================
// State machine
// =============================================================================

/// Preview lifecycle state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PreviewState {
    #[default]
    Closed,
    /// Transient while `open` decides the presentation.
    Opening(ListingEntry),
    /// Overlay with an embedded viewer.
    InlinePreview {
        entry: ListingEntry,
        fullscreen: bool,
    },
    /// Overlay offering a manual link after a blocked new-tab open.
    ExternalFallback(ListingEntry),
}

impl PreviewState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Entry being previewed, if any.
    pub fn entry(&self) -> Option<&ListingEntry> {
        match self {
            Self::Closed => None,
            Self::Opening(entry)
            | Self::InlinePreview { entry, .. }
            | Self::ExternalFallback(entry) => Some(entry),
        }
    }
}

/// Drives [`PreviewState`] against a [`PreviewHost`].
#[derive(Debug)]
pub struct PreviewController<H> {
    state: PreviewState,
    host: H,
}

impl<H: PreviewHost> PreviewController<H> {
    pub fn new(host: H) -> Self {
        Self {
            state: PreviewState::Closed,
            host,
        }
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Handle an open request for `entry`. An overlay already showing is
    /// closed first.
    pub fn open(&mut self, entry: ListingEntry, environment: EnvironmentClass) {
        self.close();
        self.state = PreviewState::Opening(entry.clone());

        if !environment.touch_like {
            self.enter(PreviewState::InlinePreview {
                entry,
                fullscreen: false,
            });
            return;
        }

        match self.host.open_external(&entry.url) {
            Ok(()) => {
                tracing::debug!(url = %entry.url, "opened document in a new context");
                self.state = PreviewState::Closed;
            }
            Err(e) => {
                tracing::debug!(url = %entry.url, error = %e, "new context blocked, showing fallback");
                self.enter(PreviewState::ExternalFallback(entry));
            }
        }
    }

    /// Close the preview. Calling it while closed does nothing.
    pub fn close(&mut self) {
        if !self.state.is_open() {
            return;
        }

        self.state = PreviewState::Closed;
        self.host.set_scroll_lock(false);
        if self.host.is_fullscreen()
            && let Err(e) = self.host.exit_fullscreen()
        {
            tracing::debug!(error = %e, "exit fullscreen failed");
        }
        self.host.restore_focus();
    }

    /// Whether Tab must be kept inside the overlay.
    pub fn traps_focus(&self) -> bool {
        matches!(
            self.state,
            PreviewState::InlinePreview { .. } | PreviewState::ExternalFallback(_)
        )
    }

    /// Enter or leave fullscreen. Ignored outside [`PreviewState::InlinePreview`].
    ///
    /// The decision follows the host's actual fullscreen state, which the
    /// browser may have changed on its own.
    pub fn toggle_fullscreen(&mut self) {
        let PreviewState::InlinePreview { fullscreen, .. } = &mut self.state else {
            return;
        };

        *fullscreen = self.host.is_fullscreen();
        let result = if *fullscreen {
            self.host.exit_fullscreen()
        } else {
            self.host.request_fullscreen()
        };

        match result {
            Ok(()) => *fullscreen = !*fullscreen,
            Err(e) => tracing::debug!(error = %e, "fullscreen toggle failed"),
        }
    }

    /// Re-read the fullscreen flag from the host, e.g. on `fullscreenchange`.
    pub fn sync_fullscreen(&mut self) {
        if let PreviewState::InlinePreview { fullscreen, .. } = &mut self.state {
            *fullscreen = self.host.is_fullscreen();
        }
    }

    /// Document-level key handler. Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.state.is_open() {
            self.close();
            true
        } else {
            false
        }
    }

    fn enter(&mut self, state: PreviewState) {
        self.state = state;
        self.host.save_focus();
        self.host.set_scroll_lock(true);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct FakeHost {
        block_external: bool,
        fail_fullscreen: bool,
        fullscreen: Cell<bool>,
        scroll_locked: Cell<bool>,
        opened: RefCell<Vec<String>>,
        focus_saved: Cell<usize>,
        focus_restored: Cell<usize>,
    }

    impl PreviewHost for FakeHost {
        fn open_external(&self, url: &str) -> Result<(), PreviewError> {
            if self.block_external {
                return Err(PreviewError::Blocked);
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }

        fn set_scroll_lock(&self, locked: bool) {
            self.scroll_locked.set(locked);
        }

        fn request_fullscreen(&self) -> Result<(), PreviewError> {
            if self.fail_fullscreen {
                return Err(PreviewError::Fullscreen("denied".into()));
            }
            self.fullscreen.set(true);
            Ok(())
        }

        fn exit_fullscreen(&self) -> Result<(), PreviewError> {
            self.fullscreen.set(false);
            Ok(())
        }

        fn is_fullscreen(&self) -> bool {
            self.fullscreen.get()
        }

        fn save_focus(&self) {
            self.focus_saved.set(self.focus_saved.get() + 1);
        }

        fn restore_focus(&self) {
            self.focus_restored.set(self.focus_restored.get() + 1);
        }
    }

    const DESKTOP: EnvironmentClass = EnvironmentClass { touch_like: false };
    const TOUCH: EnvironmentClass = EnvironmentClass { touch_like: true };

    fn doc() -> ListingEntry {
        ListingEntry::new("a.pdf", "/PFE/a.pdf")
    }

    #[test]
    fn test_classify_environment() {
        let desktop = EnvironmentSignals {
            viewport_width: Some(1440.0),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) Firefox/130.0".into(),
            coarse_pointer: false,
        };
        assert!(!classify_environment(&desktop).touch_like);

        let narrow = EnvironmentSignals {
            viewport_width: Some(500.0),
            ..desktop.clone()
        };
        assert!(classify_environment(&narrow).touch_like);

        let phone = EnvironmentSignals {
            user_agent: "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)".into(),
            ..desktop.clone()
        };
        assert!(classify_environment(&phone).touch_like);

        let tablet = EnvironmentSignals {
            coarse_pointer: true,
            ..desktop.clone()
        };
        assert!(classify_environment(&tablet).touch_like);

        assert!(!classify_environment(&EnvironmentSignals::default()).touch_like);
    }

    #[test]
    fn test_desktop_opens_inline() {
        let mut controller = PreviewController::new(FakeHost::default());
        controller.open(doc(), DESKTOP);

        assert_eq!(
            controller.state(),
            &PreviewState::InlinePreview {
                entry: doc(),
                fullscreen: false
            }
        );
        assert!(controller.host().scroll_locked.get());
        assert!(controller.host().opened.borrow().is_empty());
    }

    #[test]
    fn test_touch_opens_new_context() {
        let mut controller = PreviewController::new(FakeHost::default());
        controller.open(doc(), TOUCH);

        assert_eq!(controller.state(), &PreviewState::Closed);
        assert_eq!(*controller.host().opened.borrow(), vec!["/PFE/a.pdf"]);
        assert!(!controller.host().scroll_locked.get());
    }

    #[test]
    fn test_touch_blocked_falls_back() {
        let host = FakeHost {
            block_external: true,
            ..Default::default()
        };
        let mut controller = PreviewController::new(host);
        controller.open(doc(), TOUCH);

        assert_eq!(controller.state(), &PreviewState::ExternalFallback(doc()));
        assert!(controller.host().scroll_locked.get());
    }

    #[test]
    fn test_close_releases_scroll_and_fullscreen() {
        let mut controller = PreviewController::new(FakeHost::default());
        controller.open(doc(), DESKTOP);
        controller.toggle_fullscreen();
        assert!(controller.host().fullscreen.get());

        controller.close();

        assert_eq!(controller.state(), &PreviewState::Closed);
        assert!(!controller.host().scroll_locked.get());
        assert!(!controller.host().fullscreen.get());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut controller = PreviewController::new(FakeHost::default());
        controller.close();
        assert_eq!(controller.state(), &PreviewState::Closed);

        controller.open(doc(), DESKTOP);
        controller.close();
        controller.close();
        assert_eq!(controller.state(), &PreviewState::Closed);
        assert!(!controller.host().scroll_locked.get());
    }

    #[test]
    fn test_toggle_fullscreen() {
        let mut controller = PreviewController::new(FakeHost::default());
        controller.open(doc(), DESKTOP);

        controller.toggle_fullscreen();
        assert!(matches!(
            controller.state(),
            PreviewState::InlinePreview {
                fullscreen: true,
                ..
            }
        ));

        controller.toggle_fullscreen();
        assert!(matches!(
            controller.state(),
            PreviewState::InlinePreview {
                fullscreen: false,
                ..
            }
        ));
    }

    #[test]
    fn test_fullscreen_failure_is_swallowed() {
        let host = FakeHost {
            fail_fullscreen: true,
            ..Default::default()
        };
        let mut controller = PreviewController::new(host);
        controller.open(doc(), DESKTOP);
        controller.toggle_fullscreen();

        assert!(matches!(
            controller.state(),
            PreviewState::InlinePreview {
                fullscreen: false,
                ..
            }
        ));
    }

    #[test]
    fn test_fullscreen_ignored_outside_inline() {
        let host = FakeHost {
            block_external: true,
            ..Default::default()
        };
        let mut controller = PreviewController::new(host);
        controller.toggle_fullscreen();
        assert!(!controller.host().fullscreen.get());

        controller.open(doc(), TOUCH);
        controller.toggle_fullscreen();
        assert!(!controller.host().fullscreen.get());
    }

    #[test]
    fn test_browser_exit_is_picked_up() {
        let mut controller = PreviewController::new(FakeHost::default());
        controller.open(doc(), DESKTOP);
        controller.toggle_fullscreen();

        // Browser left fullscreen without going through the controller.
        controller.host().fullscreen.set(false);
        controller.sync_fullscreen();
        assert!(matches!(
            controller.state(),
            PreviewState::InlinePreview {
                fullscreen: false,
                ..
            }
        ));

        controller.toggle_fullscreen();
        assert!(controller.host().fullscreen.get());
    }

    #[test]
    fn test_reopen_resets_fullscreen_flag() {
        let mut controller = PreviewController::new(FakeHost::default());
        controller.open(doc(), DESKTOP);
        controller.toggle_fullscreen();

        let other = ListingEntry::new("b.pdf", "/PFE/b.pdf");
        controller.open(other.clone(), DESKTOP);

        assert_eq!(
            controller.state(),
            &PreviewState::InlinePreview {
                entry: other,
                fullscreen: false
            }
        );
        assert!(!controller.host().fullscreen.get());
    }

    #[test]
    fn test_touch_reopen_releases_inline_overlay() {
        let mut controller = PreviewController::new(FakeHost::default());
        controller.open(doc(), DESKTOP);
        controller.toggle_fullscreen();

        controller.open(ListingEntry::new("b.pdf", "/PFE/b.pdf"), TOUCH);

        assert_eq!(controller.state(), &PreviewState::Closed);
        assert!(!controller.host().scroll_locked.get());
        assert!(!controller.host().fullscreen.get());
        assert_eq!(*controller.host().opened.borrow(), vec!["/PFE/b.pdf"]);
    }

    #[test]
    fn test_focus_saved_on_enter_and_restored_on_close() {
        let mut controller = PreviewController::new(FakeHost::default());
        assert!(!controller.traps_focus());

        controller.open(doc(), DESKTOP);
        assert!(controller.traps_focus());
        assert_eq!(controller.host().focus_saved.get(), 1);
        assert_eq!(controller.host().focus_restored.get(), 0);

        controller.close();
        controller.close();
        assert!(!controller.traps_focus());
        assert_eq!(controller.host().focus_restored.get(), 1);
    }

    #[test]
    fn test_successful_touch_open_leaves_focus_alone() {
        let mut controller = PreviewController::new(FakeHost::default());
        controller.open(doc(), TOUCH);

        assert!(!controller.traps_focus());
        assert_eq!(controller.host().focus_saved.get(), 0);
        assert_eq!(controller.host().focus_restored.get(), 0);
    }

    #[test]
    fn test_fallback_traps_focus() {
        let host = FakeHost {
            block_external: true,
            ..Default::default()
        };
        let mut controller = PreviewController::new(host);
        controller.open(doc(), TOUCH);

        assert!(controller.traps_focus());
        assert_eq!(controller.host().focus_saved.get(), 1);
    }

    #[test]
    fn test_focus_trap_wraps_at_the_edges() {
        // Tab from the last element wraps to the first, Shift+Tab the other way.
        assert_eq!(focus_trap_target(3, Some(2), false), Some(0));
        assert_eq!(focus_trap_target(3, Some(0), true), Some(2));

        // Moves inside the overlay are left to the browser.
        assert_eq!(focus_trap_target(3, Some(0), false), None);
        assert_eq!(focus_trap_target(3, Some(2), true), None);
        assert_eq!(focus_trap_target(3, Some(1), true), None);

        // Focus outside is pulled back in.
        assert_eq!(focus_trap_target(3, None, false), Some(0));
        assert_eq!(focus_trap_target(3, None, true), Some(2));

        assert_eq!(focus_trap_target(1, Some(0), false), Some(0));
        assert_eq!(focus_trap_target(1, Some(0), true), Some(0));
        assert_eq!(focus_trap_target(0, None, false), None);
    }

    #[test]
    fn test_escape_closes_open_preview() {
        let mut controller = PreviewController::new(FakeHost::default());
        assert!(!controller.handle_key("Escape"));

        controller.open(doc(), DESKTOP);
        assert!(!controller.handle_key("Enter"));
        assert!(controller.state().is_open());

        assert!(controller.handle_key("Escape"));
        assert_eq!(controller.state(), &PreviewState::Closed);
    }
}
