//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use leptos_use::use_media_query;
use pfe_core::{EnvironmentPreferences, Locale, Preferences, Theme};

use crate::components::{Catalog, Navbar};
use crate::utils::{LocalStore, dom};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read from any child with
/// `use_context::<AppContext>()`. Catalog and preview state are not stored
/// here: they belong to the catalog view and die with it.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Theme and locale preferences.
    pub prefs: RwSignal<Preferences>,
}

impl AppContext {
    pub fn new(prefs: Preferences) -> Self {
        Self {
            prefs: RwSignal::new(prefs),
        }
    }

    pub fn theme(&self) -> Theme {
        self.prefs.with(|p| p.theme())
    }

    pub fn locale(&self) -> Locale {
        self.prefs.with(|p| p.locale())
    }

    /// Flip the theme and remember it as an explicit choice.
    pub fn toggle_theme(&self) {
        self.prefs.update(|p| {
            if let Err(e) = p.toggle_theme(&LocalStore) {
                tracing::warn!(error = %e, "theme not persisted");
            }
        });
    }

    /// Flip the locale and remember it as an explicit choice.
    pub fn toggle_locale(&self) {
        self.prefs.update(|p| {
            if let Err(e) = p.toggle_locale(&LocalStore) {
                tracing::warn!(error = %e, "locale not persisted");
            }
        });
    }
}

/// Resolve preferences and keep `<html>` attributes and the system color
/// scheme wired to them.
fn setup_preferences() -> AppContext {
    let prefers_dark = use_media_query("(prefers-color-scheme: dark)");

    let environment = EnvironmentPreferences {
        prefers_dark: Some(prefers_dark.get_untracked()),
        language: dom::browser_language(),
    };
    let ctx = AppContext::new(Preferences::load(&LocalStore, &environment));

    // System changes only apply while the user has not chosen explicitly.
    Effect::new(move |previous: Option<bool>| {
        let dark = prefers_dark.get();
        if previous.is_some_and(|p| p != dark) {
            ctx.prefs.maybe_update(|p| p.observe_color_scheme(dark));
        }
        dark
    });

    Effect::new(move || {
        let (theme, locale) = ctx.prefs.with(|p| (p.theme(), p.locale()));
        dom::apply_theme_attribute(theme.as_str());
        dom::apply_lang_attribute(locale.as_str());
    });

    ctx
}

/// Root application component with error boundary.
///
/// This component:
/// - Resolves preferences and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the navbar and the document catalog
#[component]
pub fn App() -> impl IntoView {
    let ctx = setup_preferences();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    text-align: center;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="margin: 0 0 2rem 0; color: #ff6b6b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <div class="app">
                <Navbar />
                <main>
                    <Catalog />
                </main>
            </div>
        </ErrorBoundary>
    }
}
