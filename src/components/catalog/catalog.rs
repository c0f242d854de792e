//! Main catalog component.
//!
//! Owns the [`CatalogState`] for one mount. Discovery runs once on mount and
//! again every [`CATALOG_REFRESH_MS`]; results that arrive after the view was
//! torn down are dropped by the [`MountGuard`].

use std::time::Duration;

use leptos::prelude::*;
use pfe_core::i18n::{Text, tr, tr_with};
use pfe_core::{
    CatalogState, Discovered, DiscoveryError, ListingEntry, MountGuard, Resolver, populate,
};
use wasm_bindgen_futures::spawn_local;

use super::{Card, Pager, Toolbar};
use crate::app::AppContext;
use crate::components::preview::{PreviewOverlay, use_preview};
use crate::config::{CATALOG_REFRESH_MS, PAGE_SIZE, PFE_BASE_PATH, discovery_config};
use crate::utils::BrowserFetcher;

stylance::import_crate_style!(css, "src/components/catalog/catalog.module.css");

/// Run one discovery pass and store its outcome.
fn load_catalog(state: RwSignal<CatalogState>, guard: MountGuard) {
    spawn_local(async move {
        let apply = move |outcome: Result<Discovered, DiscoveryError>| {
            if let Err(e) = &outcome {
                tracing::warn!(error = %e, "document discovery failed");
            }
            state.update(|s| s.apply_resolution(outcome));
        };

        match Resolver::new(discovery_config(), BrowserFetcher) {
            Ok(resolver) => {
                populate(&resolver, &guard, apply).await;
            }
            Err(e) if guard.is_live() => apply(Err(e)),
            Err(_) => {}
        }
    });
}

/// Re-run discovery periodically while mounted.
fn schedule_refresh(state: RwSignal<CatalogState>, guard: MountGuard) {
    let handle = set_interval_with_handle(
        move || load_catalog(state, guard.clone()),
        Duration::from_millis(CATALOG_REFRESH_MS),
    );

    match handle {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => tracing::warn!(error = ?e, "catalog refresh not scheduled"),
    }
}

#[component]
pub fn Catalog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let locale = Signal::derive(move || ctx.locale());

    let state = RwSignal::new(CatalogState::new());
    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.tear_down()
    });
    load_catalog(state, guard.clone());
    schedule_refresh(state, guard);

    let page = Memo::new(move |_| state.with(|s| s.page(PAGE_SIZE)));

    // Write the healed page number back after the entry set shrinks.
    Effect::new(move || {
        page.track();
        state.maybe_update(|s| {
            let before = s.current_page();
            s.render_pass(PAGE_SIZE);
            s.current_page() != before
        });
    });

    let preview = use_preview();
    let on_open = Callback::new(move |entry: ListingEntry| preview.open(entry));

    let loading = Signal::derive(move || state.with(|s| s.is_loading()));
    let load_error = Signal::derive(move || state.with(|s| s.load_error().cloned()));
    let is_empty = Signal::derive(move || {
        state.with(|s| !s.is_loading() && s.load_error().is_none() && s.entries().is_empty())
    });
    let entry_count = Signal::derive(move || state.with(|s| s.entries().len()));
    let query = Signal::derive(move || state.with(|s| s.query().to_string()));

    view! {
        <section class=css::catalog>
            <div class=css::header>
                <div>
                    <h1 class=css::title>{move || tr(locale.get(), Text::CatalogTitle)}</h1>
                    <p class=css::subtitle>
                        {move || tr_with(locale.get(), Text::CatalogSubtitle, &[("path", PFE_BASE_PATH)])}
                    </p>
                </div>
                <Toolbar state=state />
            </div>

            <Show when=move || loading.get()>
                <div class=css::notice>{move || tr(locale.get(), Text::Loading)}</div>
            </Show>

            {move || load_error.get().map(|e| view! { <DiscoveryFailure error=e /> })}

            <Show when=move || is_empty.get()>
                <div class=css::notice>
                    {move || tr_with(locale.get(), Text::NoFiles, &[("path", PFE_BASE_PATH)])}
                </div>
            </Show>

            <div class=css::meta>
                <span>
                    {move || {
                        tr_with(
                            locale.get(),
                            Text::FilesCount,
                            &[("count", entry_count.get().to_string().as_str())],
                        )
                    }}
                </span>
                <Show when=move || !query.with(String::is_empty)>
                    <span class=css::filter>
                        {move || tr_with(locale.get(), Text::FilteredBy, &[("query", query.get().as_str())])}
                    </span>
                </Show>
            </div>

            <div class=css::grid>
                <For
                    each=move || page.get().items
                    key=|entry| entry.url.clone()
                    children=move |entry| view! { <Card entry=entry on_open=on_open /> }
                />
            </div>

            <Pager state=state page=page />

            <footer class=css::footer>
                <small>{move || tr(locale.get(), Text::FooterTip)}</small>
            </footer>

            <PreviewOverlay preview=preview />
        </section>
    }
}

/// Actionable failure: what went wrong and how to fix it.
#[component]
fn DiscoveryFailure(error: DiscoveryError) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let locale = Signal::derive(move || ctx.locale());
    let command = error.command().map(String::from);

    view! {
        <div class=css::failure role="alert">
            <p>{move || tr(locale.get(), Text::DiscoveryFailed)}</p>
            {command.map(|command| {
                view! {
                    <p class=css::hint>{move || tr(locale.get(), Text::ManifestHint)}</p>
                    <pre class=css::command><code>{command}</code></pre>
                }
            })}
            <small class=css::detail>{error.to_string()}</small>
        </div>
    }
}
