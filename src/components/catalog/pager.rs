//! Previous / next page navigation.

use leptos::prelude::*;
use leptos_icons::Icon;
use pfe_core::i18n::{Text, tr, tr_with};
use pfe_core::{CatalogPage, CatalogState};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/catalog/pager.module.css");

/// Hidden while everything fits on one page.
#[component]
pub fn Pager(state: RwSignal<CatalogState>, page: Memo<CatalogPage>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let locale = Signal::derive(move || ctx.locale());

    let current = Signal::derive(move || page.with(|p| p.current_page));
    let total = Signal::derive(move || page.with(|p| p.total_pages));

    view! {
        <Show when=move || { total.get() > 1 }>
            <nav class=css::pager>
                <button
                    class=css::step
                    disabled=move || current.get() <= 1
                    on:click=move |_| state.update(|s| s.previous_page())
                    aria-label=move || tr(locale.get(), Text::PreviousPage)
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                    <span>{move || tr(locale.get(), Text::PreviousPage)}</span>
                </button>
                <span class=css::position>
                    {move || {
                        tr_with(
                            locale.get(),
                            Text::PageOf,
                            &[
                                ("page", current.get().to_string().as_str()),
                                ("total", total.get().to_string().as_str()),
                            ],
                        )
                    }}
                </span>
                <button
                    class=css::step
                    disabled=move || current.get() >= total.get()
                    on:click=move |_| state.update(|s| s.next_page(total.get_untracked()))
                    aria-label=move || tr(locale.get(), Text::NextPage)
                >
                    <span>{move || tr(locale.get(), Text::NextPage)}</span>
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </nav>
        </Show>
    }
}
