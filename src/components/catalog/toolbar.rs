//! Search and sort controls.

use leptos::prelude::*;
use leptos_icons::Icon;
use pfe_core::CatalogState;
use pfe_core::i18n::{Text, tr};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/catalog/toolbar.module.css");

#[component]
pub fn Toolbar(state: RwSignal<CatalogState>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let locale = Signal::derive(move || ctx.locale());

    let ascending = Signal::derive(move || state.with(|s| s.sort_ascending()));
    let sort_label = move || {
        let text = if ascending.get() {
            Text::SortAscending
        } else {
            Text::SortDescending
        };
        tr(locale.get(), text)
    };

    view! {
        <div class=css::toolbar>
            <label class=css::search>
                <Icon icon=ic::SEARCH />
                <input
                    type="search"
                    class=css::input
                    placeholder=move || tr(locale.get(), Text::SearchPlaceholder)
                    aria-label=move || tr(locale.get(), Text::SearchPlaceholder)
                    prop:value=move || state.with(|s| s.query().to_string())
                    on:input=move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
                />
            </label>
            <button
                class=css::sort
                on:click=move |_| state.update(|s| s.toggle_sort())
                title=move || tr(locale.get(), Text::SortTitle)
            >
                {move || {
                    if ascending.get() {
                        view! { <Icon icon=ic::SORT_ASCENDING /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::SORT_DESCENDING /> }.into_any()
                    }
                }}
                <span>{sort_label}</span>
            </button>
        </div>
    }
}
