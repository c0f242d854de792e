//! Top navigation bar.

use leptos::prelude::*;
use leptos_icons::Icon;
use pfe_core::Theme;
use pfe_core::i18n::{Text, tr};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/navbar.module.css");

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let locale = Signal::derive(move || ctx.locale());
    let theme_label = move || tr(locale.get(), Text::ToggleTheme);
    let locale_label = move || tr(locale.get(), Text::ToggleLocale);

    view! {
        <header class=css::navbar>
            <div class=css::inner>
                <span class=css::brand>
                    <Icon icon=ic::FILE_PDF />
                    {APP_NAME}
                </span>
                <div class=css::actions>
                    <button
                        class=css::toggle
                        on:click=move |_| ctx.toggle_locale()
                        title=locale_label
                        aria-label=locale_label
                    >
                        <Icon icon=ic::LANGUAGE />
                        <span class=css::toggleText>
                            {move || locale.get().as_str().to_uppercase()}
                        </span>
                    </button>
                    <button
                        class=css::toggle
                        on:click=move |_| ctx.toggle_theme()
                        title=theme_label
                        aria-label=theme_label
                    >
                        {move || match ctx.theme() {
                            Theme::Dark => view! { <Icon icon=ic::SUN /> }.into_any(),
                            Theme::Light => view! { <Icon icon=ic::MOON /> }.into_any(),
                        }}
                    </button>
                </div>
            </div>
        </header>
    }
}
