//! Catalog card: cover, title and actions for one document.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use pfe_core::i18n::{Text, tr, tr_with};
use pfe_core::{ListingEntry, NoThumbnails, Thumbnail, ThumbnailProvider};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::DOCUMENT_EXTENSION;

stylance::import_crate_style!(css, "src/components/catalog/card.module.css");

/// Cover image source: the entry's own thumbnail, else a provider render as a
/// data URL. `None` means the icon placeholder is shown.
fn thumbnail_src(entry: &ListingEntry, provider: &impl ThumbnailProvider) -> Option<String> {
    if let Some(src) = &entry.thumbnail {
        return Some(src.clone());
    }

    match provider.render(&entry.url) {
        Thumbnail::Image { mime, bytes } => {
            Some(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
        }
        Thumbnail::Unavailable => None,
    }
}

#[component]
pub fn Card(entry: ListingEntry, on_open: Callback<ListingEntry>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let locale = Signal::derive(move || ctx.locale());

    let title = entry.display_title(DOCUMENT_EXTENSION);
    let cover = thumbnail_src(&entry, &NoThumbnails);
    let url = entry.url.clone();
    let file_name = entry.name.clone();

    let open = move |_: ev::MouseEvent| on_open.run(entry.clone());
    let open_label = {
        let title = title.clone();
        move || tr_with(locale.get(), Text::OpenLabel, &[("title", title.as_str())])
    };
    let download_label = {
        let title = title.clone();
        move || tr_with(locale.get(), Text::DownloadLabel, &[("title", title.as_str())])
    };

    view! {
        <article class=css::card>
            <button class=css::cover on:click=open.clone() aria-label=open_label.clone()>
                {match cover {
                    Some(src) => {
                        view! { <img class=css::thumbnail src=src alt="" loading="lazy" /> }
                            .into_any()
                    }
                    None => {
                        view! {
                            <span class=css::placeholder>
                                <Icon icon=ic::FILE_PDF />
                            </span>
                        }
                            .into_any()
                    }
                }}
            </button>
            <div class=css::body>
                <h3 class=css::title title=title.clone()>{title.clone()}</h3>
                <p class=css::filename>{file_name.clone()}</p>
            </div>
            <div class=css::actions>
                <button class=css::primary on:click=open aria-label=open_label>
                    {move || tr(locale.get(), Text::Open)}
                </button>
                <a
                    class=css::secondary
                    href=url
                    download=file_name
                    aria-label=download_label
                >
                    <Icon icon=ic::DOWNLOAD />
                    <span>{move || tr(locale.get(), Text::Download)}</span>
                </a>
            </div>
        </article>
    }
}
