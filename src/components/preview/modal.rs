//! Preview overlay.
//!
//! Desktop opens an embedded viewer; touch devices only land here when the
//! new-tab open was blocked and a manual link is needed. While shown, focus
//! starts on the close button and Tab cycles inside the dialog.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use pfe_core::focus_trap_target;
use pfe_core::i18n::{Text, tr};
use web_sys::Element;

use super::{Presentation, PreviewHandle};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{DOCUMENT_EXTENSION, PREVIEW_CONTENT_ID};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/preview/modal.module.css");

#[component]
pub fn PreviewOverlay(preview: PreviewHandle) -> impl IntoView {
    move || {
        preview
            .presentation
            .get()
            .map(|presentation| view! { <Dialog presentation=presentation preview=preview /> })
    }
}

#[component]
fn Dialog(presentation: Presentation, preview: PreviewHandle) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let locale = Signal::derive(move || ctx.locale());

    let entry = presentation.entry().clone();
    let title = entry.display_title(DOCUMENT_EXTENSION);
    let inline = matches!(presentation, Presentation::Inline(_));

    let body = if inline {
        view! {
            <div id=PREVIEW_CONTENT_ID class=css::content>
                <iframe class=css::frame src=entry.url.clone() title=title.clone()></iframe>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class=css::fallback>
                <p>{move || tr(locale.get(), Text::ModalFallback)}</p>
                <a
                    class=css::fallbackLink
                    href=entry.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <Icon icon=ic::EXTERNAL_LINK />
                    <span>{move || tr(locale.get(), Text::OpenNewTab)}</span>
                </a>
            </div>
        }
        .into_any()
    };

    let fullscreen_label = move || {
        let text = if preview.fullscreen.get() {
            Text::ExitFullscreen
        } else {
            Text::Fullscreen
        };
        tr(locale.get(), text)
    };
    let close_label = move || tr(locale.get(), Text::Close);

    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    let close_ref = NodeRef::<leptos::html::Button>::new();

    Effect::new(move || {
        if let Some(button) = close_ref.get() {
            let _ = button.focus();
        }
    });

    let trap_focus = move |ev: ev::KeyboardEvent| {
        if ev.key() != "Tab" || !preview.traps_focus() {
            return;
        }
        let Some(dialog) = dialog_ref.get() else {
            return;
        };

        let focusable = dom::focusable_within(&dialog);
        let current = dom::active_element().and_then(|active| {
            focusable.iter().position(|candidate| {
                let candidate: &Element = candidate;
                *candidate == active
            })
        });

        if let Some(target) = focus_trap_target(focusable.len(), current, ev.shift_key())
            .and_then(|index| focusable.get(index))
        {
            ev.prevent_default();
            let _ = target.focus();
        }
    };
    let download_label = move || tr(locale.get(), Text::Download);

    view! {
        <div class=css::backdrop on:click=move |_| preview.close()>
            <div
                class=css::dialog
                role="dialog"
                aria-modal="true"
                aria-label=title.clone()
                node_ref=dialog_ref
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                on:keydown=trap_focus
            >
                <div class=css::header>
                    <h3 class=css::title>{title.clone()}</h3>
                    <div class=css::actions>
                        {inline
                            .then(|| {
                                view! {
                                    <button
                                        class=css::action
                                        on:click=move |_| preview.toggle_fullscreen()
                                        title=fullscreen_label
                                        aria-label=fullscreen_label
                                    >
                                        {move || {
                                            if preview.fullscreen.get() {
                                                view! { <Icon icon=ic::EXIT_FULLSCREEN /> }
                                                    .into_any()
                                            } else {
                                                view! { <Icon icon=ic::FULLSCREEN /> }.into_any()
                                            }
                                        }}
                                    </button>
                                }
                            })}
                        <a
                            class=css::action
                            href=entry.url.clone()
                            download=entry.name.clone()
                            title=download_label
                            aria-label=download_label
                        >
                            <Icon icon=ic::DOWNLOAD />
                        </a>
                        <button
                            class=css::action
                            node_ref=close_ref
                            on:click=move |_| preview.close()
                            title=close_label
                            aria-label=close_label
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                </div>
                {body}
            </div>
        </div>
    }
}
