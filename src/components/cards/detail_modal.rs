//! Detail Modal Component
//!
//! Full detail view for one gift bundle: large photo, price,
//! description, and the WhatsApp order button. Clicking the overlay or
//! the close button dismisses it; clicks inside the panel stay inside.

use anchetas_core::CatalogItem;
use dioxus::prelude::*;

use crate::components::images::ResilientImage;
use crate::components::WhatsAppButton;

/// Detail modal for a catalog item
///
/// # Example
///
/// ```rust
/// rsx! {
///     if show_modal() {
///         DetailModal {
///             item: item.clone(),
///             on_close: move |_| show_modal.set(false),
///         }
///     }
/// }
/// ```
#[component]
pub fn DetailModal(
    /// Item being shown
    item: CatalogItem,
    /// Callback when the modal is dismissed
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "detail-modal",
                onclick: move |e| e.stop_propagation(),

                div { class: "detail-modal__image",
                    ResilientImage {
                        share_link: item.share_link.clone(),
                        alt: item.name.clone(),
                        class: Some("detail-modal__img".to_string()),
                    }

                    button {
                        class: "detail-modal__close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }

                    if !item.category.is_empty() {
                        div { class: "card-badge card-badge--modal", "{item.category}" }
                    }
                }

                div { class: "detail-modal__info",
                    div { class: "detail-modal__body",
                        h2 { class: "detail-modal__title", "{item.name}" }

                        div { class: "detail-modal__price-block",
                            p { class: "detail-modal__price-label", "Precio" }
                            span { class: "detail-modal__price", "{item.price}" }
                        }

                        div { class: "detail-modal__description",
                            h3 { "Descripción" }
                            p { "{item.description}" }
                        }
                    }

                    div { class: "detail-modal__actions",
                        WhatsAppButton { message: item.message.clone() }
                    }
                }
            }
        }
    }
}
