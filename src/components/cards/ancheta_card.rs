//! Ancheta Card Component
//!
//! One gift bundle in the catalog grid: photo, category badge, name,
//! price, and the button into the detail modal. The whole card is
//! clickable; nested buttons stop propagation themselves.

use anchetas_core::CatalogItem;
use dioxus::prelude::*;

use super::DetailModal;
use crate::components::images::ResilientImage;

/// Catalog card for a single gift bundle
///
/// # Examples
///
/// ```rust
/// rsx! {
///     AnchetaCard { item: item.clone() }
/// }
/// ```
#[component]
pub fn AnchetaCard(
    /// Item data from the fetched catalog
    item: CatalogItem,
) -> Element {
    let mut show_modal = use_signal(|| false);

    let modal_item = item.clone();

    rsx! {
        div {
            class: "ancheta-card",
            onclick: move |_| show_modal.set(true),

            div { class: "card-image-area",
                ResilientImage {
                    share_link: item.share_link.clone(),
                    alt: item.name.clone(),
                }

                if !item.category.is_empty() {
                    div { class: "card-badge", "{item.category}" }
                }
            }

            div { class: "card-content",
                div { class: "card-content__text",
                    h3 { class: "card-title", "{item.name}" }
                    span { class: "card-price", "{item.price}" }
                }

                button {
                    class: "card-detail-button",
                    onclick: move |e| {
                        e.stop_propagation();
                        show_modal.set(true);
                    },
                    "Ver más"
                }
            }
        }

        if show_modal() {
            DetailModal {
                item: modal_item.clone(),
                on_close: move |_| show_modal.set(false),
            }
        }
    }
}
