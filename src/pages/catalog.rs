//! Catalog page - the storefront.
//!
//! One sticky header, the category pills, and the card grid. Everything
//! rendered here is a pure derivation (filter, slice) of the store
//! provided by the app shell; the only local state is the selected
//! category and the show-all toggle.

use anchetas_core::{catalog, CatalogItem, ALL_CATEGORIES, PAGE_SIZE};
use dioxus::prelude::*;

use crate::components::cards::AnchetaCard;
use crate::components::CategoryPills;
use crate::context::{use_catalog, FetchPhase};

/// Catalog page component.
#[component]
pub fn Catalog() -> Element {
    let store = use_catalog();
    let mut selected = use_signal(|| ALL_CATEGORIES.to_string());
    let mut show_all = use_signal(|| false);

    let categories = use_memo(move || catalog::categories(&store.read().items));
    let filtered = use_memo(move || {
        catalog::filter_by_category(&store.read().items, &selected.read())
            .into_iter()
            .cloned()
            .collect::<Vec<CatalogItem>>()
    });

    match store.read().phase.clone() {
        FetchPhase::Loading => {
            return rsx! {
                main { class: "page page--centered",
                    div { class: "page-loading",
                        div { class: "spinner spinner--large" }
                        p { class: "loading-text", "Cargando anchetas..." }
                    }
                }
            };
        }
        FetchPhase::Failed(msg) => {
            return rsx! {
                main { class: "page page--centered",
                    div { class: "error-card",
                        span { class: "error-icon", "❌" }
                        h2 { class: "error-title", "Oops..." }
                        p { class: "error-text", "{msg}" }
                    }
                }
            };
        }
        FetchPhase::Ready => {}
    }

    let items = filtered.read();
    let visible = catalog::visible(&items, show_all());
    let hidden_count = items.len().saturating_sub(PAGE_SIZE);

    rsx! {
        div { class: "page",
            header { class: "site-header",
                h1 { class: "site-title", "🎁 Anchetas Bendición" }
                p { class: "site-tagline", "Detalles especiales para cada ocasión" }
            }

            main { class: "catalog-main",
                if categories.read().len() > 1 {
                    CategoryPills {
                        categories: categories.read().clone(),
                        selected: selected.read().clone(),
                        on_select: move |category: String| {
                            selected.set(category);
                            show_all.set(false);
                        },
                    }
                }

                if items.is_empty() {
                    div { class: "empty-state",
                        span { class: "empty-icon", "🎁" }
                        p { class: "empty-text",
                            if selected() == ALL_CATEGORIES {
                                "No hay anchetas disponibles en este momento."
                            } else {
                                "No hay anchetas en la categoría \"{selected}\"."
                            }
                        }
                    }
                } else {
                    div { class: "card-grid",
                        for item in visible.iter().cloned() {
                            AnchetaCard { key: "{item.id}-{item.name}", item }
                        }
                    }

                    if items.len() > PAGE_SIZE {
                        div { class: "show-more",
                            button {
                                class: "show-more__button",
                                onclick: move |_| show_all.toggle(),
                                if show_all() {
                                    "Ver menos"
                                } else {
                                    "Ver todas (+{hidden_count})"
                                }
                            }
                        }
                    }
                }
            }

            footer { class: "site-footer",
                p { "Hecho con 💖 para Anchetas Bendición" }
            }
        }
    }
}
