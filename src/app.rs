use anchetas_core::CatalogClient;
use dioxus::prelude::*;

use crate::context::{CatalogStore, FetchPhase};
use crate::pages::Catalog;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The catalog page (the whole app lives here)
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Catalog {},
}

/// Root application component.
///
/// Provides global styles and the catalog store, and performs the
/// single read-only sheet fetch on mount.
#[component]
pub fn App() -> Element {
    let mut store: Signal<CatalogStore> = use_signal(CatalogStore::default);

    // Provide catalog context to all child components
    use_context_provider(|| store);

    // Fetch the catalog on mount
    use_effect(move || {
        spawn(async move {
            let client = CatalogClient::with_endpoint(crate::get_sheet_url());
            match client.fetch().await {
                Ok(items) => {
                    tracing::info!("Catalog ready with {} items", items.len());
                    store.set(CatalogStore {
                        items,
                        phase: FetchPhase::Ready,
                    });
                }
                Err(e) => {
                    tracing::error!("Failed to fetch catalog: {}", e);
                    store.set(CatalogStore {
                        items: Vec::new(),
                        phase: FetchPhase::Failed(e.to_string()),
                    });
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
