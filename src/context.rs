//! Catalog context for the Anchetas Bendición page.
//!
//! Provides the fetched catalog to all components via use_context.
//! The catalog is fetched once per page view in [`crate::app::App`];
//! everything else derives from this store with pure functions.

use anchetas_core::CatalogItem;
use dioxus::prelude::*;

/// Where the page-level fetch currently stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchPhase {
    /// Request in flight; the page shows the spinner
    #[default]
    Loading,
    /// Items are available (possibly zero of them)
    Ready,
    /// The single fetch failed; no retry, the page shows the error card
    Failed(String),
}

/// The one piece of fetched state the whole page derives from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogStore {
    pub items: Vec<CatalogItem>,
    pub phase: FetchPhase,
}

/// Hook to access the catalog store from context.
///
/// # Example
///
/// ```ignore
/// let store = use_catalog();
/// let categories = catalog::categories(&store.read().items);
/// ```
pub fn use_catalog() -> Signal<CatalogStore> {
    use_context::<Signal<CatalogStore>>()
}
