//! Catalog fetch and the pure derivations the page recomputes from it.
//!
//! The catalog is a spreadsheet published through opensheet as a JSON
//! array, fetched exactly once per page view. Everything downstream
//! (category list, filtering, show-more slicing) is derived on demand
//! from that single immutable fetch - no caching, no refresh.

use crate::error::{CatalogError, CatalogResult};
use crate::types::CatalogItem;

/// The published sheet behind the original page.
pub const DEFAULT_SHEET_URL: &str =
    "https://opensheet.elk.sh/1IIWnjXd0TCBAmIBZXFe6oxr9YqsKUkG328_Zq78QkWY/Hoja%201";

/// Sentinel category selecting every item.
pub const ALL_CATEGORIES: &str = "Todas";

/// Cards shown before the "show all" toggle.
pub const PAGE_SIZE: usize = 9;

/// Read-only client for the published sheet.
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_SHEET_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the full catalog.
    ///
    /// One GET, no retry: a failure here surfaces as the single
    /// page-level error state.
    pub async fn fetch(&self) -> CatalogResult<Vec<CatalogItem>> {
        let response = self.http.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let items: Vec<CatalogItem> =
            serde_json::from_str(&body).map_err(|e| CatalogError::Decode(e.to_string()))?;

        tracing::info!(count = items.len(), "catalog fetched");
        Ok(items)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique category labels in encounter order, `Todas` first.
///
/// Items with a blank category still show under `Todas` but add no
/// pill of their own.
pub fn categories(items: &[CatalogItem]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        if !item.category.is_empty() && !out.contains(&item.category) {
            out.push(item.category.clone());
        }
    }
    out
}

/// Items matching the selected category.
pub fn filter_by_category<'a>(items: &'a [CatalogItem], category: &str) -> Vec<&'a CatalogItem> {
    items
        .iter()
        .filter(|item| category == ALL_CATEGORIES || item.category == category)
        .collect()
}

/// The slice of the grid to render: the first [`PAGE_SIZE`] items, or
/// everything once expanded.
pub fn visible(items: &[CatalogItem], show_all: bool) -> &[CatalogItem] {
    if show_all || items.len() <= PAGE_SIZE {
        items
    } else {
        &items[..PAGE_SIZE]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: format!("Ancheta {id}"),
            price: "$50.000".to_string(),
            description: String::new(),
            category: category.to_string(),
            message: String::new(),
            share_link: String::new(),
        }
    }

    #[test]
    fn categories_are_unique_with_all_first() {
        let items = vec![
            item("1", "Cumpleaños"),
            item("2", "Amor"),
            item("3", "Cumpleaños"),
            item("4", ""),
        ];

        assert_eq!(categories(&items), vec!["Todas", "Cumpleaños", "Amor"]);
    }

    #[test]
    fn categories_of_empty_catalog() {
        assert_eq!(categories(&[]), vec!["Todas"]);
    }

    #[test]
    fn filter_matches_selected_category() {
        let items = vec![item("1", "Amor"), item("2", "Cumpleaños"), item("3", "Amor")];

        let amor = filter_by_category(&items, "Amor");
        assert_eq!(amor.len(), 2);
        assert!(amor.iter().all(|i| i.category == "Amor"));

        assert!(filter_by_category(&items, "Condolencias").is_empty());
    }

    #[test]
    fn all_sentinel_selects_everything() {
        let items = vec![item("1", "Amor"), item("2", ""), item("3", "Cumpleaños")];
        assert_eq!(filter_by_category(&items, ALL_CATEGORIES).len(), 3);
    }

    #[test]
    fn visible_slices_at_page_size() {
        let items: Vec<_> = (0..PAGE_SIZE + 3)
            .map(|i| item(&i.to_string(), "Amor"))
            .collect();

        assert_eq!(visible(&items, false).len(), PAGE_SIZE);
        assert_eq!(visible(&items, true).len(), items.len());

        let few = &items[..3];
        assert_eq!(visible(few, false).len(), 3);
    }

    #[test]
    fn client_uses_default_endpoint() {
        let client = CatalogClient::new();
        assert_eq!(client.endpoint(), DEFAULT_SHEET_URL);

        let client = CatalogClient::with_endpoint("http://localhost:9999/sheet");
        assert_eq!(client.endpoint(), "http://localhost:9999/sheet");
    }
}
