//! Anchetas Bendición Core Library
//!
//! Catalog data and display logic for the Anchetas Bendición gift-bundle
//! page. The catalog lives in a public spreadsheet published as JSON;
//! product photos live on Google Drive, which never serves a share link
//! as an embeddable image, so each card resolves its photo through a
//! small fallback state machine.
//!
//! ## Overview
//!
//! - [`catalog`] - the read-only sheet fetch plus the pure derivations
//!   (categories, filtering, show-more slicing) the page recomputes from
//!   its inputs.
//! - [`resolver`] - the resilient image resolver: derives candidate URLs
//!   from a Drive share link and walks them until one loads or all fail.
//! - [`whatsapp`] - the `wa.me` deep link that opens an order chat
//!   pre-filled with an item's outreach message.
//!
//! ## Quick Start
//!
//! ```ignore
//! use anchetas_core::{CatalogClient, ImageResolution};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new();
//!     let items = client.fetch().await?;
//!
//!     for item in &items {
//!         let resolution = ImageResolution::new(&item.share_link);
//!         println!("{}: {:?}", item.name, resolution.current_url());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod resolver;
pub mod types;
pub mod whatsapp;

// Re-exports
pub use catalog::{CatalogClient, ALL_CATEGORIES, DEFAULT_SHEET_URL, PAGE_SIZE};
pub use error::{CatalogError, CatalogResult};
pub use resolver::{AttemptToken, ImageResolution, Phase, DISPLAY_WIDTH, LOAD_TIMEOUT};
pub use types::CatalogItem;
