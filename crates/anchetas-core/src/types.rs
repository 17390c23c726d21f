//! Catalog item type - one row of the published sheet.

use serde::{Deserialize, Serialize};

/// A gift bundle ("ancheta") as published in the spreadsheet.
///
/// Field names follow Rust conventions; serde renames map them onto the
/// sheet's Spanish column headers. Every field defaults to an empty
/// string because opensheet omits blank cells from its JSON objects.
/// Items are read-only for the lifetime of a page view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Row identifier ("Columna 1" in the sheet)
    #[serde(rename = "Columna 1", default)]
    pub id: String,

    /// Display name
    #[serde(rename = "Nombre", default)]
    pub name: String,

    /// Price label, free text (e.g. "$85.000")
    #[serde(rename = "Precio", default)]
    pub price: String,

    /// Free-text description shown in the detail modal
    #[serde(rename = "Descripcion", default)]
    pub description: String,

    /// Category label used for filtering
    #[serde(rename = "Categoria", default)]
    pub category: String,

    /// Outreach message template, sent verbatim to WhatsApp
    #[serde(rename = "Mensaje", default)]
    pub message: String,

    /// Google Drive share link for the product photo
    #[serde(rename = "URL", default)]
    pub share_link: String,
}
