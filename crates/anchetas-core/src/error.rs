//! Error types for the Anchetas catalog

use thiserror::Error;

/// Main error type for catalog operations.
///
/// Only the page-level sheet fetch produces errors. Image resolution
/// failures are ordinary state ([`crate::resolver::Phase::Exhausted`]),
/// never error values.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The HTTP request itself failed (DNS, TLS, connection)
    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The sheet endpoint answered with a non-success status
    #[error("Sheet endpoint returned status {0}")]
    Status(u16),

    /// The response body was not the expected JSON array
    #[error("Malformed catalog payload: {0}")]
    Decode(String),
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::Status(502);
        assert_eq!(format!("{}", err), "Sheet endpoint returned status 502");

        let err = CatalogError::Decode("expected array".to_string());
        assert_eq!(format!("{}", err), "Malformed catalog payload: expected array");
    }
}
