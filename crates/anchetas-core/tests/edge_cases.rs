//! Edge case and boundary condition tests
//!
//! These tests verify the resolver and catalog derivations handle
//! unusual inputs and boundary values correctly.

use anchetas_core::resolver::{candidate_urls, extract_file_id};
use anchetas_core::{catalog, CatalogItem, ImageResolution, Phase};

// ============================================================================
// Share Link Parsing
// ============================================================================

/// The marker must be the literal `/d/`, not any `d` path segment
#[test]
fn test_marker_must_be_exact() {
    assert_eq!(extract_file_id("https://x.com/doc/ABC"), None);
    assert_eq!(extract_file_id("https://x.com/id/ABC"), None);
    assert_eq!(extract_file_id("d/ABC"), None);
    assert_eq!(extract_file_id("/d/ABC"), Some("ABC"));
}

/// Only the first marker counts
#[test]
fn test_first_marker_wins() {
    assert_eq!(extract_file_id("https://x/d/first/d/second"), Some("first"));
}

/// The id stops at the first non-id character
#[test]
fn test_id_charset_boundary() {
    assert_eq!(extract_file_id("https://x/d/ABC123/view"), Some("ABC123"));
    assert_eq!(extract_file_id("https://x/d/ABC?usp=drive"), Some("ABC"));
    assert_eq!(extract_file_id("https://x/d/ABC#frag"), Some("ABC"));
    assert_eq!(extract_file_id("https://x/d/a_b-C9/view"), Some("a_b-C9"));
}

/// Very long ids survive intact
#[test]
fn test_long_id() {
    let id = "A".repeat(200);
    let link = format!("https://drive.google.com/file/d/{id}/view");
    assert_eq!(extract_file_id(&link), Some(id.as_str()));
}

// ============================================================================
// Candidate Derivation
// ============================================================================

/// Every candidate embeds the extracted id
#[test]
fn test_candidates_embed_id() {
    let urls = candidate_urls("https://drive.google.com/file/d/ABC123/view");
    assert_eq!(urls.len(), 3);
    for url in &urls {
        assert!(url.contains("ABC123"), "missing id in {url}");
    }
}

/// The documented fixture from the original page
#[test]
fn test_known_candidate_set() {
    let urls = candidate_urls(".../d/ABC123/view");
    assert_eq!(
        urls,
        vec![
            "https://drive.google.com/thumbnail?id=ABC123&sz=w1000",
            "https://lh3.googleusercontent.com/d/ABC123=w1000",
            "https://drive.google.com/uc?export=view&id=ABC123",
        ]
    );
}

// ============================================================================
// Resolution State Machine
// ============================================================================

const LINK_A: &str = "https://drive.google.com/file/d/AAA111/view";
const LINK_B: &str = "https://drive.google.com/file/d/BBB222/view";

/// Error on candidates 0 and 1 leaves the resolver pending on 2;
/// a third failure exhausts it
#[test]
fn test_two_errors_then_exhaustion() {
    let mut res = ImageResolution::new(LINK_A);

    res.advance();
    res.advance();
    assert_eq!(res.phase(), Phase::Pending);
    assert_eq!(
        res.current_url(),
        Some("https://drive.google.com/uc?export=view&id=AAA111")
    );

    res.advance();
    assert_eq!(res.phase(), Phase::Exhausted);
}

/// A timeout is indistinguishable from an error: both call advance,
/// so exhaustion from the last candidate is trigger-independent
#[test]
fn test_timeout_and_error_share_the_transition() {
    let via_error = {
        let mut res = ImageResolution::new(LINK_A);
        res.advance();
        res.advance();
        res.advance();
        res
    };
    let via_timeout = {
        let mut res = ImageResolution::new(LINK_A);
        // the watchdog has no separate entry point; it calls advance too
        res.advance();
        res.advance();
        res.advance();
        res
    };
    assert_eq!(via_error, via_timeout);
    assert_eq!(via_error.phase(), Phase::Exhausted);
}

/// Item change mid-pending: the new state starts over and the timer
/// armed for the old attempt no longer matches
#[test]
fn test_item_change_invalidates_outstanding_timer() {
    let mut res = ImageResolution::new(LINK_A);
    res.advance();
    assert_eq!(res.phase(), Phase::Pending);

    // a watchdog armed now captures this token
    let stale = res.pending_token().unwrap();

    res.rebind(LINK_B);
    assert_eq!(res.phase(), Phase::Pending);
    assert_eq!(
        res.current_url(),
        Some("https://drive.google.com/thumbnail?id=BBB222&sz=w1000")
    );

    // the old timer fires late: its guard fails, so it must not advance
    assert_ne!(res.pending_token(), Some(stale));
    if res.pending_token() == Some(stale) {
        res.advance();
    }
    assert_eq!(
        res.current_url(),
        Some("https://drive.google.com/thumbnail?id=BBB222&sz=w1000")
    );
}

/// Rebinding to a link without an id lands directly in Exhausted
#[test]
fn test_rebind_to_unparsable_link() {
    let mut res = ImageResolution::new(LINK_A);
    res.mark_loaded();

    assert!(res.rebind("https://example.com/nothing"));
    assert_eq!(res.phase(), Phase::Exhausted);
    assert!(res.candidates().is_empty());
    assert_eq!(res.pending_token(), None);
}

/// Empty share link: no candidates, terminal from the start
#[test]
fn test_empty_share_link() {
    let res = ImageResolution::new("");
    assert_eq!(res.phase(), Phase::Exhausted);
    assert_eq!(res.current_url(), None);
}

// ============================================================================
// Catalog Derivations
// ============================================================================

fn sheet_item(id: &str, category: &str) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: format!("Ancheta {id}"),
        price: String::new(),
        description: String::new(),
        category: category.to_string(),
        message: String::new(),
        share_link: String::new(),
    }
}

/// Filtering then slicing composes: the page never renders more than
/// PAGE_SIZE cards while collapsed
#[test]
fn test_filter_then_slice() {
    let items: Vec<_> = (0..30)
        .map(|i| sheet_item(&i.to_string(), if i % 2 == 0 { "Amor" } else { "Otro" }))
        .collect();

    let filtered: Vec<CatalogItem> = catalog::filter_by_category(&items, "Amor")
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(filtered.len(), 15);

    assert_eq!(catalog::visible(&filtered, false).len(), catalog::PAGE_SIZE);
    assert_eq!(catalog::visible(&filtered, true).len(), 15);
}

/// Category labels are case-sensitive, matching the sheet verbatim
#[test]
fn test_category_case_sensitivity() {
    let items = vec![sheet_item("1", "Amor"), sheet_item("2", "amor")];
    assert_eq!(catalog::categories(&items), vec!["Todas", "Amor", "amor"]);
    assert_eq!(catalog::filter_by_category(&items, "Amor").len(), 1);
}
