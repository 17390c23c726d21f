//! Resilient image resolution for Drive-hosted product photos.
//!
//! A Drive share link (`https://drive.google.com/file/d/<id>/view`) is
//! never directly embeddable. From the file id we derive three display
//! URLs and try them in order of observed reliability: the thumbnail
//! service answers most often, the static content host sometimes, the
//! generic view export least. A candidate that errors or stays silent
//! past [`LOAD_TIMEOUT`] is abandoned for the next one; once all three
//! fail the card falls back to a placeholder with a link to the
//! original resource.
//!
//! Exhaustion is a normal terminal state, not an error - nothing in
//! this module returns a `Result`.

use std::time::Duration;

/// Target display width passed to the thumbnail endpoints.
pub const DISPLAY_WIDTH: u32 = 1000;

/// How long a candidate may stay pending before the next one is tried.
pub const LOAD_TIMEOUT: Duration = Duration::from_secs(8);

/// Extract the Drive file id from a share link.
///
/// The id is the run of id characters (`[A-Za-z0-9_-]`) following the
/// literal `/d/` marker. Returns `None` when the marker is absent or
/// immediately followed by a separator.
pub fn extract_file_id(share_link: &str) -> Option<&str> {
    let start = share_link.find("/d/")? + 3;
    let rest = &share_link[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(rest.len());
    if end == 0 {
        None
    } else {
        Some(&rest[..end])
    }
}

/// Derive the candidate display URLs for a share link.
///
/// Returns exactly three URLs in fixed priority order, or an empty vec
/// when the link has no recognizable file id. The ordering encodes a
/// reliability preference and must not be changed.
pub fn candidate_urls(share_link: &str) -> Vec<String> {
    let Some(id) = extract_file_id(share_link) else {
        return Vec::new();
    };

    vec![
        format!("https://drive.google.com/thumbnail?id={id}&sz=w{DISPLAY_WIDTH}"),
        format!("https://lh3.googleusercontent.com/d/{id}=w{DISPLAY_WIDTH}"),
        format!("https://drive.google.com/uc?export=view&id={id}"),
    ]
}

/// Where a resolution currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A candidate is selected and awaiting a load or error signal
    Pending,
    /// The current candidate loaded; terminal for this item
    Loaded,
    /// Every candidate failed (or there were none); terminal for this item
    Exhausted,
}

/// Identity of one load attempt: a specific candidate index within a
/// specific binding of the resolver to a share link.
///
/// A timer scheduled for an attempt captures this token and re-checks
/// it when it fires. Any transition away from the attempt - success,
/// error, or a rebind to a new item - changes the token, so a stale
/// timer can never advance or fail a candidate it was not armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptToken {
    generation: u64,
    index: usize,
}

/// Per-item resolution state for one card's display lifetime.
///
/// Invariants:
/// - `loaded` and `failed` are never both true
/// - `index` is a valid candidate index, or exactly `candidates.len()`
///   once exhausted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolution {
    share_link: String,
    candidates: Vec<String>,
    index: usize,
    loaded: bool,
    failed: bool,
    generation: u64,
}

impl ImageResolution {
    /// Start resolving a share link.
    ///
    /// Begins at the first candidate, or directly exhausted when the
    /// link yields no candidates.
    pub fn new(share_link: &str) -> Self {
        let candidates = candidate_urls(share_link);
        let failed = candidates.is_empty();
        Self {
            share_link: share_link.to_string(),
            candidates,
            index: 0,
            loaded: false,
            failed,
            generation: 0,
        }
    }

    /// The share link this state was derived from.
    pub fn share_link(&self) -> &str {
        &self.share_link
    }

    /// All derived candidates, in priority order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// The URL currently being attempted or displayed, if any.
    pub fn current_url(&self) -> Option<&str> {
        self.candidates.get(self.index).map(String::as_str)
    }

    pub fn phase(&self) -> Phase {
        if self.loaded {
            Phase::Loaded
        } else if self.failed {
            Phase::Exhausted
        } else {
            Phase::Pending
        }
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == Phase::Pending
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_exhausted(&self) -> bool {
        self.failed
    }

    /// Token identifying the in-flight attempt, while one exists.
    ///
    /// `None` outside of [`Phase::Pending`] - there is nothing for a
    /// timer to guard in a terminal state.
    pub fn pending_token(&self) -> Option<AttemptToken> {
        if self.is_pending() {
            Some(AttemptToken {
                generation: self.generation,
                index: self.index,
            })
        } else {
            None
        }
    }

    /// The current candidate did not pan out: move to the next one, or
    /// give up after the last.
    ///
    /// Load errors and watchdog timeouts both land here. No-op in a
    /// terminal state.
    pub fn advance(&mut self) {
        if self.loaded || self.failed {
            return;
        }

        if self.index + 1 < self.candidates.len() {
            self.index += 1;
            tracing::debug!(
                attempt = self.index + 1,
                total = self.candidates.len(),
                url = self.current_url(),
                "image candidate failed, trying fallback"
            );
        } else {
            self.index = self.candidates.len();
            self.failed = true;
            tracing::warn!(link = %self.share_link, "all image candidates exhausted");
        }
    }

    /// The current candidate loaded. Terminal; idempotent.
    pub fn mark_loaded(&mut self) {
        if self.failed {
            return;
        }
        self.loaded = true;
    }

    /// Point the resolver at a (possibly) different share link.
    ///
    /// A differing link re-derives the candidates and restarts from the
    /// first one, even from a terminal state. Bumping the generation
    /// invalidates every outstanding [`AttemptToken`] so timers armed
    /// for the previous item become no-ops. Returns whether a reset
    /// happened.
    pub fn rebind(&mut self, share_link: &str) -> bool {
        if self.share_link == share_link {
            return false;
        }

        self.share_link = share_link.to_string();
        self.candidates = candidate_urls(share_link);
        self.index = 0;
        self.loaded = false;
        self.failed = self.candidates.is_empty();
        self.generation += 1;
        true
    }
}
