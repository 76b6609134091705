// src/crawl/visited.rs
// =============================================================================
// The set of absolute URL strings the crawler has already looked at.
//
// A URL goes in the first time it shows up as a link, whether or not it ends
// up in the site map. Nothing is ever removed, so a URL can only be queued
// once per run.
// =============================================================================

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `url` and reports whether this is the first time it was seen.
    pub fn observe(&mut self, url: &str) -> bool {
        if self.seen.contains(url) {
            return false;
        }
        self.seen.insert(url.to_string())
    }

    /// Number of distinct URLs observed so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }
}
