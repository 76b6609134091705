// src/crawl/queue.rs
// =============================================================================
// This module implements the crawl loop with a breadth-first approach.
//
// How it works:
// 1. Put the seed URL in the queue
// 2. Pop a URL, fetch it, pull out every <a href>
// 3. For each link seen for the first time:
//      - classify it
//      - keep it if it is on the seed's domain
//      - queue it so its own links get followed
// 4. Repeat until the queue is empty
//
// There is no depth or page limit: the crawl ends when the site has no
// unseen same-domain links left. Each URL is queued at most once, which is
// what makes that terminate.
//
// Failed fetches are logged and skipped. They are never retried and never
// stop the crawl.
//
// Rust concepts:
// - VecDeque: FIFO queue for breadth-first crawling
// - Generics with trait bounds: crawl_site works with any Fetch
// - Ownership: the result is built here and handed back to the caller
// =============================================================================

use std::collections::VecDeque;
use std::io::Write;
use std::time::Duration;
use url::Url;

use crate::classify::UrlRecord;

use super::fetch::Fetch;
use super::links::extract_links;
use super::visited::VisitedSet;

/// Knobs for a single crawl.
#[derive(Debug, Clone, Default)]
pub struct CrawlOptions {
    /// Pause between consecutive fetches.
    pub delay: Duration,
}

/// Everything a crawl produced.
#[derive(Debug, Default)]
pub struct CrawlResult {
    /// Accepted records, in discovery order until `sort_records` is called.
    pub records: Vec<UrlRecord>,
    pub pages_fetched: usize,
    pub pages_failed: usize,
    /// Links seen for the first time.
    pub links_discovered: usize,
    /// First-time links that failed the same-domain filter.
    pub links_rejected: usize,
}

impl CrawlResult {
    /// Sorts records by URL, byte-wise ascending.
    pub fn sort_records(&mut self) {
        self.records.sort_unstable_by(|a, b| a.url.cmp(&b.url));
    }
}

/// Crawls every same-domain page reachable from `seed`.
///
/// A `Visiting <url>` line is written to `progress` before every fetch.
pub async fn crawl_site<F, P>(
    fetcher: &F,
    seed: &UrlRecord,
    options: &CrawlOptions,
    progress: &mut P,
) -> CrawlResult
where
    F: Fetch + ?Sized,
    P: Write,
{
    let mut result = CrawlResult::default();

    // Gated seeds produce an empty site map without touching the network
    if seed.is_gated() {
        tracing::info!("Seed {} is under a gated subdomain; nothing to crawl", seed.url);
        return result;
    }

    // What we actually request for the seed, and the normalised form a link
    // back to it takes after resolution ("https://example.com" vs
    // "https://example.com/")
    let seed_target = seed.fetch_target();
    let seed_link = normalized(&seed_target);

    // The seed is queued directly and never marked visited; only links go
    // through the visited set.
    let mut queue = VecDeque::new();
    queue.push_back(seed_target);
    let mut visited = VisitedSet::new();

    // Process the queue until empty
    while let Some(url) = queue.pop_front() {
        // Progress output is best-effort; a closed stdout must not stop the crawl
        let _ = writeln!(progress, "Visiting {}", url);

        // Fetch the page; failures are logged and never retried
        let page = match fetcher.fetch(&url).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Failed to fetch {}: {:#}", url, e);
                result.pages_failed += 1;
                continue;
            }
        };
        result.pages_fetched += 1;

        if !page.is_html() {
            tracing::debug!("Not scanning non-HTML page {}", page.url);
            continue;
        }

        // Links resolve against the final (post-redirect) page URL
        for link in extract_links(&page.body, &page.url) {
            // Seen before, whether accepted or not: skip
            if !visited.observe(&link) {
                continue;
            }

            let record = UrlRecord::classify(&link);
            if !admits(seed, &record) {
                tracing::debug!("Skipping off-site or unparseable link: {}", link);
                result.links_rejected += 1;
                continue;
            }

            // The seed has already been fetched; record it but don't queue it again.
            if link != seed_link {
                queue.push_back(link);
            }
            result.records.push(record);
        }

        // Polite crawling: optional pause between requests
        if !options.delay.is_zero() {
            tokio::time::sleep(options.delay).await;
        }
    }

    result.links_discovered = visited.len();
    tracing::info!(
        "Crawl of {} finished: {} page(s) fetched, {} failed, {} link(s) discovered, {} rejected, {} accepted",
        seed.url,
        result.pages_fetched,
        result.pages_failed,
        result.links_discovered,
        result.links_rejected,
        result.records.len()
    );

    result
}

// The string form `extract_links` would produce for `url`. Falls back to the
// raw string when the url crate can't parse it.
fn normalized(url: &str) -> String {
    Url::parse(url).map_or_else(|_| url.to_string(), |parsed| parsed.to_string())
}

// Same-domain admission filter.
fn admits(seed: &UrlRecord, record: &UrlRecord) -> bool {
    record.is_classified() && record.domain == seed.domain && !seed.is_gated()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is the seed not put in the visited set?
//    - The visited set only tracks links found on pages
//    - The seed is fetched once, up front; `seed_link` stops it from being
//      queued again if a page links back to it
//
// 2. Why `F: Fetch + ?Sized`?
//    - `?Sized` lets callers pass a `&dyn Fetch` as well as a concrete type
//    - Tests use an in-memory site; main uses HttpFetcher
//
// 3. Why return CrawlResult instead of writing files here?
//    - The crawl owns its state and hands it back when done
//    - Sorting and writing are separate steps the caller controls
// -----------------------------------------------------------------------------
