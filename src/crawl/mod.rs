// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from the seed URL
// - Same-domain admission: only links whose classified domain matches the
//   seed's domain are followed and recorded
// - Every discovered URL is inspected at most once
// - A fixed browser-like User-Agent on every request
//
// Submodules:
// - fetch: the HTTP side (trait + reqwest implementation)
// - links: pulls absolute anchor URLs out of an HTML page
// - visited: the membership set behind the at-most-once guarantee
// - queue: the crawl loop itself
// =============================================================================

mod fetch;
mod links;
mod queue;
mod visited;

pub use fetch::HttpFetcher;
pub use queue::{crawl_site, CrawlOptions};
