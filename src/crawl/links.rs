// src/crawl/links.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate to find every <a href="..."> in document order,
// and the `url` crate to turn each href into an absolute URL.
//
// Resolution rules:
// - hrefs are resolved against the page URL, or against <base href> when the
//   page declares one
// - "#section" style hrefs point back into the same page and are dropped
// - fragments are stripped, so "/a#top" and "/a" are the same link
// - hrefs that cannot be resolved are dropped
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

/// Returns the absolute URL of every anchor on the page, in document order.
///
/// Duplicates are kept; deduplication is the crawler's job.
pub fn extract_links(html: &str, page_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let base = base_url(&document, page_url);

    let selector = Selector::parse("a[href]").expect("'a[href]' is a valid selector");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| absolute_url(&base, href))
        .filter(|link| !link.is_empty())
        .collect()
}

// The first <base href> wins, same as in a browser.
fn base_url(document: &Html, page_url: &Url) -> Url {
    let selector = Selector::parse("base[href]").expect("'base[href]' is a valid selector");

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("href"))
        .and_then(|href| page_url.join(href).ok())
        .unwrap_or_else(|| page_url.clone())
}

// Resolves `href` against `base`. An empty string means "no link".
fn absolute_url(base: &Url, href: &str) -> String {
    if href.starts_with('#') {
        return String::new();
    }

    match base.join(href) {
        Ok(mut url) => {
            url.set_fragment(None);
            url.to_string()
        }
        Err(e) => {
            tracing::debug!("Failed to resolve '{}' against '{}': {}", href, base, e);
            String::new()
        }
    }
}
