// src/classify/record.rs
// =============================================================================
// This module parses a URL string into its site-map fields:
//
//   [protocol] [subdomain "."] domain tld [path]
//
// Examples:
//   "https://www.example.com/docs" -> https | www. | example | .com    | /docs
//   "http://sub.example.co.za/"    -> http  | sub. | example | .co.za | /
//   "example.org"                  -> http  |      | example | .org   |
//
// The grammar is deliberately narrow: no query strings, fragments, ports,
// userinfo or non-ASCII TLDs. Anything outside it is not part of the site map.
//
// Rust concepts:
// - Lazy statics: compile the regex once, reuse it everywhere
// - thiserror: typed errors for library-style code
// - Display: a human-readable rendering of a struct
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Seeds whose subdomain label equals this value are never crawled.
pub const GATED_SUBDOMAIN: &str = "languagecentre";

// Anchored, so the whole string has to match.
static URL_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(https?://)?",                        // protocol... maybe
        r"([a-zA-Z0-9-]+\.)?",                   // subdomain... maybe
        r"([a-zA-Z0-9-]+)",                      // domain
        r"(\.[a-zA-Z]{2,}(?:\.[a-zA-Z]{2,})*)",  // tld, incl. .co.za and friends
        r"(/[a-zA-Z0-9/._-]*)?$",                // path... maybe
    ))
    .expect("URL grammar is a valid regex")
});

// Second-level labels that sit under a country TLD (example.co.za,
// example.com.au, example.ac.uk). When the greedy match lands on one of these
// as the domain, the labels are shifted so the registrable label wins.
const SECOND_LEVEL_LABELS: &[&str] = &[
    "ac", "co", "com", "edu", "gov", "ltd", "mil", "net", "org", "plc", "sch",
];

/// Raised when a URL does not fit the site-map grammar.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Failed to parse URL: {0}")]
    NoMatch(String),
}

/// One entry of the site map.
///
/// `url` is always the string that was classified. The other fields are empty
/// when the string did not match the grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    #[serde(rename = "Url")]
    pub url: String,
    #[serde(rename = "Protocol")]
    pub protocol: String,
    #[serde(rename = "Subdomain")]
    pub subdomain: String,
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "TLD")]
    pub tld: String,
    #[serde(rename = "Path")]
    pub path: String,
}

impl UrlRecord {
    /// Strict classification, used for the seed URL.
    pub fn parse(raw: &str) -> Result<Self, ClassifyError> {
        Self::match_grammar(raw).ok_or_else(|| ClassifyError::NoMatch(raw.to_string()))
    }

    /// Lenient classification, used for discovered links.
    ///
    /// Never fails: a string outside the grammar comes back with only `url`
    /// populated, which the crawl's admission filter rejects.
    pub fn classify(raw: &str) -> Self {
        Self::match_grammar(raw).unwrap_or_else(|| Self {
            url: raw.to_string(),
            ..Self::default()
        })
    }

    fn match_grammar(raw: &str) -> Option<Self> {
        // No match means the string is not part of any site map
        let caps = URL_GRAMMAR.captures(raw)?;

        // Optional groups that didn't take part in the match read as ""
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        // "https://" -> "https"; no scheme at all defaults to plain http
        let protocol = match group(1).trim_end_matches("://") {
            "" => "http",
            scheme => scheme,
        };

        let mut record = Self {
            url: raw.to_string(),
            protocol: protocol.to_string(),
            subdomain: group(2).to_string(),
            domain: group(3).to_string(),
            tld: group(4).to_string(),
            path: group(5).to_string(),
        };
        // Fix up the split for country suffixes like .co.za
        record.shift_second_level_suffix();
        Some(record)
    }

    // "example.co.za" matches greedily as subdomain "example.", domain "co",
    // tld ".za". Move "co" into the tld and "example" into the domain.
    fn shift_second_level_suffix(&mut self) {
        let single_label_tld = self.tld.matches('.').count() == 1;
        let is_suffix_label = SECOND_LEVEL_LABELS
            .iter()
            .any(|label| label.eq_ignore_ascii_case(&self.domain));

        if self.subdomain.is_empty() || !single_label_tld || !is_suffix_label {
            return;
        }

        self.tld = format!(".{}{}", self.domain, self.tld);
        self.domain = self.subdomain.trim_end_matches('.').to_string();
        self.subdomain.clear();
    }

    /// True when the record carries enough structure to be in a site map.
    pub fn is_classified(&self) -> bool {
        !self.domain.is_empty() && !self.tld.is_empty()
    }

    /// The subdomain without its trailing dot ("www." -> "www").
    pub fn subdomain_label(&self) -> &str {
        self.subdomain.trim_end_matches('.')
    }

    /// Seeds under the gated subdomain produce an empty site map.
    pub fn is_gated(&self) -> bool {
        self.subdomain_label() == GATED_SUBDOMAIN
    }

    /// The string to request over HTTP.
    ///
    /// The grammar allows the scheme to be left out ("example.com"); such
    /// records are fetched with their defaulted protocol.
    pub fn fetch_target(&self) -> String {
        if self.url.contains("://") {
            self.url.clone()
        } else {
            format!("{}://{}", self.protocol, self.url)
        }
    }
}

impl fmt::Display for UrlRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parsed URL: [Protocol: {} | Subdomain: {} | Domain: {} | TLD: {} | Path: {}]",
            self.protocol, self.subdomain, self.domain, self.tld, self.path
        )
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why once_cell::sync::Lazy?
//    - Regex::new is relatively expensive
//    - Lazy compiles the pattern the first time it's used, then reuses it
//
// 2. What does `..Self::default()` do?
//    - Struct update syntax: fill every field not named with its default
//    - Here it leaves protocol/subdomain/domain/tld/path as empty strings
// -----------------------------------------------------------------------------
