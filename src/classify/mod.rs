// src/classify/mod.rs
// =============================================================================
// This module turns URL strings into structured site-map records.
//
// Submodules:
// - record: the UrlRecord type and the grammar that fills it in
//
// The crawler uses the classifier twice:
// - strictly, for the seed URL (a bad seed stops the program)
// - leniently, for every discovered link (a bad link is just dropped)
// =============================================================================

mod record;

pub use record::UrlRecord;
