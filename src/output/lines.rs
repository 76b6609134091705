// src/output/lines.rs
// Plain-text site map: one URL per line, each line newline-terminated.

use anyhow::Result;
use std::io::Write;

use crate::classify::UrlRecord;

pub fn write<W: Write>(mut out: W, records: &[UrlRecord]) -> Result<()> {
    for record in records {
        writeln!(out, "{}", record.url)?;
    }
    out.flush()?;
    Ok(())
}
