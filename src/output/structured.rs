// src/output/structured.rs
// JSON site map: a two-space indented array of records, field names
// Url, Protocol, Subdomain, Domain, TLD, Path.

use anyhow::Result;
use std::io::Write;

use crate::classify::UrlRecord;

pub fn write<W: Write>(mut out: W, records: &[UrlRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, records)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
