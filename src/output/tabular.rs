// src/output/tabular.rs
// CSV site map: a header row, then one row per record.

use anyhow::Result;
use csv::{Terminator, WriterBuilder};
use std::io::Write;

use crate::classify::UrlRecord;

pub const HEADERS: [&str; 6] = ["Url", "Protocol", "Subdomain", "Domain", "TLD", "Path"];

pub fn write<W: Write>(out: W, records: &[UrlRecord]) -> Result<()> {
    // Rows are written by hand rather than with `serialize` so the header is
    // present even when there are no records.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(HEADERS)?;
    for record in records {
        writer.write_record([
            &record.url,
            &record.protocol,
            &record.subdomain,
            &record.domain,
            &record.tld,
            &record.path,
        ])?;
    }

    writer.flush()?;
    Ok(())
}
