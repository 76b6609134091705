// src/output/mod.rs
// =============================================================================
// This module writes the finished site map to disk.
//
// Formats:
// - tabular: site-map-<domain>.csv, a header row plus one row per URL
// - structured: site-map-<domain>.json, a pretty-printed array of records
// - lines: site-map-<domain>.txt, one URL per line
//
// <domain> is the seed's classified domain label, so crawling
// https://www.example.com produces site-map-example.*
//
// Each writer owns its file for the duration of one call; the file is closed
// before the next format is written. Any I/O error is returned with the file
// name attached.
// =============================================================================

mod lines;
mod structured;
mod tabular;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::classify::UrlRecord;

/// A site-map file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
    Txt,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Csv, OutputFormat::Json, OutputFormat::Txt];

    /// Maps a `-f` code to the formats it selects.
    ///
    /// `a` = all three, `c` = CSV, `j` = JSON, `t` = TXT. Anything else is
    /// `None`.
    pub fn from_code(code: &str) -> Option<Vec<OutputFormat>> {
        match code {
            "a" => Some(Self::ALL.to_vec()),
            "c" => Some(vec![OutputFormat::Csv]),
            "j" => Some(vec![OutputFormat::Json]),
            "t" => Some(vec![OutputFormat::Txt]),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Txt => "txt",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Csv => "CSV",
            OutputFormat::Json => "JSON",
            OutputFormat::Txt => "TXT",
        }
    }
}

/// `<dir>/site-map-<seed domain>.<ext>`
pub fn site_map_path(dir: &Path, seed: &UrlRecord, format: OutputFormat) -> PathBuf {
    dir.join(format!("site-map-{}.{}", seed.domain, format.extension()))
}

/// Writes `records` in `format` and returns the path written.
///
/// `records` are written in the order given; callers sort them first.
pub fn write_site_map(
    format: OutputFormat,
    records: &[UrlRecord],
    seed: &UrlRecord,
    dir: &Path,
) -> Result<PathBuf> {
    let path = site_map_path(dir, seed, format);

    let file = File::create(&path).with_context(|| {
        format!(
            "failed to create the output {} file {}",
            format.label(),
            path.display()
        )
    })?;
    let writer = BufWriter::new(file);

    let written = match format {
        OutputFormat::Csv => tabular::write(writer, records),
        OutputFormat::Json => structured::write(writer, records),
        OutputFormat::Txt => lines::write(writer, records),
    };
    written.with_context(|| {
        format!("failed to write the {} file {}", format.label(), path.display())
    })?;

    tracing::info!("Wrote {} record(s) to {}", records.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::tempdir;

    fn records() -> Vec<UrlRecord> {
        [
            "https://example.com/a",
            "https://example.com/b,c",
            "https://www.example.com/docs/",
        ]
        .iter()
        .map(|url| UrlRecord::classify(url))
        .collect()
    }

    #[rstest]
    #[case("a", Some(vec![OutputFormat::Csv, OutputFormat::Json, OutputFormat::Txt]))]
    #[case("c", Some(vec![OutputFormat::Csv]))]
    #[case("j", Some(vec![OutputFormat::Json]))]
    #[case("t", Some(vec![OutputFormat::Txt]))]
    #[case("z", None)]
    #[case("", None)]
    #[case("A", None)]
    #[case("csv", None)]
    fn test_from_code(#[case] code: &str, #[case] expected: Option<Vec<OutputFormat>>) {
        assert_eq!(OutputFormat::from_code(code), expected);
    }

    #[test]
    fn test_site_map_path_uses_seed_domain() {
        let seed = UrlRecord::parse("https://www.example.co.za/start").unwrap();
        let dir = Path::new("out");
        assert_eq!(
            site_map_path(dir, &seed, OutputFormat::Csv),
            dir.join("site-map-example.csv")
        );
        assert_eq!(
            site_map_path(dir, &seed, OutputFormat::Json),
            dir.join("site-map-example.json")
        );
        assert_eq!(
            site_map_path(dir, &seed, OutputFormat::Txt),
            dir.join("site-map-example.txt")
        );
    }

    #[test]
    fn test_all_formats_list_the_same_urls() {
        let dir = tempdir().unwrap();
        let seed = UrlRecord::parse("https://example.com").unwrap();
        let records = records();

        for format in OutputFormat::ALL {
            write_site_map(format, &records, &seed, dir.path()).unwrap();
        }

        let txt = fs::read_to_string(dir.path().join("site-map-example.txt")).unwrap();
        let from_txt: Vec<String> = txt.lines().map(str::to_string).collect();

        let mut reader = csv::Reader::from_path(dir.path().join("site-map-example.csv")).unwrap();
        let from_csv: Vec<String> = reader
            .records()
            .map(|row| row.unwrap()[0].to_string())
            .collect();

        let json = fs::read_to_string(dir.path().join("site-map-example.json")).unwrap();
        let parsed: Vec<UrlRecord> = serde_json::from_str(&json).unwrap();
        let from_json: Vec<String> = parsed.into_iter().map(|r| r.url).collect();

        let expected: Vec<String> = records.iter().map(|r| r.url.clone()).collect();
        assert_eq!(from_txt, expected);
        assert_eq!(from_csv, expected);
        assert_eq!(from_json, expected);
    }

    #[test]
    fn test_empty_site_map() {
        let dir = tempdir().unwrap();
        let seed = UrlRecord::parse("https://languagecentre.example.com").unwrap();

        for format in OutputFormat::ALL {
            write_site_map(format, &[], &seed, dir.path()).unwrap();
        }

        assert_eq!(
            fs::read_to_string(dir.path().join("site-map-example.csv")).unwrap(),
            "Url,Protocol,Subdomain,Domain,TLD,Path\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("site-map-example.json")).unwrap(),
            "[]\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("site-map-example.txt")).unwrap(),
            ""
        );
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let seed = UrlRecord::parse("https://example.com").unwrap();

        let err = write_site_map(OutputFormat::Txt, &records(), &seed, &missing).unwrap_err();

        assert!(
            err.to_string().contains("site-map-example.txt"),
            "unexpected error: {:#}",
            err
        );
    }
}
