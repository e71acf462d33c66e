// SPDX-License-Identifier: Apache-2.0

use crate::IngestError;
use csv::ReaderBuilder;
use folio_model::normalize_header;
use std::collections::BTreeMap;
use std::path::Path;

/// One source row keyed by normalized header. Values are raw cell text;
/// cleaning happens during extraction.
pub type RawRow = BTreeMap<String, String>;

/// Read the whole source table into memory. An unreadable or unparseable
/// source is fatal; ragged rows are tolerated (missing cells read as
/// empty, extra cells are ignored) and fully blank rows are skipped.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError(format!("cannot open source table: {e}")))?;

    let keys: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError(format!("cannot read header row: {e}")))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut out = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError(format!("cannot parse source row: {e}")))?;
        let mut row = RawRow::new();
        for (i, key) in keys.iter().enumerate() {
            if key.is_empty() {
                continue;
            }
            let value = record.get(i).unwrap_or("");
            // First occurrence wins when two headers normalize to the
            // same field.
            row.entry(key.clone()).or_insert_with(|| value.to_string());
        }
        if row.values().all(|v| v.trim().is_empty()) {
            continue;
        }
        out.push(row);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::read_rows;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_rows_keyed_by_normalized_headers() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join("articles.csv");
        fs::write(
            &path,
            "\u{feff}Title, Article  License Type \nFirst,CC-BY\nSecond,\n",
        )
        .expect("write csv");

        let rows = read_rows(&path).expect("read rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("title").map(String::as_str), Some("First"));
        assert_eq!(
            rows[0].get("article license type").map(String::as_str),
            Some("CC-BY")
        );
        assert_eq!(rows[1].get("article license type").map(String::as_str), Some(""));
    }

    #[test]
    fn tolerates_ragged_rows_and_skips_blank_ones() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join("ragged.csv");
        fs::write(&path, "Title,Author,Journal\nOnly Title\n,,\nA,B,C,D\n").expect("write csv");

        let rows = read_rows(&path).expect("read rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("author").map(String::as_str), Some(""));
        assert_eq!(rows[1].get("journal").map(String::as_str), Some("C"));
    }

    #[test]
    fn quoted_cells_keep_embedded_delimiters() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join("quoted.csv");
        fs::write(
            &path,
            "Title,Author\n\"Law, Order; Policy\",\"Doe, Jane\"\n",
        )
        .expect("write csv");

        let rows = read_rows(&path).expect("read rows");
        assert_eq!(
            rows[0].get("title").map(String::as_str),
            Some("Law, Order; Policy")
        );
    }

    #[test]
    fn missing_source_is_fatal() {
        let tmp = tempdir().expect("tempdir");
        let err = read_rows(&tmp.path().join("absent.csv")).expect_err("must fail");
        assert!(err.0.contains("cannot open source table"), "unexpected: {}", err.0);
    }
}
