//! Turns a parsed feed into a [`Dataset`].
//!
//! Spreadsheet exports often carry a few summary/metadata rows above the
//! real header row. The header is located by marker substrings; anything
//! above it feeds the summary map, everything below becomes records.

use tracing::debug;

use painel_model::{Dataset, Record, Summary};

use crate::csv::ParsedCsv;

/// How many leading rows are probed for the header.
pub const HEADER_SCAN_LIMIT: usize = 10;

/// A row containing any of these fragments is taken as the header row.
pub const HEADER_MARKERS: &[&str] = &["Nº", "EQUIPE", "Nome Completo"];

/// Builds the dataset: header detection, summary extraction, record
/// construction. Always succeeds; a feed with no usable rows just yields
/// an empty dataset.
pub fn materialize(parsed: &ParsedCsv) -> Dataset {
    let header_index = detect_header_row(&parsed.rows);
    let (summary, header_row, data_rows) = match header_index {
        Some(index) => {
            let summary = extract_summary(&parsed.headers, &parsed.rows[..index]);
            (summary, &parsed.rows[index], &parsed.rows[index + 1..])
        }
        // No marker anywhere: fall back to the very first row and skip
        // summary extraction.
        None if !parsed.rows.is_empty() => {
            (Summary::default(), &parsed.rows[0], &parsed.rows[1..])
        }
        None => return Dataset::default(),
    };

    let records = build_records(header_row, data_rows);
    let headers: Vec<String> = header_row
        .iter()
        .filter(|header| !header.is_empty())
        .cloned()
        .collect();
    debug!(
        header_index = header_index.unwrap_or(0),
        columns = headers.len(),
        records = records.len(),
        summary_entries = summary.len(),
        "feed materialized"
    );
    Dataset {
        headers,
        records,
        raw_rows: data_rows.to_vec(),
        summary,
    }
}

fn detect_header_row(rows: &[Vec<String>]) -> Option<usize> {
    rows.iter()
        .take(HEADER_SCAN_LIMIT)
        .position(|row| {
            row.iter()
                .any(|cell| HEADER_MARKERS.iter().any(|marker| cell.contains(marker)))
        })
}

/// Collects numeric-looking cells from the rows above the header, keyed by
/// the first parsed row's label at the same column index (or a positional
/// fallback).
fn extract_summary(labels: &[String], summary_rows: &[Vec<String>]) -> Summary {
    let mut summary = Summary::default();
    for row in summary_rows {
        for (index, value) in row.iter().enumerate() {
            if value.is_empty() || !is_numeric_like(value) {
                continue;
            }
            let label = match labels.get(index) {
                Some(label) if !label.is_empty() => label.clone(),
                _ => format!("col_{index}"),
            };
            summary.insert(label, value.clone());
        }
    }
    summary
}

/// Numeric test used for summary cells; the feeds write decimals with a
/// comma.
fn is_numeric_like(value: &str) -> bool {
    value.replacen(',', ".", 1).trim().parse::<f64>().is_ok()
}

/// Zips the header row against each data row. Rows with no non-blank cell
/// are skipped; cells past the header's length are dropped; headers past
/// the row's length read as empty. Blank headers never become keys.
fn build_records(header_row: &[String], data_rows: &[Vec<String>]) -> Vec<Record> {
    data_rows
        .iter()
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
        .map(|row| {
            let mut record = Record::new();
            for (index, header) in header_row.iter().enumerate() {
                if header.is_empty() {
                    continue;
                }
                let value = row.get(index).cloned().unwrap_or_default();
                record.insert(header.clone(), value);
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::parse_csv;

    #[test]
    fn header_is_found_behind_summary_rows() {
        let parsed = parse_csv(
            "Relatório,Quadrimestre 1\nTotal,42\nNº,EQUIPE,Nome Completo\n1,ESF 01,Maria\n",
        );
        let dataset = materialize(&parsed);
        assert_eq!(dataset.headers, vec!["Nº", "EQUIPE", "Nome Completo"]);
        assert_eq!(dataset.record_count(), 1);
        assert_eq!(dataset.records[0].get("EQUIPE"), "ESF 01");
    }

    #[test]
    fn summary_uses_first_row_labels() {
        let parsed = parse_csv("Label,Count\nTotal,42\nNº,EQUIPE\n1,ESF 01\n");
        let dataset = materialize(&parsed);
        assert_eq!(dataset.summary.get("Count"), Some("42"));
        assert_eq!(dataset.summary.get("Label"), None);
    }

    #[test]
    fn summary_falls_back_to_positional_labels() {
        let parsed = parse_csv("Resumo\n12,3\nNº,EQUIPE\n1,ESF 01\n");
        let dataset = materialize(&parsed);
        assert_eq!(dataset.summary.get("Resumo"), Some("12"));
        assert_eq!(dataset.summary.get("col_1"), Some("3"));
    }

    #[test]
    fn no_marker_falls_back_to_first_row() {
        let parsed = parse_csv("a,b\n1,2\n3,4\n");
        let dataset = materialize(&parsed);
        assert_eq!(dataset.headers, vec!["a", "b"]);
        assert_eq!(dataset.record_count(), 2);
        assert!(dataset.summary.is_empty());
    }

    #[test]
    fn decimal_comma_counts_as_numeric() {
        assert!(is_numeric_like("3,5"));
        assert!(is_numeric_like("42"));
        assert!(!is_numeric_like("ESF 01"));
    }

    #[test]
    fn short_rows_read_as_empty_never_missing() {
        let parsed = parse_csv("Nº,EQUIPE,STATUS\n1,ESF 01\n");
        let dataset = materialize(&parsed);
        let record = &dataset.records[0];
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("STATUS"), "");
    }

    #[test]
    fn long_rows_drop_cells_past_the_header() {
        let parsed = parse_csv("Nº,EQUIPE\n1,ESF 01,extra,cells\n");
        let dataset = materialize(&parsed);
        assert_eq!(dataset.records[0].len(), 2);
    }

    #[test]
    fn all_blank_rows_produce_no_record() {
        let parsed = parse_csv("Nº,EQUIPE\n,\n1,ESF 01\n");
        let dataset = materialize(&parsed);
        assert_eq!(dataset.record_count(), 1);
    }

    #[test]
    fn blank_headers_are_dropped_from_records() {
        let parsed = parse_csv("Nº,,EQUIPE\n1,skipped,ESF 01\n");
        let dataset = materialize(&parsed);
        assert_eq!(dataset.headers, vec!["Nº", "EQUIPE"]);
        assert_eq!(dataset.records[0].len(), 2);
        assert_eq!(dataset.records[0].get("EQUIPE"), "ESF 01");
    }
}
