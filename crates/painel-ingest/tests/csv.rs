//! Parser properties over well-formed and loosely-quoted input.

use painel_ingest::{parse_csv, parse_csv_line};
use proptest::prelude::*;

#[test]
fn row_count_matches_non_blank_lines() {
    let text = "a,b,c\n\n1,2,3\n4,5,6\n   \n7,8,9\n";
    let parsed = parse_csv(text);
    assert_eq!(parsed.rows.len(), 4);
}

#[test]
fn cell_count_is_delimiter_count_plus_one() {
    let line = "um,dois,tres,quatro";
    assert_eq!(parse_csv_line(line).len(), 4);
    assert_eq!(parse_csv_line("sozinho").len(), 1);
    // Trailing delimiter yields a final empty cell.
    assert_eq!(parse_csv_line("a,b,"), vec!["a", "b", ""]);
}

#[test]
fn quoted_delimiter_round_trips() {
    let cells = ["1", "Silva, Maria", "ESF 01", "SIM"];
    let line = format!("{},\"{}\",{},{}", cells[0], cells[1], cells[2], cells[3]);
    assert_eq!(parse_csv_line(&line), cells);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // For input with no delimiters, quotes, or surrounding whitespace in
    // any cell, joining N cells and re-parsing yields the same N cells.
    #[test]
    fn join_then_parse_is_identity(cells in proptest::collection::vec("[a-zA-Z0-9 ]{0,12}", 1..8)) {
        let trimmed: Vec<String> = cells.iter().map(|c| c.trim().to_string()).collect();
        let line = trimmed.join(",");
        let parsed = parse_csv_line(&line);
        assert_eq!(parsed, trimmed);
    }

    // Wrapping one comma-bearing cell in quotes keeps it a single cell.
    #[test]
    fn quoted_cell_survives_embedded_commas(left in "[a-z]{1,8}", right in "[a-z]{1,8}") {
        let line = format!("\"{left},{right}\",fim");
        let parsed = parse_csv_line(&line);
        assert_eq!(parsed, vec![format!("{left},{right}"), "fim".to_string()]);
    }
}
