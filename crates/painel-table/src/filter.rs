//! Record filtering: free-text search plus the named per-column filters.

use painel_model::{FilterState, Record};

/// Columns the named filter axes test against.
pub const EQUIPE_COLUMN: &str = "EQUIPE";
pub const MICROAREA_COLUMN: &str = "MICROÁREA";
pub const STATUS_BOAS_PRATICAS_COLUMN: &str = "STATUS DAS BOAS PRÁTICAS";
pub const STATUS_VACINAS_COLUMN: &str = "STATUS DAS VACINAS";
pub const QUADRIMESTRE_COLUMN: &str = "QUADRIMESTRE";
pub const PRIORIDADE_COLUMN: &str = "PRIORIDADE";

/// Columns never shown in the table or the exported report.
const HIDDEN_COLUMNS: &[&str] = &["QUADRIMESTRE", "PONTUAÇÃO", "PONTOS"];

/// Applies the search and every active filter axis, preserving record
/// order. Axis application order does not affect the result; the filters
/// are an intersection.
pub fn filter_records<'a>(records: &'a [Record], filter: &FilterState) -> Vec<&'a Record> {
    let search = filter
        .search
        .as_deref()
        .map(str::to_lowercase)
        .filter(|needle| !needle.is_empty());
    records
        .iter()
        .filter(|record| {
            search
                .as_deref()
                .is_none_or(|needle| matches_search(record, needle))
        })
        .filter(|record| matches_equals(record, EQUIPE_COLUMN, filter.equipe.as_deref()))
        .filter(|record| matches_equals(record, MICROAREA_COLUMN, filter.microarea.as_deref()))
        .filter(|record| {
            matches_contains(
                record,
                STATUS_BOAS_PRATICAS_COLUMN,
                filter.status_boas_praticas.as_deref(),
            )
        })
        .filter(|record| {
            matches_contains(record, STATUS_VACINAS_COLUMN, filter.status_vacinas.as_deref())
        })
        .filter(|record| {
            matches_equals(record, QUADRIMESTRE_COLUMN, filter.quadrimestre.as_deref())
        })
        .filter(|record| matches_equals(record, PRIORIDADE_COLUMN, filter.prioridade.as_deref()))
        .collect()
}

/// Case-insensitive substring match over every cell value.
fn matches_search(record: &Record, needle: &str) -> bool {
    record
        .values()
        .any(|value| value.to_lowercase().contains(needle))
}

fn matches_equals(record: &Record, column: &str, expected: Option<&str>) -> bool {
    expected.is_none_or(|expected| record.get(column) == expected)
}

/// Status axes use a contains test: feed values carry suffixes like
/// `REALIZADAS (5/5)`.
fn matches_contains(record: &Record, column: &str, expected: Option<&str>) -> bool {
    expected.is_none_or(|expected| record.get(column).contains(expected))
}

/// Distinct non-empty values of a column, in first-appearance order.
/// These feed the CLI's filter choices.
pub fn filter_options(records: &[Record], column: &str) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for record in records {
        let value = record.get(column);
        if value.is_empty() {
            continue;
        }
        if !options.iter().any(|existing| existing == value) {
            options.push(value.to_string());
        }
    }
    options
}

/// Headers shown in the table and the report: blanks and bookkeeping
/// columns are dropped, and the team column disappears while a team
/// filter is active (every visible row would repeat it).
pub fn display_headers<'a>(headers: &'a [String], filter: &FilterState) -> Vec<&'a String> {
    headers
        .iter()
        .filter(|header| !header.is_empty())
        .filter(|header| {
            let upper = header.to_uppercase();
            !HIDDEN_COLUMNS.contains(&upper.as_str())
        })
        .filter(|header| {
            !(filter.equipe.is_some() && header.to_uppercase() == EQUIPE_COLUMN)
        })
        .collect()
}

/// One-line description of the active constraints, used above the table
/// and in the report header.
pub fn filter_summary(filter: &FilterState) -> String {
    let active = filter.active();
    if active.is_empty() {
        return "Todos os registros".to_string();
    }
    active
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join(" · ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        let mut record = Record::new();
        for (header, value) in pairs {
            record.insert((*header).to_string(), (*value).to_string());
        }
        record
    }

    fn sample() -> Vec<Record> {
        vec![
            record(&[
                ("EQUIPE", "ESF 01"),
                ("Nome Completo", "Maria da Silva"),
                ("STATUS DAS BOAS PRÁTICAS", "REALIZADAS (5/5)"),
            ]),
            record(&[
                ("EQUIPE", "ESF 02"),
                ("Nome Completo", "João Souza"),
                ("STATUS DAS BOAS PRÁTICAS", "FALTANDO (2)"),
            ]),
            record(&[
                ("EQUIPE", "ESF 01"),
                ("Nome Completo", "Ana Pereira"),
                ("STATUS DAS BOAS PRÁTICAS", "PRIORIDADE"),
            ]),
        ]
    }

    #[test]
    fn search_is_case_insensitive_across_cells() {
        let records = sample();
        let filter = FilterState {
            search: Some("maria".to_string()),
            ..FilterState::default()
        };
        let filtered = filter_records(&records, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].get("Nome Completo"), "Maria da Silva");
    }

    #[test]
    fn status_filter_matches_value_with_suffix() {
        let records = sample();
        let filter = FilterState {
            status_boas_praticas: Some("REALIZADAS".to_string()),
            ..FilterState::default()
        };
        assert_eq!(filter_records(&records, &filter).len(), 1);
    }

    #[test]
    fn empty_filter_returns_all_records_in_order() {
        let records = sample();
        let filtered = filter_records(&records, &FilterState::default());
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[0].get("Nome Completo"), "Maria da Silva");
        assert_eq!(filtered[2].get("Nome Completo"), "Ana Pereira");
    }

    #[test]
    fn options_keep_first_appearance_order() {
        let records = sample();
        assert_eq!(filter_options(&records, "EQUIPE"), vec!["ESF 01", "ESF 02"]);
    }

    #[test]
    fn display_headers_hide_bookkeeping_and_filtered_team() {
        let headers: Vec<String> = ["Nº", "EQUIPE", "QUADRIMESTRE", "PONTOS", "Nome Completo"]
            .iter()
            .map(|h| (*h).to_string())
            .collect();
        let no_filter = display_headers(&headers, &FilterState::default());
        assert_eq!(no_filter, vec!["Nº", "EQUIPE", "Nome Completo"]);

        let team_filter = FilterState {
            equipe: Some("ESF 01".to_string()),
            ..FilterState::default()
        };
        let with_filter = display_headers(&headers, &team_filter);
        assert_eq!(with_filter, vec!["Nº", "Nome Completo"]);
    }

    #[test]
    fn summary_line_describes_active_axes() {
        assert_eq!(filter_summary(&FilterState::default()), "Todos os registros");
        let filter = FilterState {
            equipe: Some("ESF 01".to_string()),
            status_boas_praticas: Some("FALTANDO".to_string()),
            ..FilterState::default()
        };
        assert_eq!(
            filter_summary(&filter),
            "Equipe: ESF 01 · Boas Práticas: FALTANDO"
        );
    }
}
