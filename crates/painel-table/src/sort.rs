//! Column sorting: numeric when both values parse, otherwise a
//! case- and accent-insensitive comparison approximating pt-BR collation.

use std::cmp::Ordering;

use painel_model::{Record, SortDirection, SortState};

/// The running row-number column is display-only and never sorted.
pub fn is_sortable(header: &str) -> bool {
    let lower = header.to_lowercase();
    !(lower.starts_with("nº") || lower == "n°")
}

/// Lowercases and folds the Portuguese diacritic set so "Ágata" and
/// "agata" compare equal, mirroring a base-sensitivity locale compare.
pub fn collate(value: &str) -> String {
    value.to_lowercase().chars().map(fold_diacritic).collect()
}

fn fold_diacritic(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        _ => ch,
    }
}

/// Numeric comparison when both sides parse as floats, collated string
/// comparison otherwise. `"2"` orders before `"10"`.
pub fn compare_values(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.trim(), b.trim());
    if let (Ok(x), Ok(y)) = (a.parse::<f64>(), b.parse::<f64>()) {
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }
    collate(a).cmp(&collate(b))
}

/// Stable in-place sort by the state's column and direction. An unsorted
/// state or a non-sortable column leaves the order untouched.
pub fn sort_records(records: &mut [&Record], sort: &SortState) {
    let Some(key) = &sort.key else {
        return;
    };
    if !is_sortable(&key.column) {
        return;
    }
    records.sort_by(|a, b| {
        let ordering = compare_values(a.get(&key.column), b.get(&key.column));
        match key.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(column: &str, value: &str) -> Record {
        let mut record = Record::new();
        record.insert(column.to_string(), value.to_string());
        record
    }

    #[test]
    fn numeric_looking_values_sort_numerically() {
        assert_eq!(compare_values("2", "10"), Ordering::Less);
        assert_eq!(compare_values("10", "2"), Ordering::Greater);
    }

    #[test]
    fn accented_names_collate_with_their_base_letters() {
        assert_eq!(compare_values("Ágata", "agata"), Ordering::Equal);
        assert_eq!(compare_values("José", "Josefa"), Ordering::Less);
    }

    #[test]
    fn descending_reverses_the_ordering() {
        let rows = [
            record("IDADE", "10"),
            record("IDADE", "2"),
            record("IDADE", "35"),
        ];
        let mut refs: Vec<&Record> = rows.iter().collect();
        sort_records(&mut refs, &SortState::descending("IDADE"));
        let values: Vec<&str> = refs.iter().map(|r| r.get("IDADE")).collect();
        assert_eq!(values, vec!["35", "10", "2"]);
    }

    #[test]
    fn row_number_column_is_never_sorted() {
        let rows = [record("Nº", "2"), record("Nº", "1")];
        let mut refs: Vec<&Record> = rows.iter().collect();
        sort_records(&mut refs, &SortState::ascending("Nº"));
        let values: Vec<&str> = refs.iter().map(|r| r.get("Nº")).collect();
        assert_eq!(values, vec!["2", "1"]);
    }

    #[test]
    fn unsorted_state_preserves_order() {
        let rows = [record("EQUIPE", "ESF 02"), record("EQUIPE", "ESF 01")];
        let mut refs: Vec<&Record> = rows.iter().collect();
        sort_records(&mut refs, &SortState::default());
        assert_eq!(refs[0].get("EQUIPE"), "ESF 02");
    }
}
