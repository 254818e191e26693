use std::collections::BTreeMap;
use std::collections::btree_map;

/// One materialized data row, keyed by header text.
///
/// Lookups follow the "absent key reads as empty" contract: every consumer
/// treats a missing column exactly like an empty cell, so metric and filter
/// code never has to distinguish the two.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Record {
    cells: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a cell. A duplicate header label overwrites the earlier
    /// value: the last cell wins within a row.
    pub fn insert(&mut self, header: String, value: String) {
        self.cells.insert(header, value);
    }

    /// Reads a cell by header text; absent keys read as the empty string.
    pub fn get(&self, header: &str) -> &str {
        self.cells.get(header).map_or("", String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.cells.iter()
    }

    pub fn values(&self) -> btree_map::Values<'_, String, String> {
        self.cells.values()
    }
}

/// Insertion-ordered label → value pairs extracted from the rows that
/// precede the detected header row.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Summary {
    entries: Vec<(String, String)>,
}

impl Summary {
    /// Records a value under a label. Re-inserting a label keeps its
    /// original position and replaces the value.
    pub fn insert(&mut self, label: String, value: String) {
        if let Some(entry) = self.entries.iter_mut().find(|(l, _)| *l == label) {
            entry.1 = value;
        } else {
            self.entries.push((label, value));
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The full result of one feed fetch: ordered non-blank headers, the
/// materialized records, the raw data-row matrix, and the opportunistic
/// summary map. Immutable once built; every downstream view is a pure
/// projection over it.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
    pub raw_rows: Vec<Vec<String>>,
    pub summary: Summary,
}

impl Dataset {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_header_last_cell_wins() {
        let mut record = Record::new();
        record.insert("STATUS".to_string(), "FALTANDO".to_string());
        record.insert("STATUS".to_string(), "REALIZADAS".to_string());
        assert_eq!(record.get("STATUS"), "REALIZADAS");
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn summary_keeps_insertion_order_and_updates_in_place() {
        let mut summary = Summary::default();
        summary.insert("Count".to_string(), "42".to_string());
        summary.insert("Média".to_string(), "3.5".to_string());
        summary.insert("Count".to_string(), "43".to_string());
        let labels: Vec<&str> = summary.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Count", "Média"]);
        assert_eq!(summary.get("Count"), Some("43"));
    }
}
