pub mod feed;
pub mod table;
pub mod view;
pub mod vocabulary;

pub use feed::{FeedCategory, FeedRegistry, UnknownCategory};
pub use table::{Dataset, Record, Summary};
pub use view::{
    DEFAULT_PAGE_SIZE, FilterAxis, FilterState, PageRequest, SortDirection, SortKey, SortState,
    ViewState,
};
pub use vocabulary::{
    NOT_APPLICABLE, StatusTone, is_filled, is_negative_value, is_positive_value, status_tone,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_missing_key_reads_empty() {
        let mut record = Record::new();
        record.insert("EQUIPE".to_string(), "ESF 01".to_string());
        assert_eq!(record.get("EQUIPE"), "ESF 01");
        assert_eq!(record.get("MICROÁREA"), "");
    }

    #[test]
    fn dataset_serializes() {
        let mut record = Record::new();
        record.insert("Nome Completo".to_string(), "Maria".to_string());
        let dataset = Dataset {
            headers: vec!["Nome Completo".to_string()],
            records: vec![record],
            raw_rows: vec![vec!["Maria".to_string()]],
            summary: Summary::default(),
        };
        let json = serde_json::to_string(&dataset).expect("serialize dataset");
        let round: Dataset = serde_json::from_str(&json).expect("deserialize dataset");
        assert_eq!(round.record_count(), 1);
        assert_eq!(round.records[0].get("Nome Completo"), "Maria");
    }
}
