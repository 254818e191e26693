//! Materializer behavior over realistic feed shapes.

use painel_ingest::{materialize, parse_csv};

const FEED_WITH_SUMMARY: &str = "\
INDICADORES,1º QUADRIMESTRE,,\n\
Total,42,87%,\n\
Nº,EQUIPE,Nome Completo,STATUS DAS BOAS PRÁTICAS\n\
1,ESF 01,Maria da Silva,REALIZADAS\n\
2,ESF 02,\"Souza, João\",FALTANDO\n\
3,ESF 01,Ana Pereira,PRIORIDADE\n";

#[test]
fn header_row_is_detected_at_index_two() {
    let parsed = parse_csv(FEED_WITH_SUMMARY);
    let dataset = materialize(&parsed);
    assert_eq!(
        dataset.headers,
        vec!["Nº", "EQUIPE", "Nome Completo", "STATUS DAS BOAS PRÁTICAS"]
    );
    assert_eq!(dataset.record_count(), 3);
}

#[test]
fn summary_rows_feed_the_summary_map() {
    let parsed = parse_csv(FEED_WITH_SUMMARY);
    let dataset = materialize(&parsed);
    assert_eq!(dataset.summary.get("1º QUADRIMESTRE"), Some("42"));
    // "87%" does not parse as a number and is skipped.
    assert_eq!(dataset.summary.len(), 1);
}

#[test]
fn quoted_name_with_comma_stays_one_field() {
    let parsed = parse_csv(FEED_WITH_SUMMARY);
    let dataset = materialize(&parsed);
    assert_eq!(dataset.records[1].get("Nome Completo"), "Souza, João");
}

#[test]
fn every_record_has_the_full_key_set() {
    let text = "Nº,EQUIPE,STATUS\n1,ESF 01,SIM\n2,ESF 02\n3,ESF 03,NÃO,ignored\n";
    let dataset = materialize(&parse_csv(text));
    for record in &dataset.records {
        assert_eq!(record.len(), dataset.headers.len());
        for header in &dataset.headers {
            // Present for every header, possibly empty.
            let _ = record.get(header);
        }
    }
    assert_eq!(dataset.records[1].get("STATUS"), "");
}

#[test]
fn raw_rows_keep_the_unzipped_data_matrix() {
    let parsed = parse_csv(FEED_WITH_SUMMARY);
    let dataset = materialize(&parsed);
    assert_eq!(dataset.raw_rows.len(), 3);
    assert_eq!(dataset.raw_rows[0][1], "ESF 01");
}

#[test]
fn empty_feed_yields_empty_dataset() {
    let dataset = materialize(&parse_csv(""));
    assert!(dataset.is_empty());
    assert!(dataset.headers.is_empty());
    assert!(dataset.summary.is_empty());
}
