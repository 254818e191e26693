//! Export behavior against a temporary directory.

use chrono::NaiveDate;
use painel_model::{FilterState, Record};
use painel_table::{ExportFormat, ExportRequest, export_view, filter_records};

fn record(pairs: &[(&str, &str)]) -> Record {
    let mut record = Record::new();
    for (header, value) in pairs {
        record.insert((*header).to_string(), (*value).to_string());
    }
    record
}

fn headers() -> Vec<String> {
    ["Nº", "EQUIPE", "Nome Completo", "STATUS DAS BOAS PRÁTICAS"]
        .iter()
        .map(|h| (*h).to_string())
        .collect()
}

fn sample() -> Vec<Record> {
    vec![
        record(&[
            ("Nº", "1"),
            ("EQUIPE", "ESF 01"),
            ("Nome Completo", "Maria da Silva"),
            ("STATUS DAS BOAS PRÁTICAS", "REALIZADAS (5/5)"),
        ]),
        record(&[
            ("Nº", "2"),
            ("EQUIPE", "ESF 02"),
            ("Nome Completo", "Souza, João"),
            ("STATUS DAS BOAS PRÁTICAS", "FALTANDO (2)"),
        ]),
    ]
}

#[test]
fn export_writes_both_formats_with_stamped_names() {
    let dir = tempfile::tempdir().expect("tempdir");
    let records = sample();
    let headers = headers();
    let filter = FilterState::default();
    let filtered = filter_records(&records, &filter);
    let request = ExportRequest {
        category_key: "saude-mulher",
        title: "Saúde da Mulher",
        headers: &headers,
        filter: &filter,
        output_dir: dir.path(),
        format: ExportFormat::Both,
        date: NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date"),
    };
    let exported = export_view(&request, &filtered).expect("export");

    let html_path = exported.html.expect("html path");
    assert!(html_path.ends_with("saude-mulher_2026-08-06.html"));
    let html = std::fs::read_to_string(&html_path).expect("read html");
    assert!(html.contains("Saúde da Mulher"));
    assert!(html.contains("Todos os registros"));
    assert!(html.contains("Maria da Silva"));

    let csv_path = exported.csv.expect("csv path");
    let csv_text = std::fs::read_to_string(&csv_path).expect("read csv");
    let mut lines = csv_text.lines();
    assert_eq!(
        lines.next(),
        Some("Nº,EQUIPE,Nome Completo,STATUS DAS BOAS PRÁTICAS")
    );
    // The comma-bearing name must come back quoted.
    assert!(csv_text.contains("\"Souza, João\""));
    assert_eq!(csv_text.lines().count(), 3);
}

#[test]
fn export_uses_the_filtered_subset_and_hides_the_team_column() {
    let dir = tempfile::tempdir().expect("tempdir");
    let records = sample();
    let headers = headers();
    let filter = FilterState {
        equipe: Some("ESF 01".to_string()),
        ..FilterState::default()
    };
    let filtered = filter_records(&records, &filter);
    let request = ExportRequest {
        category_key: "desenvolvimento-infantil",
        title: "Desenvolvimento Infantil",
        headers: &headers,
        filter: &filter,
        output_dir: dir.path(),
        format: ExportFormat::Html,
        date: NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date"),
    };
    let exported = export_view(&request, &filtered).expect("export");
    assert!(exported.csv.is_none());

    let html = std::fs::read_to_string(exported.html.expect("html path")).expect("read html");
    assert!(html.contains("Maria da Silva"));
    assert!(!html.contains("João"));
    assert!(html.contains("Equipe: ESF 01"));
    // Team column is hidden while the team filter is active.
    assert!(!html.contains("<th>EQUIPE</th>"));
}
