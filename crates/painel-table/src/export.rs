//! Writes the filtered view to disk: a print-ready HTML report and a CSV
//! extract, both with date-stamped filenames.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use painel_model::{FilterState, Record};

use crate::filter::{display_headers, filter_summary};
use crate::html::render_document;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Csv,
    Both,
}

impl ExportFormat {
    fn wants_html(self) -> bool {
        matches!(self, ExportFormat::Html | ExportFormat::Both)
    }

    fn wants_csv(self) -> bool {
        matches!(self, ExportFormat::Csv | ExportFormat::Both)
    }
}

/// Everything the exporter needs; the caller supplies the date so the
/// stamped filename is deterministic and testable.
#[derive(Debug)]
pub struct ExportRequest<'a> {
    /// Category key used in the filename, e.g. `saude-mulher`.
    pub category_key: &'a str,
    /// Report title, e.g. `Saúde da Mulher`.
    pub title: &'a str,
    pub headers: &'a [String],
    pub filter: &'a FilterState,
    pub output_dir: &'a Path,
    pub format: ExportFormat,
    pub date: NaiveDate,
}

/// Paths written by one export.
#[derive(Debug, Default)]
pub struct ExportedFiles {
    pub html: Option<PathBuf>,
    pub csv: Option<PathBuf>,
}

fn stamped_filename(category_key: &str, date: NaiveDate, extension: &str) -> String {
    format!("{category_key}_{}.{extension}", date.format("%Y-%m-%d"))
}

/// Exports the filtered record sequence in its original order. The sort
/// and page axes of the view do not affect the document.
pub fn export_view(
    request: &ExportRequest<'_>,
    filtered: &[&Record],
) -> Result<ExportedFiles, ExportError> {
    let headers = display_headers(request.headers, request.filter);
    let summary = filter_summary(request.filter);
    let mut exported = ExportedFiles::default();

    if request.format.wants_html() {
        let document = render_document(
            request.title,
            &headers,
            filtered,
            &summary,
            &request.date.format("%d/%m/%Y").to_string(),
        );
        let path = request
            .output_dir
            .join(stamped_filename(request.category_key, request.date, "html"));
        fs::write(&path, document)?;
        info!(path = %path.display(), records = filtered.len(), "relatório HTML gravado");
        exported.html = Some(path);
    }

    if request.format.wants_csv() {
        let path = request
            .output_dir
            .join(stamped_filename(request.category_key, request.date, "csv"));
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(headers.iter().map(|header| header.as_str()))?;
        for record in filtered {
            writer.write_record(headers.iter().map(|header| record.get(header.as_str())))?;
        }
        writer.flush()?;
        info!(path = %path.display(), records = filtered.len(), "extrato CSV gravado");
        exported.csv = Some(path);
    }

    Ok(exported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_are_date_stamped() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date");
        assert_eq!(
            stamped_filename("saude-mulher", date, "html"),
            "saude-mulher_2026-08-06.html"
        );
    }
}
