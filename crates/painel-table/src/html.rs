//! Report document rendering.
//!
//! Produces a self-contained, print-ready landscape HTML document from a
//! filtered view: title, active-filter line, the records split into
//! fixed-size pages with a running row index, and a repeated page footer.

use painel_model::{Record, StatusTone, status_tone};

use crate::sort::is_sortable;

/// Rows per printed page.
pub const ROWS_PER_PAGE: usize = 20;

/// Renders the full document. `headers` is the display header list and
/// `records` the filtered set in original order. The feed's own
/// row-number column is dropped; the document's running index replaces
/// it.
pub fn render_document(
    title: &str,
    headers: &[&String],
    records: &[&Record],
    filter_summary: &str,
    generated_at: &str,
) -> String {
    let headers: Vec<&String> = headers
        .iter()
        .copied()
        .filter(|header| is_sortable(header.as_str()))
        .collect();
    let headers = headers.as_slice();
    let page_count = records.len().div_ceil(ROWS_PER_PAGE).max(1);
    let pages: String = (0..page_count)
        .map(|page_index| {
            let start = page_index * ROWS_PER_PAGE;
            let end = (start + ROWS_PER_PAGE).min(records.len());
            render_page(
                title,
                headers,
                &records[start..end],
                start,
                page_index + 1,
                page_count,
                filter_summary,
                generated_at,
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
{pages}</body>
</html>
"#,
        title = escape_html(title),
        css = inline_css(),
        pages = pages,
    )
}

#[allow(clippy::too_many_arguments)]
fn render_page(
    title: &str,
    headers: &[&String],
    records: &[&Record],
    start_index: usize,
    page: usize,
    page_count: usize,
    filter_summary: &str,
    generated_at: &str,
) -> String {
    let body = if records.is_empty() {
        "        <p class=\"empty\">Nenhum registro encontrado.</p>\n".to_string()
    } else {
        render_table(headers, records, start_index)
    };
    format!(
        r#"    <section class="page">
        <header>
            <h1>{title}</h1>
            <p class="filters">{filters}</p>
        </header>
{body}        <footer>
            <span>página {page} de {page_count}</span>
            <span>gerado em {generated}</span>
        </footer>
    </section>
"#,
        title = escape_html(title),
        filters = escape_html(filter_summary),
        body = body,
        page = page,
        page_count = page_count,
        generated = escape_html(generated_at),
    )
}

fn render_table(headers: &[&String], records: &[&Record], start_index: usize) -> String {
    let header_cells: String = headers
        .iter()
        .map(|header| format!("<th>{}</th>", escape_html(header.as_str())))
        .collect();
    let rows: String = records
        .iter()
        .enumerate()
        .map(|(offset, record)| render_row(headers, record, start_index + offset + 1))
        .collect();
    format!(
        "        <table>\n            <thead><tr><th>Nº</th>{header_cells}</tr></thead>\n            <tbody>\n{rows}            </tbody>\n        </table>\n"
    )
}

fn render_row(headers: &[&String], record: &Record, row_number: usize) -> String {
    let cells: String = headers
        .iter()
        .map(|header| {
            let value = record.get(header.as_str());
            match status_tone(value) {
                Some(tone) => format!(
                    "<td><span class=\"status {class}\">{value}</span></td>",
                    class = tone_class(tone),
                    value = escape_html(value),
                ),
                None => format!("<td>{}</td>", escape_html(value)),
            }
        })
        .collect();
    format!("                <tr><td class=\"index\">{row_number}</td>{cells}</tr>\n")
}

fn tone_class(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Positive => "positive",
        StatusTone::Warning => "warning",
        StatusTone::Danger => "danger",
    }
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn inline_css() -> &'static str {
    r#"
@page {
    size: A4 landscape;
    margin: 12mm;
}

* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    font-size: 10px;
    color: #111827;
    background: #ffffff;
}

.page {
    page-break-after: always;
    padding: 8mm 0;
}

.page:last-child {
    page-break-after: auto;
}

header {
    display: flex;
    justify-content: space-between;
    align-items: baseline;
    border-bottom: 2px solid #e5e7eb;
    margin-bottom: 4mm;
    padding-bottom: 2mm;
}

h1 {
    font-size: 16px;
}

.filters {
    color: #6b7280;
}

table {
    width: 100%;
    border-collapse: collapse;
}

th, td {
    border: 1px solid #e5e7eb;
    padding: 2px 5px;
    text-align: center;
}

th {
    background: #f3f4f6;
    font-weight: 600;
}

td.index {
    color: #6b7280;
}

.status {
    border-radius: 3px;
    padding: 1px 4px;
    font-weight: 600;
}

.status.positive {
    background: #dcfce7;
    color: #166534;
}

.status.warning {
    background: #fef9c3;
    color: #854d0e;
}

.status.danger {
    background: #fee2e2;
    color: #991b1b;
}

.empty {
    color: #6b7280;
    padding: 8mm 0;
}

footer {
    display: flex;
    justify-content: space-between;
    color: #9ca3af;
    border-top: 1px solid #e5e7eb;
    margin-top: 4mm;
    padding-top: 2mm;
}
"#
}
