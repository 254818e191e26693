//! Terminal rendering: metric cards, progress bars, status breakdowns,
//! and the paginated data table.

use std::time::Duration;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};

use painel_metrics::{ColumnMetric, NamedMetric, TabMetrics};
use painel_model::{FeedRegistry, StatusTone, Summary, status_tone};
use painel_table::{Page, is_sortable};

use crate::types::FeedOverview;

const BAR_WIDTH: usize = 24;

/// Spinner shown while a feed request is in flight.
pub fn fetch_spinner(label: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Carregando dados de {label}..."));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Error panel with a retry hint, shown when a feed cannot be loaded.
pub fn print_error_panel(message: &str) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(64);
    table.add_row(vec![
        Cell::new(message)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![dim_cell(
        "Verifique a conexão e execute o comando novamente.",
    )]);
    eprintln!("{table}");
}

/// Headline cards: one labeled column per metric, the first being the
/// plain total.
pub fn print_metric_cards(cards: &[NamedMetric]) {
    if cards.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(cards.iter().map(|card| header_cell(&card.label)));
    apply_card_style(&mut table);
    table.add_row(cards.iter().enumerate().map(|(index, card)| {
        let value = if index == 0 {
            card.value.count.to_string()
        } else {
            format!("{} ({}%)", card.value.count, card.value.percent())
        };
        Cell::new(value).add_attribute(Attribute::Bold)
    }));
    println!("{table}");
}

/// Indicator block: one progress bar per metric.
pub fn print_indicators(title: &str, indicators: &[NamedMetric]) {
    if indicators.is_empty() {
        return;
    }
    println!();
    println!("{title}");
    let width = indicators
        .iter()
        .map(|metric| metric.label.chars().count())
        .max()
        .unwrap_or(0);
    for metric in indicators {
        let percent = metric.value.percent();
        println!(
            "  {label:<width$}  {bar}  {count} / {total} ({percent}%)",
            label = metric.label,
            bar = progress_bar(percent),
            count = metric.value.count,
            total = metric.value.total,
        );
    }
}

/// Status breakdown block with tone-colored labels.
pub fn print_status_breakdown(title: &str, status: &[NamedMetric]) {
    if status.is_empty() {
        return;
    }
    println!();
    println!("{title}");
    let mut table = Table::new();
    table.set_header(vec![header_cell("Status"), header_cell("Registros")]);
    apply_block_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for metric in status {
        table.add_row(vec![
            toned_cell(&metric.label),
            Cell::new(metric.value.count),
        ]);
    }
    println!("{table}");
}

/// Per-column metrics for categories that carry a column window.
pub fn print_column_metrics(metrics: &[ColumnMetric]) {
    if metrics.is_empty() {
        return;
    }
    println!();
    println!("Indicadores de Acompanhamento");
    let width = metrics
        .iter()
        .map(|metric| metric.header.chars().count())
        .max()
        .unwrap_or(0);
    for metric in metrics {
        let headline = metric.headline();
        println!(
            "  {label:<width$}  {bar}  {count} / {total} ({percent}%)",
            label = metric.header,
            bar = progress_bar(headline.percent()),
            count = headline.count,
            total = headline.total,
            percent = headline.percent(),
        );
    }
}

/// Spreadsheet summary rows, when the feed carried any.
pub fn print_summary_map(summary: &Summary) {
    if summary.is_empty() {
        return;
    }
    println!();
    println!("Resumo da planilha");
    let mut table = Table::new();
    apply_block_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, value) in summary.iter() {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    println!("{table}");
}

/// The paginated data table. The row-number column renders a running
/// index; status values get tone colors.
pub fn print_data_table(headers: &[&String], page: &Page<'_>) {
    println!();
    println!("Dados Detalhados");
    let mut table = Table::new();
    table.set_header(headers.iter().map(|header| {
        if is_sortable(header.as_str()) {
            header_cell(header.as_str())
        } else {
            header_cell("Nº")
        }
    }));
    apply_data_style(&mut table);

    if page.is_empty() {
        println!("{table}");
        println!("Nenhum registro encontrado. Limpe a busca ou ajuste os filtros.");
        return;
    }

    for (offset, record) in page.records.iter().enumerate() {
        let row_number = page.start_index + offset + 1;
        table.add_row(headers.iter().map(|header| {
            if is_sortable(header.as_str()) {
                toned_cell(record.get(header.as_str()))
            } else {
                dim_cell(row_number)
            }
        }));
    }
    println!("{table}");
    println!(
        "Mostrando {}-{} de {} registros · Página {} de {}",
        page.start_index + 1,
        page.end_index(),
        page.total,
        page.page,
        page.page_count,
    );
}

/// Category table for `feeds`.
pub fn print_feeds_table(registry: &FeedRegistry) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Categoria"),
        header_cell("Descrição"),
        header_cell("Feed"),
    ]);
    apply_block_style(&mut table);
    for (category, url) in registry.iter() {
        table.add_row(vec![
            Cell::new(category.key())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(category.label()),
            dim_cell(url),
        ]);
    }
    println!("{table}");
}

/// Overview table for `summary`, with a bold TOTAL row.
pub fn print_overview(rows: &[FeedOverview]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Categoria"),
        header_cell("Registros"),
        header_cell("Equipes"),
        header_cell("Em dia"),
        header_cell("Pendentes"),
        header_cell("Falha"),
    ]);
    apply_block_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_records = 0usize;
    let mut total_positive = 0usize;
    let mut total_negative = 0usize;
    for row in rows {
        total_records += row.records;
        total_positive += row.positive;
        total_negative += row.negative;
        table.add_row(vec![
            Cell::new(row.category.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(row.records),
            Cell::new(row.teams),
            count_cell(row.positive, Color::Green),
            count_cell(row.negative, Color::Yellow),
            match &row.error {
                Some(message) => Cell::new(message).fg(Color::Red),
                None => dim_cell("-"),
            },
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(total_positive, Color::Green).add_attribute(Attribute::Bold),
        count_cell(total_negative, Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

/// Renders the whole indicator section for one category view.
pub fn print_tab_metrics(metrics: &TabMetrics, status_title: &str) {
    print_metric_cards(&metrics.cards);
    print_indicators("Indicadores", &metrics.indicators);
    print_status_breakdown(status_title, &metrics.status);
}

/// Unicode block progress bar, e.g. `██████░░░░` for 60%.
fn progress_bar(percent: u32) -> String {
    let filled = (percent as usize * BAR_WIDTH).div_ceil(100).min(BAR_WIDTH);
    let mut bar = String::with_capacity(BAR_WIDTH * 3);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..BAR_WIDTH {
        bar.push('░');
    }
    bar
}

fn apply_card_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
    for index in 0..table.column_count() {
        align_column(table, index, CellAlignment::Center);
    }
}

fn apply_block_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_data_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(200);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

/// Cell colored by the status vocabulary, plain otherwise.
fn toned_cell(value: &str) -> Cell {
    match status_tone(value) {
        Some(StatusTone::Positive) => Cell::new(value).fg(Color::Green),
        Some(StatusTone::Warning) => Cell::new(value).fg(Color::Yellow),
        Some(StatusTone::Danger) => Cell::new(value)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        None => Cell::new(value),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
