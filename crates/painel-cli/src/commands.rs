use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use tracing::{error, info, info_span, warn};

use painel_ingest::FeedClient;
use painel_metrics::{DEFAULT_RULES, column_metrics, derive_metrics, status_column, status_counts};
use painel_model::{
    Dataset, FeedCategory, FeedRegistry, FilterState, PageRequest, Record, SortState, ViewState,
};
use painel_table::{
    ExportFormat, ExportRequest, display_headers, export_view, filter_options, filter_summary,
    project_view,
};

use crate::cli::{ExportArgs, ExportFormatArg, FilterArgs, ShowArgs};
use crate::render;
use crate::types::FeedOverview;

/// Builds the feed registry, applying the optional JSON override file.
pub fn load_registry(feeds_file: Option<&Path>) -> Result<FeedRegistry> {
    let Some(path) = feeds_file else {
        return Ok(FeedRegistry::builtin());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("ler arquivo de feeds: {}", path.display()))?;
    let overrides: BTreeMap<String, String> = serde_json::from_str(&text)
        .with_context(|| format!("interpretar arquivo de feeds: {}", path.display()))?;
    let registry = FeedRegistry::builtin()
        .with_overrides(&overrides)
        .context("aplicar arquivo de feeds")?;
    info!(path = %path.display(), entries = overrides.len(), "feeds sobrescritos");
    Ok(registry)
}

pub fn run_feeds(registry: &FeedRegistry) -> Result<()> {
    render::print_feeds_table(registry);
    Ok(())
}

pub fn run_show(args: &ShowArgs, registry: &FeedRegistry) -> Result<i32> {
    let category = parse_category(&args.category)?;
    let span = info_span!("feed", category = %category);
    let _guard = span.enter();

    let Some(dataset) = fetch_dataset(category, registry)? else {
        return Ok(1);
    };

    let state = view_state(&args.filters, args.sort.as_deref(), args.desc, args.page, args.page_size);
    let projected = project_view(&dataset.records, &state);

    println!("{}", category.label());
    println!("{}", filter_summary(&state.filter));

    // Headline metrics follow the filtered subset, not the full dataset.
    let metrics = derive_metrics(category, &projected.filtered);
    render::print_tab_metrics(&metrics, status_title(category));
    render::print_summary_map(&dataset.summary);

    if let Some(range) = category.column_range() {
        let columns = column_metrics(&projected.filtered, &dataset.headers, range, DEFAULT_RULES);
        render::print_column_metrics(&columns);
    }

    if !args.no_table {
        let headers = display_headers(&dataset.headers, &state.filter);
        render::print_data_table(&headers, &projected.page);
    }
    Ok(0)
}

pub fn run_export(args: &ExportArgs, registry: &FeedRegistry) -> Result<i32> {
    let category = parse_category(&args.category)?;
    let span = info_span!("feed", category = %category);
    let _guard = span.enter();

    let Some(dataset) = fetch_dataset(category, registry)? else {
        return Ok(1);
    };

    let filter = filter_state(&args.filters);
    let state = ViewState {
        filter,
        ..ViewState::default()
    };
    let projected = project_view(&dataset.records, &state);

    let request = ExportRequest {
        category_key: category.key(),
        title: category.label(),
        headers: &dataset.headers,
        filter: &state.filter,
        output_dir: &args.output_dir,
        format: export_format(args.format),
        date: Local::now().date_naive(),
    };
    let exported = export_view(&request, &projected.filtered)
        .with_context(|| format!("exportar {}", category.key()))?;

    if let Some(path) = &exported.html {
        println!("Relatório HTML: {}", path.display());
    }
    if let Some(path) = &exported.csv {
        println!("Extrato CSV: {}", path.display());
    }
    println!(
        "{} registros exportados ({})",
        projected.filtered_count(),
        filter_summary(&state.filter),
    );
    Ok(0)
}

pub fn run_summary(registry: &FeedRegistry) -> Result<i32> {
    let client = FeedClient::new().context("criar cliente HTTP")?;
    let mut rows = Vec::new();
    let mut failures = 0;
    for category in FeedCategory::ALL {
        let span = info_span!("feed", category = %category);
        let _guard = span.enter();
        let spinner = render::fetch_spinner(category.label());
        let result = client.load_dataset(registry.url(category));
        spinner.finish_and_clear();
        match result {
            Ok(dataset) => {
                let records: Vec<&Record> = dataset.records.iter().collect();
                let (positive, negative) = status_counts(&records, status_column(category));
                info!(records = records.len(), "feed carregado");
                rows.push(FeedOverview {
                    category,
                    records: records.len(),
                    teams: filter_options(&dataset.records, "EQUIPE").len(),
                    positive,
                    negative,
                    error: None,
                });
            }
            Err(ingest_error) => {
                error!(%ingest_error, "falha ao carregar feed");
                failures += 1;
                rows.push(FeedOverview {
                    category,
                    records: 0,
                    teams: 0,
                    positive: 0,
                    negative: 0,
                    error: Some(ingest_error.user_message().to_string()),
                });
            }
        }
    }
    render::print_overview(&rows);
    Ok(if failures > 0 { 1 } else { 0 })
}

/// Fetches one dataset, rendering the error panel on failure. `Ok(None)`
/// means the failure was reported to the user and the command should exit
/// nonzero.
fn fetch_dataset(category: FeedCategory, registry: &FeedRegistry) -> Result<Option<Dataset>> {
    let client = FeedClient::new().context("criar cliente HTTP")?;
    let spinner = render::fetch_spinner(category.label());
    let result = client.load_dataset(registry.url(category));
    spinner.finish_and_clear();
    match result {
        Ok(dataset) => {
            info!(records = dataset.record_count(), "feed carregado");
            Ok(Some(dataset))
        }
        Err(ingest_error) => {
            error!(%ingest_error, "falha ao carregar feed");
            render::print_error_panel(ingest_error.user_message());
            Ok(None)
        }
    }
}

fn parse_category(key: &str) -> Result<FeedCategory> {
    FeedCategory::from_key(key).ok_or_else(|| {
        let known: Vec<&str> = FeedCategory::ALL.iter().map(|c| c.key()).collect();
        anyhow!(
            "categoria desconhecida: {key} (disponíveis: {})",
            known.join(", ")
        )
    })
}

fn filter_state(args: &FilterArgs) -> FilterState {
    FilterState {
        search: clean(args.search.as_deref()),
        equipe: clean(args.equipe.as_deref()),
        microarea: clean(args.microarea.as_deref()),
        status_boas_praticas: clean(args.status_boas_praticas.as_deref()),
        status_vacinas: clean(args.status_vacinas.as_deref()),
        quadrimestre: clean(args.quadrimestre.as_deref()),
        prioridade: clean(args.prioridade.as_deref()),
    }
}

fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn view_state(
    filters: &FilterArgs,
    sort: Option<&str>,
    descending: bool,
    page: usize,
    page_size: usize,
) -> ViewState {
    let sort = match sort {
        Some(column) if descending => SortState::descending(column),
        Some(column) => SortState::ascending(column),
        None => SortState::default(),
    };
    if let Some(key) = &sort.key {
        if !painel_table::is_sortable(&key.column) {
            warn!(column = %key.column, "coluna não ordenável; ordenação ignorada");
        }
    }
    ViewState {
        filter: filter_state(filters),
        sort,
        page: PageRequest {
            page: page.max(1),
            page_size: page_size.max(1),
        },
    }
}

fn export_format(arg: ExportFormatArg) -> ExportFormat {
    match arg {
        ExportFormatArg::Html => ExportFormat::Html,
        ExportFormatArg::Csv => ExportFormat::Csv,
        ExportFormatArg::Both => ExportFormat::Both,
    }
}

fn status_title(category: FeedCategory) -> &'static str {
    match category {
        FeedCategory::Vacinas => "Status Vacinal",
        _ => "Status das Boas Práticas",
    }
}
