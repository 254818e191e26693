//! CLI argument definitions for the APS indicators panel.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use painel_model::DEFAULT_PAGE_SIZE;

#[derive(Parser)]
#[command(
    name = "painel-aps",
    version,
    about = "Painel de indicadores de saúde da Atenção Primária",
    long_about = "Painel de indicadores de saúde da Atenção Primária.\n\n\
                  Busca as planilhas publicadas de cada categoria clínica,\n\
                  calcula os indicadores e apresenta tabelas filtráveis,\n\
                  além de exportar relatórios em HTML e CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// JSON file mapping category keys to feed URLs, overriding the
    /// builtin table.
    #[arg(long = "feeds-file", value_name = "PATH", global = true)]
    pub feeds_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the clinical categories and their feed URLs.
    Feeds,

    /// Fetch one category's feed and render its indicators and table.
    Show(ShowArgs),

    /// Export the filtered view as an HTML report and a CSV extract.
    Export(ExportArgs),

    /// Fetch every feed and print a single overview table.
    Summary,
}

/// Filter flags shared by `show` and `export`.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Free-text search across every column.
    #[arg(long)]
    pub search: Option<String>,

    /// Restrict to one team.
    #[arg(long)]
    pub equipe: Option<String>,

    /// Restrict to one micro-area.
    #[arg(long)]
    pub microarea: Option<String>,

    /// Restrict by best-practices status (e.g. REALIZADAS, FALTANDO).
    #[arg(long = "status")]
    pub status_boas_praticas: Option<String>,

    /// Restrict by vaccination status (e.g. REALIZADAS, ATRASADAS).
    #[arg(long = "status-vacinas")]
    pub status_vacinas: Option<String>,

    /// Restrict to one reporting quadrimester.
    #[arg(long)]
    pub quadrimestre: Option<String>,

    /// Restrict by priority marker.
    #[arg(long)]
    pub prioridade: Option<String>,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Category key (see `painel-aps feeds`).
    #[arg(value_name = "CATEGORIA")]
    pub category: String,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Sort by this column (ascending unless --desc).
    #[arg(long, value_name = "COLUNA")]
    pub sort: Option<String>,

    /// Sort descending.
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Table page to display (1-based).
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Records per page.
    #[arg(long = "page-size", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Skip the data table and show only the indicator blocks.
    #[arg(long = "no-table")]
    pub no_table: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Category key (see `painel-aps feeds`).
    #[arg(value_name = "CATEGORIA")]
    pub category: String,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Directory the report files are written to.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Which files to write.
    #[arg(long, value_enum, default_value = "both")]
    pub format: ExportFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Html,
    Csv,
    Both,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
