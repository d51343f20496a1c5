use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dplot::PlotKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "dplot", about = "Render pgfplots figures from plain data", version)]
pub struct Cli {
    /// Plot description (.json) or a two-column data table. Read from stdin when omitted.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Directory the artifacts are written to (default: DPLOT_OUTPUT_DIR or the current directory).
    #[arg(short = 'o', long = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// Write the LaTeX source.
    #[arg(long)]
    pub tex: bool,

    /// Write a PDF (the default when no output type is given).
    #[arg(long)]
    pub pdf: bool,

    /// Write an SVG (needs pdf2svg, optimized with scour when installed).
    #[arg(long)]
    pub svg: bool,

    /// Print the generated LaTeX to stdout instead of compiling.
    #[arg(long, conflicts_with_all = ["tex", "pdf", "svg"])]
    pub print: bool,

    /// Plot kind for table input; overrides the kind of a JSON description.
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,

    /// Artifact file stem.
    #[arg(long)]
    pub name: Option<String>,

    /// Figure title.
    #[arg(long)]
    pub title: Option<String>,

    /// Label of the x axis (LaTeX allowed).
    #[arg(long = "x-label")]
    pub x_label: Option<String>,

    /// Label of the y axis (LaTeX allowed).
    #[arg(long = "y-label")]
    pub y_label: Option<String>,

    /// Legend entry of the series.
    #[arg(long)]
    pub label: Option<String>,

    /// Logarithmic x axis.
    #[arg(long = "log-x")]
    pub log_x: bool,

    /// Logarithmic y axis.
    #[arg(long = "log-y")]
    pub log_y: bool,

    /// Seconds each external program may run (default: DPLOT_COMPILE_TIMEOUT or 60).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Log verbosity level.
    #[arg(long = "log-level", value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Line,
    Scatter,
}

impl From<KindArg> for PlotKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Line => PlotKind::Line,
            KindArg::Scatter => PlotKind::Scatter,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
