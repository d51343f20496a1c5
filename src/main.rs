mod cli;

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use dplot::{Config, ExportType, PlotKind, PlotSpec, Toolchain};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.to_level_filter())
        .format_module_path(false)
        .init();

    let cfg = Config::load();

    // Input: a file argument, or piped stdin
    let text = match args.input.as_deref() {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            if io::stdin().is_terminal() {
                bail!("Provide an input file or pipe data via stdin");
            }
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let kind: PlotKind = args.kind.map(Into::into).unwrap_or_default();
    let mut spec = if is_json(args.input.as_deref(), &text) {
        let mut spec = PlotSpec::from_json(&text)?;
        if let Some(kind) = args.kind {
            spec.kind = kind.into();
        }
        spec
    } else {
        let mut spec = PlotSpec::from_table(kind, &text)?;
        if let Some(stem) = args.input.as_deref().and_then(Path::file_stem) {
            spec.name = stem.to_string_lossy().into_owned();
        }
        spec
    };

    // Flags override whatever the description says
    if let Some(name) = args.name {
        spec.name = name;
    }
    if args.title.is_some() {
        spec.title = args.title;
    }
    if args.x_label.is_some() {
        spec.x_label = args.x_label;
    }
    if args.y_label.is_some() {
        spec.y_label = args.y_label;
    }
    if args.label.is_some() {
        spec.label = args.label;
    }
    spec.log_x |= args.log_x;
    spec.log_y |= args.log_y;

    if args.print {
        print!("{}", spec.to_markup()?);
        return Ok(());
    }

    let mut types = Vec::new();
    if args.tex {
        types.push(ExportType::Latex);
    }
    if args.pdf || !(args.tex || args.svg) {
        types.push(ExportType::Pdf);
    }
    if args.svg {
        types.push(ExportType::Svg);
    }

    let mut toolchain = Toolchain::from_config(&cfg);
    if let Some(secs) = args.timeout {
        toolchain = toolchain.with_timeout(Duration::from_secs(secs));
    }
    let out_dir = args.out_dir.unwrap_or_else(|| cfg.output_dir());

    let paths = spec.to_figure()?.export(&out_dir, &types, &toolchain).await?;
    for path in paths {
        println!("{}", path.display().green());
    }
    Ok(())
}

fn is_json(path: Option<&Path>, text: &str) -> bool {
    match path.and_then(Path::extension) {
        Some(ext) => ext.eq_ignore_ascii_case("json"),
        None => text.trim_start().starts_with('{'),
    }
}
