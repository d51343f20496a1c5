//! External toolchain invocation: pdflatex, pdf2svg and scour.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::{process::Command, time::timeout};

use crate::config::Config;
use crate::document::{MarkupDocument, JOB_NAME};
use crate::error::{PlotError, PlotResult};

/// Lines of compiler output kept in a [`PlotError::CompilationFailed`].
const DIAGNOSTIC_LINES: usize = 40;

/// The external programs and how long each may run.
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub pdflatex: String,
    pub pdf2svg: String,
    pub scour: String,
    /// pdflatex runs per build, references (legend entries) need two.
    pub passes: u32,
    /// Upper bound for every single process.
    pub timeout: Duration,
}

impl Default for Toolchain {
    fn default() -> Self {
        Toolchain {
            pdflatex: "pdflatex".into(),
            pdf2svg: "pdf2svg".into(),
            scour: "scour".into(),
            passes: 2,
            timeout: Duration::from_secs(60),
        }
    }
}

impl Toolchain {
    pub fn from_config(cfg: &Config) -> Self {
        let defaults = Toolchain::default();
        Toolchain {
            pdflatex: cfg.get("DPLOT_PDFLATEX").unwrap_or(defaults.pdflatex),
            pdf2svg: cfg.get("DPLOT_PDF2SVG").unwrap_or(defaults.pdf2svg),
            scour: cfg.get("DPLOT_SCOUR").unwrap_or(defaults.scour),
            passes: cfg
                .get_u64("DPLOT_LATEX_PASSES")
                .map(|n| n.clamp(1, 5) as u32)
                .unwrap_or(defaults.passes),
            timeout: cfg
                .get_u64("DPLOT_COMPILE_TIMEOUT")
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Outcome of a successful LaTeX build.
#[derive(Debug, Clone)]
pub struct CompilationResult {
    /// Exit code of the last pass.
    pub status: Option<i32>,
    /// The produced PDF, inside the build directory.
    pub artifact: PathBuf,
    /// Combined stdout/stderr of the last pass.
    pub log: String,
}

struct ProcessOutput {
    success: bool,
    status: Option<i32>,
    log: String,
}

async fn run<I, S>(program: &str, args: I, cwd: &Path, limit: Duration) -> PlotResult<ProcessOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    debug!("running {:?} in {}", cmd.as_std(), cwd.display());

    let child = cmd.spawn().map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PlotError::CompilerNotFound {
            program: program.to_string(),
        },
        _ => PlotError::io(program, e),
    })?;

    let out = timeout(limit, child.wait_with_output())
        .await
        .map_err(|_| PlotError::CompilerTimeout {
            program: program.to_string(),
            timeout: limit,
        })?
        .map_err(|e| PlotError::io(program, e))?;

    let mut log = String::from_utf8_lossy(&out.stdout).into_owned();
    if !out.stderr.is_empty() {
        if !log.is_empty() && !log.ends_with('\n') {
            log.push('\n');
        }
        log.push_str(&String::from_utf8_lossy(&out.stderr));
    }
    Ok(ProcessOutput {
        success: out.status.success(),
        status: out.status.code(),
        log,
    })
}

/// The part of a compiler log worth showing: from the first TeX error
/// (`! ...`) on, or the tail when there is none.
pub fn diagnostics(log: &str) -> String {
    let lines: Vec<&str> = log.lines().collect();
    let start = match lines.iter().position(|l| l.starts_with('!')) {
        Some(first_error) => first_error,
        None => lines.len().saturating_sub(DIAGNOSTIC_LINES),
    };
    lines[start..]
        .iter()
        .take(DIAGNOSTIC_LINES)
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

fn non_empty_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file() && m.len() > 0).unwrap_or(false)
}

/// Run pdflatex over `doc` and return the produced PDF.
///
/// Every pass must exit successfully and the PDF must exist and be
/// non-empty afterwards; anything else is reported as
/// [`PlotError::CompilationFailed`] with the relevant part of the log.
pub async fn compile_pdf(doc: &MarkupDocument, toolchain: &Toolchain) -> PlotResult<CompilationResult> {
    let passes = toolchain.passes.max(1);
    let args = [
        "-interaction=nonstopmode".to_string(),
        "-halt-on-error".to_string(),
        format!("-jobname={}", JOB_NAME),
        format!("{}.tex", JOB_NAME),
    ];

    let mut last = None;
    for pass in 1..=passes {
        info!("{} pass {}/{}", toolchain.pdflatex, pass, passes);
        let out = run(&toolchain.pdflatex, &args, doc.dir(), toolchain.timeout).await?;
        debug!("{} output:\n{}", toolchain.pdflatex, out.log);
        if !out.success {
            return Err(PlotError::CompilationFailed {
                program: toolchain.pdflatex.clone(),
                status: out.status,
                reason: format!("pass {} of {} failed", pass, passes),
                log: diagnostics(&out.log),
            });
        }
        last = Some(out);
    }

    let artifact = doc.sibling("pdf");
    let (status, log) = last.map(|o| (o.status, o.log)).unwrap_or_default();
    if !non_empty_file(&artifact) {
        return Err(PlotError::CompilationFailed {
            program: toolchain.pdflatex.clone(),
            status,
            reason: format!("no PDF was produced at {}", artifact.display()),
            log: diagnostics(&log),
        });
    }
    Ok(CompilationResult { status, artifact, log })
}

/// Convert `pdf` to an SVG at `dest`, optimized by scour when installed.
pub async fn convert_svg(pdf: &Path, dest: &Path, toolchain: &Toolchain) -> PlotResult<()> {
    let cwd = pdf.parent().unwrap_or_else(|| Path::new("."));
    let raw = pdf.with_extension("raw.svg");

    info!("converting {} to SVG", pdf.display());
    let out = run(&toolchain.pdf2svg, [pdf.as_os_str(), raw.as_os_str()], cwd, toolchain.timeout).await?;
    if !out.success || !non_empty_file(&raw) {
        return Err(PlotError::CompilationFailed {
            program: toolchain.pdf2svg.clone(),
            status: out.status,
            reason: "no SVG was produced".into(),
            log: diagnostics(&out.log),
        });
    }

    let scoured = run(
        &toolchain.scour,
        [OsStr::new("-i"), raw.as_os_str(), OsStr::new("-o"), dest.as_os_str()],
        cwd,
        toolchain.timeout,
    )
    .await;
    match scoured {
        Ok(out) if out.success && non_empty_file(dest) => Ok(()),
        Ok(out) => Err(PlotError::CompilationFailed {
            program: toolchain.scour.clone(),
            status: out.status,
            reason: "SVG optimization failed".into(),
            log: diagnostics(&out.log),
        }),
        Err(PlotError::CompilerNotFound { program }) => {
            warn!("{} not found, skipping SVG optimization", program);
            fs::copy(&raw, dest).map_err(|e| PlotError::io(dest, e))?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}
