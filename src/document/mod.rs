//! Document assembly: markup written into a build directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::TempDir;

use crate::error::{PlotError, PlotResult};

/// File stem of the document inside a build directory; the compiler's
/// `-jobname`, so every intermediate file shares it.
pub const JOB_NAME: &str = "dplot";

/// Generated LaTeX source and where it was written.
#[derive(Debug, Clone)]
pub struct MarkupDocument {
    pub content: String,
    pub path: PathBuf,
}

impl MarkupDocument {
    /// Write `content` as `<dir>/dplot.tex`.
    pub fn write(dir: &Path, content: String) -> PlotResult<Self> {
        let path = dir.join(format!("{}.tex", JOB_NAME));
        fs::write(&path, &content).map_err(|e| PlotError::io(&path, e))?;
        debug!("wrote {} bytes of markup to {}", content.len(), path.display());
        Ok(MarkupDocument { content, path })
    }

    /// Directory holding the document, where the compiler runs.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Path of an artifact the compiler produces next to the document.
    pub fn sibling(&self, extension: &str) -> PathBuf {
        self.path.with_extension(extension)
    }
}

/// Create a fresh private directory for one build; it is removed on drop.
pub fn build_dir() -> PlotResult<TempDir> {
    tempfile::Builder::new()
        .prefix("dplot-")
        .tempdir()
        .map_err(|e| PlotError::io(std::env::temp_dir(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_document_into_build_dir() {
        let dir = build_dir().unwrap();
        let doc = MarkupDocument::write(dir.path(), "\\begin{document}\\end{document}\n".into()).unwrap();
        assert_eq!(doc.path, dir.path().join("dplot.tex"));
        assert_eq!(doc.dir(), dir.path());
        assert_eq!(doc.sibling("pdf"), dir.path().join("dplot.pdf"));
        assert_eq!(fs::read_to_string(&doc.path).unwrap(), doc.content);
    }

    #[test]
    fn reports_unwritable_location() {
        let err = MarkupDocument::write(Path::new("/nonexistent/dplot-build"), String::new()).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Filesystem);
        assert!(err.to_string().contains("/nonexistent/dplot-build/dplot.tex"));
    }
}
