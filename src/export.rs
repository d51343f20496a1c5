//! Figure export: markup, compilation and artifact placement.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::compiler::{self, Toolchain};
use crate::document::{self, MarkupDocument};
use crate::error::{PlotError, PlotResult};
use crate::figure::Figure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportType {
    Latex,
    Pdf,
    Svg,
}

impl ExportType {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportType::Latex => "tex",
            ExportType::Pdf => "pdf",
            ExportType::Svg => "svg",
        }
    }
}

impl Figure {
    /// Write the requested artifacts as `<out_dir>/<name>.<ext>` and return
    /// their paths in the order of `types`.
    ///
    /// Every artifact is first produced in a temporary build directory and
    /// only copied to `out_dir` once all requested steps have succeeded, so a
    /// failed export leaves nothing behind. Intermediate files (the PDF an SVG
    /// is converted from, LaTeX aux files) never leave the build directory.
    pub async fn export(
        &self,
        out_dir: impl AsRef<Path>,
        types: &[ExportType],
        toolchain: &Toolchain,
    ) -> PlotResult<Vec<PathBuf>> {
        if types.is_empty() {
            return Err(PlotError::NoExportType);
        }
        if self.name.is_empty() || self.name.contains(['/', '\\']) {
            return Err(PlotError::InvalidConfig(format!(
                "figure name '{}' is not a valid file stem",
                self.name
            )));
        }

        // Generate before touching the filesystem so bad input leaves nothing behind.
        let markup = self.to_latex()?;

        let build = document::build_dir()?;
        let doc = MarkupDocument::write(build.path(), markup)?;
        let mut staged: Vec<(ExportType, PathBuf)> = Vec::new();
        if types.contains(&ExportType::Latex) {
            staged.push((ExportType::Latex, doc.path.clone()));
        }
        if types.contains(&ExportType::Pdf) || types.contains(&ExportType::Svg) {
            let result = compiler::compile_pdf(&doc, toolchain).await?;
            if types.contains(&ExportType::Svg) {
                let svg = doc.sibling("svg");
                compiler::convert_svg(&result.artifact, &svg, toolchain).await?;
                staged.push((ExportType::Svg, svg));
            }
            if types.contains(&ExportType::Pdf) {
                staged.push((ExportType::Pdf, result.artifact));
            }
        }

        let out_dir = out_dir.as_ref();
        fs::create_dir_all(out_dir).map_err(|e| PlotError::io(out_dir, e))?;
        let target = |ty: ExportType| out_dir.join(format!("{}.{}", self.name, ty.extension()));

        let mut placed = Vec::with_capacity(staged.len());
        for (ty, src) in staged {
            let dest = target(ty);
            if let Err(e) = fs::copy(&src, &dest) {
                for path in &placed {
                    let _ = fs::remove_file(path);
                }
                return Err(PlotError::io(&dest, e));
            }
            info!("wrote {}", dest.display());
            placed.push(dest);
        }

        Ok(types.iter().map(|ty| target(*ty)).collect())
    }
}
