//! Plot descriptions for the common cases: one line or scatter series on a
//! bottom/left axis pair.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::compiler::Toolchain;
use crate::error::{PlotError, PlotResult};
use crate::export::ExportType;
use crate::figure::{AxisSetup, Data, Figure, LegendSetup, LineSetup, LineStyle, Marker, XSide, YSide};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotKind {
    #[default]
    Line,
    Scatter,
}

impl PlotKind {
    fn line_setup(&self) -> LineSetup {
        match self {
            PlotKind::Line => LineSetup::default(),
            PlotKind::Scatter => LineSetup::default()
                .line_style(LineStyle::None)
                .marker(Marker::Dot),
        }
    }
}

fn default_name() -> String {
    "plot".to_string()
}

/// A single series with optional labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSpec {
    /// File stem of the artifacts.
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub kind: PlotKind,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
    /// Legend entry of the series.
    ///
    /// A single unlabeled series would only get its index as legend text,
    /// so the legend is left out entirely when this is `None`. Build a
    /// [`Figure`] directly to get a legend without labels.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub log_x: bool,
    #[serde(default)]
    pub log_y: bool,
}

impl PlotSpec {
    pub fn new(kind: PlotKind, x: Vec<f64>, y: Vec<f64>) -> Self {
        PlotSpec {
            name: default_name(),
            kind,
            x,
            y,
            title: None,
            x_label: None,
            y_label: None,
            label: None,
            log_x: false,
            log_y: false,
        }
    }

    pub fn from_points(kind: PlotKind, points: &[(f64, f64)]) -> Self {
        let (x, y) = points.iter().copied().unzip();
        Self::new(kind, x, y)
    }

    /// Parse a JSON description.
    pub fn from_json(text: &str) -> PlotResult<Self> {
        serde_json::from_str(text).map_err(|e| PlotError::InvalidData(format!("invalid plot description: {}", e)))
    }

    /// Parse a two-column table of x and y values separated by whitespace,
    /// tabs or commas. Blank lines and lines starting with `#` are skipped,
    /// as is a first line that is not numeric (a header).
    pub fn from_table(kind: PlotKind, text: &str) -> PlotResult<Self> {
        let (mut x, mut y) = (Vec::new(), Vec::new());
        let rows = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        for (n, (lineno, line)) in rows.enumerate() {
            let fields: Vec<&str> = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|f| !f.is_empty())
                .collect();
            let parsed: Option<Vec<f64>> = fields.iter().map(|f| f.parse::<f64>().ok()).collect();
            match parsed {
                Some(values) if values.len() == 2 => {
                    x.push(values[0]);
                    y.push(values[1]);
                }
                None if n == 0 => continue,
                Some(values) => {
                    return Err(PlotError::InvalidData(format!(
                        "line {}: expected 2 columns, found {}",
                        lineno,
                        values.len()
                    )))
                }
                None => {
                    return Err(PlotError::InvalidData(format!(
                        "line {}: non-numeric value in '{}'",
                        lineno, line
                    )))
                }
            }
        }
        Ok(Self::new(kind, x, y))
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = Some(x_label.into());
        self.y_label = Some(y_label.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Build the full figure model for this plot.
    pub fn to_figure(&self) -> PlotResult<Figure> {
        let mut fig = Figure::new(self.name.clone());
        if let Some(title) = &self.title {
            fig = fig.title(title.clone());
        }
        if self.label.is_none() {
            fig = fig.legend(LegendSetup::hidden());
        }
        fig.set_axis(
            XSide::Bottom,
            AxisSetup::new(self.x_label.clone().unwrap_or_default()).log(self.log_x),
        )
        .set_axis(
            YSide::Left,
            AxisSetup::new(self.y_label.clone().unwrap_or_default()).log(self.log_y),
        );

        let data = Data::new(XSide::Bottom, YSide::Left, &self.x, &self.y)?
            .label(self.label.clone().unwrap_or_default())
            .line(self.kind.line_setup());
        fig.add(data);
        Ok(fig)
    }

    /// Generate the LaTeX document for this plot.
    pub fn to_markup(&self) -> PlotResult<String> {
        self.to_figure()?.to_latex()
    }
}

/// Render `spec` to `<out_dir>/<name>.pdf` and return the PDF path.
pub async fn render(spec: &PlotSpec, out_dir: impl AsRef<Path>, toolchain: &Toolchain) -> PlotResult<PathBuf> {
    let fig = spec.to_figure()?;
    let mut paths = fig.export(out_dir, &[ExportType::Pdf], toolchain).await?;
    paths.pop().ok_or(PlotError::NoExportType)
}
