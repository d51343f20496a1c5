//! Data series and their line styling.

use super::axis::{XSide, YSide};
use super::style::{Color, LineStyle, Marker};
use crate::error::{PlotError, PlotResult};

/// Types that can be converted into a column of plot values.
pub trait IntoPlotData {
    fn into_plot_data(self) -> Vec<f64>;
}

impl IntoPlotData for Vec<f64> {
    fn into_plot_data(self) -> Vec<f64> {
        self
    }
}

impl IntoPlotData for &Vec<f64> {
    fn into_plot_data(self) -> Vec<f64> {
        self.clone()
    }
}

impl IntoPlotData for &[f64] {
    fn into_plot_data(self) -> Vec<f64> {
        self.to_vec()
    }
}

impl<const N: usize> IntoPlotData for [f64; N] {
    fn into_plot_data(self) -> Vec<f64> {
        self.to_vec()
    }
}

impl IntoPlotData for Vec<f32> {
    fn into_plot_data(self) -> Vec<f64> {
        self.into_iter().map(f64::from).collect()
    }
}

impl IntoPlotData for Vec<i32> {
    fn into_plot_data(self) -> Vec<f64> {
        self.into_iter().map(f64::from).collect()
    }
}

impl IntoPlotData for &[i32] {
    fn into_plot_data(self) -> Vec<f64> {
        self.iter().map(|v| f64::from(*v)).collect()
    }
}

impl<const N: usize> IntoPlotData for [i32; N] {
    fn into_plot_data(self) -> Vec<f64> {
        self.iter().map(|v| f64::from(*v)).collect()
    }
}

impl IntoPlotData for Vec<i64> {
    fn into_plot_data(self) -> Vec<f64> {
        self.into_iter().map(|v| v as f64).collect()
    }
}

/// How a series is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSetup {
    pub color: Color,
    pub line_style: LineStyle,
    /// TikZ length, e.g. `1pt`.
    pub line_width: String,
    pub marker: Marker,
    /// Draw only every n-th marker.
    pub marker_repeat: u32,
    /// Index of the first drawn marker.
    pub marker_phase: u32,
}

impl Default for LineSetup {
    fn default() -> Self {
        LineSetup {
            color: Color::black(),
            line_style: LineStyle::Solid,
            line_width: "1pt".into(),
            marker: Marker::None,
            marker_repeat: 1,
            marker_phase: 0,
        }
    }
}

impl LineSetup {
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    pub fn line_width(mut self, width: impl Into<String>) -> Self {
        self.line_width = width.into();
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn marker_repeat(mut self, repeat: u32) -> Self {
        self.marker_repeat = repeat;
        self
    }

    pub fn marker_phase(mut self, phase: u32) -> Self {
        self.marker_phase = phase;
        self
    }
}

/// One data series bound to an x and a y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Data {
    pub x_side: XSide,
    pub y_side: YSide,
    x: Vec<f64>,
    y: Vec<f64>,
    pub label: String,
    pub line: LineSetup,
}

impl Data {
    /// Create a series, rejecting empty, mismatched or non-finite columns.
    pub fn new(
        x_side: XSide,
        y_side: YSide,
        x: impl IntoPlotData,
        y: impl IntoPlotData,
    ) -> PlotResult<Self> {
        let x = x.into_plot_data();
        let y = y.into_plot_data();
        if x.len() != y.len() {
            return Err(PlotError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if x.is_empty() {
            return Err(PlotError::EmptyData);
        }
        check_finite("x", &x)?;
        check_finite("y", &y)?;
        Ok(Data {
            x_side,
            y_side,
            x,
            y,
            label: String::new(),
            line: LineSetup::default(),
        })
    }

    /// Create a series from (x, y) pairs.
    pub fn from_points(x_side: XSide, y_side: YSide, points: &[(f64, f64)]) -> PlotResult<Self> {
        let (x, y): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
        Self::new(x_side, y_side, x, y)
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn line(mut self, line: LineSetup) -> Self {
        self.line = line;
        self
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Spread `n_markers` markers evenly over `n_samples` points (all points
    /// when `n_samples` is 0), shifted by `phase_frac` of one marker period.
    pub fn spread_markers(mut self, phase_frac: f64, n_samples: usize, n_markers: usize) -> Self {
        let n_samples = if n_samples == 0 { self.len() } else { n_samples };
        let period = n_samples as f64 / n_markers.max(1) as f64;
        self.line.marker_repeat = (period.floor() as u32).max(1);
        self.line.marker_phase = (phase_frac.rem_euclid(1.0) * period).round() as u32;
        self
    }
}

fn check_finite(axis: &'static str, values: &[f64]) -> PlotResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(PlotError::NonFinite {
            axis,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_lengths() {
        let err = Data::new(XSide::Bottom, YSide::Left, vec![0.0, 1.0], vec![0.0]).unwrap_err();
        assert!(matches!(err, PlotError::LengthMismatch { x: 2, y: 1 }));
    }

    #[test]
    fn rejects_empty_and_non_finite() {
        let empty: Vec<f64> = Vec::new();
        assert!(matches!(
            Data::new(XSide::Bottom, YSide::Left, empty.clone(), empty),
            Err(PlotError::EmptyData)
        ));
        let err = Data::new(XSide::Bottom, YSide::Left, vec![0.0, 1.0], vec![1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, PlotError::NonFinite { axis: "y", index: 1, .. }));
    }

    #[test]
    fn accepts_integer_columns_and_pairs() {
        let data = Data::new(XSide::Bottom, YSide::Left, [-2, -1, 0, 1, 2], [5, 1, 0, 1, 5]).unwrap();
        assert_eq!(data.y(), &[5.0, 1.0, 0.0, 1.0, 5.0]);

        let data = Data::from_points(XSide::Top, YSide::Right, &[(0.0, 0.0), (1.0, 1.0), (1.0, 1.0)]).unwrap();
        assert_eq!(data.points().collect::<Vec<_>>(), vec![(0.0, 0.0), (1.0, 1.0), (1.0, 1.0)]);
    }

    #[test]
    fn spreads_markers() {
        let data = Data::new(XSide::Bottom, YSide::Left, vec![0.0; 100], vec![0.0; 100])
            .unwrap()
            .spread_markers(0.5, 0, 5);
        assert_eq!(data.line.marker_repeat, 20);
        assert_eq!(data.line.marker_phase, 10);

        let data = Data::new(XSide::Bottom, YSide::Left, vec![0.0; 3], vec![0.0; 3])
            .unwrap()
            .spread_markers(-0.25, 0, 10);
        assert_eq!(data.line.marker_repeat, 1);
        assert_eq!(data.line.marker_phase, 0);
    }
}
