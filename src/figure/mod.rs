//! Figure model: axes on up to four sides, data series and a legend.

use std::collections::BTreeMap;

pub mod axis;
pub mod data;
pub mod style;

pub use axis::{AxisKind, AxisSetup, AxisSide, GridSetup, LegendSetup, TickSetup, XSide, YSide};
pub use data::{Data, IntoPlotData, LineSetup};
pub use style::{Color, LineStyle, Marker, Thickness};

use crate::error::PlotResult;

/// A single pgfplots figure.
#[derive(Debug, Clone)]
pub struct Figure {
    /// File stem of every exported artifact.
    pub name: String,
    pub title: String,
    /// TikZ lengths of the plot area.
    pub width: String,
    pub height: String,
    pub base_thickness: Thickness,
    pub background: Color,
    pub legend: LegendSetup,
    axes: BTreeMap<AxisSide, AxisSetup>,
    data: Vec<Data>,
}

impl Figure {
    pub fn new(name: impl Into<String>) -> Self {
        Figure {
            name: name.into(),
            title: String::new(),
            width: "5cm".into(),
            height: "5cm".into(),
            base_thickness: Thickness::Thick,
            background: Color::white(),
            legend: LegendSetup::default(),
            axes: BTreeMap::new(),
            data: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = width.into();
        self.height = height.into();
        self
    }

    pub fn base_thickness(mut self, thickness: Thickness) -> Self {
        self.base_thickness = thickness;
        self
    }

    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = color.into();
        self
    }

    pub fn legend(mut self, legend: LegendSetup) -> Self {
        self.legend = legend;
        self
    }

    /// Set up (or replace) the axis on `side`.
    pub fn set_axis(&mut self, side: impl Into<AxisSide>, setup: AxisSetup) -> &mut Self {
        self.axes.insert(side.into(), setup);
        self
    }

    pub fn axis(&self, side: AxisSide) -> Option<&AxisSetup> {
        self.axes.get(&side)
    }

    pub fn axis_mut(&mut self, side: AxisSide) -> Option<&mut AxisSetup> {
        self.axes.get_mut(&side)
    }

    /// Defined axes in emission order (top, bottom, left, right).
    pub fn axes(&self) -> impl Iterator<Item = (AxisSide, &AxisSetup)> {
        self.axes.iter().map(|(side, setup)| (*side, setup))
    }

    /// Add a series and return its id, which is its position in the figure.
    pub fn add(&mut self, data: Data) -> usize {
        self.data.push(data);
        self.data.len() - 1
    }

    /// Build a series from raw columns, add it and return it for styling.
    pub fn plot(
        &mut self,
        x_side: XSide,
        y_side: YSide,
        x: impl IntoPlotData,
        y: impl IntoPlotData,
    ) -> PlotResult<&mut Data> {
        let id = self.add(Data::new(x_side, y_side, x, y)?);
        Ok(&mut self.data[id])
    }

    pub fn data(&self) -> &[Data] {
        &self.data
    }

    /// Generate the LaTeX document for this figure.
    pub fn to_latex(&self) -> PlotResult<String> {
        crate::markup::render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_ids_follow_insertion_order() {
        let mut fig = Figure::new("ids");
        fig.set_axis(XSide::Bottom, AxisSetup::new("x"))
            .set_axis(YSide::Left, AxisSetup::new("y"));
        let a = fig.add(Data::new(XSide::Bottom, YSide::Left, [0.0, 1.0], [0.0, 1.0]).unwrap());
        fig.plot(XSide::Bottom, YSide::Left, [0.0, 1.0], [1.0, 0.0])
            .unwrap()
            .label = "second".into();
        assert_eq!(a, 0);
        assert_eq!(fig.data().len(), 2);
        assert_eq!(fig.data()[1].label, "second");
    }

    #[test]
    fn axes_iterate_top_bottom_left_right() {
        let mut fig = Figure::new("order");
        fig.set_axis(YSide::Right, AxisSetup::default())
            .set_axis(XSide::Bottom, AxisSetup::default())
            .set_axis(YSide::Left, AxisSetup::default())
            .set_axis(XSide::Top, AxisSetup::default());
        let sides: Vec<AxisSide> = fig.axes().map(|(side, _)| side).collect();
        assert_eq!(sides, AxisSide::ALL.to_vec());
    }
}
