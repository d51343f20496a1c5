//! Axis sides and per-axis configuration.

use std::fmt;

use super::style::{Color, Thickness};

/// Kind of an axis: horizontal (`x`) or vertical (`y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

impl AxisKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisKind::X => "x",
            AxisKind::Y => "y",
        }
    }

    pub fn opposite(&self) -> AxisKind {
        match self {
            AxisKind::X => AxisKind::Y,
            AxisKind::Y => AxisKind::X,
        }
    }
}

/// One of the four sides of a figure an axis can be attached to.
///
/// The declaration order (top, bottom, left, right) is the order in which
/// axis blocks are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AxisSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl AxisSide {
    pub const ALL: [AxisSide; 4] = [AxisSide::Top, AxisSide::Bottom, AxisSide::Left, AxisSide::Right];

    pub fn kind(&self) -> AxisKind {
        match self {
            AxisSide::Top | AxisSide::Bottom => AxisKind::X,
            AxisSide::Left | AxisSide::Right => AxisKind::Y,
        }
    }

    /// pgfplots position name (`top`, `bottom`, `left`, `right`).
    pub fn position(&self) -> &'static str {
        match self {
            AxisSide::Top => "top",
            AxisSide::Bottom => "bottom",
            AxisSide::Left => "left",
            AxisSide::Right => "right",
        }
    }

    pub fn opposite(&self) -> AxisSide {
        match self {
            AxisSide::Top => AxisSide::Bottom,
            AxisSide::Bottom => AxisSide::Top,
            AxisSide::Left => AxisSide::Right,
            AxisSide::Right => AxisSide::Left,
        }
    }

    /// Single letter used in comments of the generated markup.
    pub fn key(&self) -> char {
        match self {
            AxisSide::Top => 't',
            AxisSide::Bottom => 'b',
            AxisSide::Left => 'l',
            AxisSide::Right => 'r',
        }
    }
}

impl fmt::Display for AxisSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.position())
    }
}

/// Side of an x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XSide {
    Top,
    Bottom,
}

/// Side of a y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YSide {
    Left,
    Right,
}

impl XSide {
    pub const ALL: [XSide; 2] = [XSide::Top, XSide::Bottom];
}

impl YSide {
    pub const ALL: [YSide; 2] = [YSide::Left, YSide::Right];
}

impl From<XSide> for AxisSide {
    fn from(side: XSide) -> Self {
        match side {
            XSide::Top => AxisSide::Top,
            XSide::Bottom => AxisSide::Bottom,
        }
    }
}

impl From<YSide> for AxisSide {
    fn from(side: YSide) -> Self {
        match side {
            YSide::Left => AxisSide::Left,
            YSide::Right => AxisSide::Right,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridSetup {
    pub major_enable: bool,
    pub major_thickness: Thickness,
    pub major_color: Color,
    pub minor_enable: bool,
    pub minor_thickness: Thickness,
    pub minor_color: Color,
}

impl Default for GridSetup {
    fn default() -> Self {
        GridSetup {
            major_enable: false,
            major_thickness: Thickness::Thin,
            major_color: Color::black(),
            minor_enable: false,
            minor_thickness: Thickness::VeryThin,
            minor_color: Color::black(),
        }
    }
}

impl GridSetup {
    /// Major grid lines with default styling.
    pub fn major() -> Self {
        GridSetup {
            major_enable: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickSetup {
    /// Draw major tick marks.
    pub enable: bool,
    /// Mirror tick marks on the opposite side.
    pub opposite: bool,
    pub major_thickness: Thickness,
    pub major_color: Color,
    /// Fixed spacing between major ticks, pgfplots chooses when unset.
    pub major_distance: Option<f64>,
    pub minor_thickness: Thickness,
    pub minor_color: Color,
    /// Minor ticks between two major ticks.
    pub minor_num: u32,
}

impl Default for TickSetup {
    fn default() -> Self {
        TickSetup {
            enable: true,
            opposite: false,
            major_thickness: Thickness::Thin,
            major_color: Color::black(),
            major_distance: None,
            minor_thickness: Thickness::Thin,
            minor_color: Color::gray(),
            minor_num: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendSetup {
    pub enable: bool,
    /// Which point of the legend box is placed at `at`.
    pub anchor: String,
    pub align: String,
    pub cell_align: String,
    /// Position of the anchor in axis-relative coordinates (0..1).
    pub at: (f64, f64),
    pub scale: f64,
}

impl Default for LegendSetup {
    fn default() -> Self {
        LegendSetup {
            enable: true,
            anchor: "north east".into(),
            align: "left".into(),
            cell_align: "left".into(),
            at: (0.98, 0.98),
            scale: 0.8,
        }
    }
}

impl LegendSetup {
    pub fn hidden() -> Self {
        LegendSetup {
            enable: false,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisSetup {
    /// Axis label, LaTeX is passed through.
    pub label: String,
    pub label_shift: String,
    /// Factor applied to every data value bound to this axis.
    pub scale: f64,
    pub log: bool,
    /// Kept textual so the printed digits are exactly what the caller wrote.
    pub log_base: String,
    /// Explicit (min, max) in scaled units, derived from the data when unset.
    pub limits: Option<(f64, f64)>,
    /// Space reserved for tick labels and the axis label.
    pub padding: String,
    pub grid: GridSetup,
    pub tick: TickSetup,
}

impl Default for AxisSetup {
    fn default() -> Self {
        AxisSetup {
            label: String::new(),
            label_shift: "0cm".into(),
            scale: 1.0,
            log: false,
            log_base: "10".into(),
            limits: None,
            padding: "0cm".into(),
            grid: GridSetup::default(),
            tick: TickSetup::default(),
        }
    }
}

impl AxisSetup {
    pub fn new(label: impl Into<String>) -> Self {
        AxisSetup {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn label_shift(mut self, shift: impl Into<String>) -> Self {
        self.label_shift = shift.into();
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    pub fn log_base(mut self, base: impl Into<String>) -> Self {
        self.log_base = base.into();
        self
    }

    pub fn limits(mut self, min: f64, max: f64) -> Self {
        self.limits = Some((min, max));
        self
    }

    pub fn padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn grid(mut self, grid: GridSetup) -> Self {
        self.grid = grid;
        self
    }

    pub fn tick(mut self, tick: TickSetup) -> Self {
        self.tick = tick;
        self
    }
}
