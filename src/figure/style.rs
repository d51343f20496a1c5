//! Style vocabulary shared by axes and series (pgfplots / TikZ names).

use std::fmt;

use serde::{Deserialize, Serialize};

/// An xcolor expression, e.g. `blue` or `gray!30`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(expr: impl Into<String>) -> Self {
        Color(expr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn black() -> Self {
        Color::new("black")
    }

    pub fn white() -> Self {
        Color::new("white")
    }

    pub fn gray() -> Self {
        Color::new("gray")
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::black()
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::new(s)
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// TikZ line thickness presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Thickness {
    VeryThin,
    Thin,
    Thick,
    VeryThick,
}

impl Thickness {
    pub fn as_tikz(&self) -> &'static str {
        match self {
            Thickness::VeryThin => "very thin",
            Thickness::Thin => "thin",
            Thickness::Thick => "thick",
            Thickness::VeryThick => "very thick",
        }
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tikz())
    }
}

/// Dash pattern of a plotted line.
///
/// [`LineStyle::None`] draws no line at all, only the markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    None,
    #[default]
    Solid,
    Dotted,
    DenselyDotted,
    LooselyDotted,
    Dashed,
    DenselyDashed,
    LooselyDashed,
    DashDotted,
    DenselyDashDotted,
    LooselyDashDotted,
    DashDotDotted,
    DenselyDashDotDotted,
    LooselyDashDotDotted,
}

impl LineStyle {
    /// TikZ option name, `None` for [`LineStyle::None`].
    pub fn as_tikz(&self) -> Option<&'static str> {
        let name = match self {
            LineStyle::None => return None,
            LineStyle::Solid => "solid",
            LineStyle::Dotted => "dotted",
            LineStyle::DenselyDotted => "densely dotted",
            LineStyle::LooselyDotted => "loosely dotted",
            LineStyle::Dashed => "dashed",
            LineStyle::DenselyDashed => "densely dashed",
            LineStyle::LooselyDashed => "loosely dashed",
            LineStyle::DashDotted => "dashdotted",
            LineStyle::DenselyDashDotted => "densely dashdotted",
            LineStyle::LooselyDashDotted => "loosely dashdotted",
            LineStyle::DashDotDotted => "dashdotdotted",
            LineStyle::DenselyDashDotDotted => "densely dashdotdotted",
            LineStyle::LooselyDashDotDotted => "loosely dashdotdotted",
        };
        Some(name)
    }
}

/// pgfplots marker shapes (see the pgfplots marker reference).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    #[default]
    None,
    /// Filled circle, pgfplots `*`.
    Dot,
    Cross,
    Plus,
    Minus,
    Bar,
    Circle,
    Asterisk,
    Star,
    TenPointedStar,
    Oplus,
    OplusFilled,
    Otimes,
    OtimesFilled,
    Square,
    SquareFilled,
    Triangle,
    TriangleFilled,
    Diamond,
    DiamondFilled,
    HalfDiamondFilled,
    HalfSquareFilled,
    HalfSquareLeftFilled,
    HalfSquareRightFilled,
    MercedesStar,
    MercedesStarFlipped,
    HalfCircle,
    HalfCircleFilled,
    Pentagon,
    PentagonFilled,
    Ball,
    Cube,
    CubeFilled,
}

impl Marker {
    /// pgfplots `mark=` value, `None` when no marker is drawn.
    pub fn as_pgf(&self) -> Option<&'static str> {
        let name = match self {
            Marker::None => return None,
            Marker::Dot => "*",
            Marker::Cross => "x",
            Marker::Plus => "+",
            Marker::Minus => "-",
            Marker::Bar => "|",
            Marker::Circle => "o",
            Marker::Asterisk => "asterisk",
            Marker::Star => "star",
            Marker::TenPointedStar => "10-pointed star",
            Marker::Oplus => "oplus",
            Marker::OplusFilled => "oplus*",
            Marker::Otimes => "otimes",
            Marker::OtimesFilled => "otimes*",
            Marker::Square => "square",
            Marker::SquareFilled => "square*",
            Marker::Triangle => "triangle",
            Marker::TriangleFilled => "triangle*",
            Marker::Diamond => "diamond",
            Marker::DiamondFilled => "diamond*",
            Marker::HalfDiamondFilled => "halfdiamond*",
            Marker::HalfSquareFilled => "halfsquare*",
            Marker::HalfSquareLeftFilled => "halfsquare left*",
            Marker::HalfSquareRightFilled => "halfsquare right*",
            Marker::MercedesStar => "Mercedes star",
            Marker::MercedesStarFlipped => "Mercedes star flipped",
            Marker::HalfCircle => "halfcircle",
            Marker::HalfCircleFilled => "halfcircle*",
            Marker::Pentagon => "pentagon",
            Marker::PentagonFilled => "pentagon*",
            Marker::Ball => "ball",
            Marker::Cube => "cube",
            Marker::CubeFilled => "cube*",
        };
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tikz_names() {
        assert_eq!(Thickness::VeryThick.to_string(), "very thick");
        assert_eq!(LineStyle::DenselyDashDotted.as_tikz(), Some("densely dashdotted"));
        assert_eq!(LineStyle::None.as_tikz(), None);
        assert_eq!(Marker::SquareFilled.as_pgf(), Some("square*"));
        assert_eq!(Marker::None.as_pgf(), None);
        assert_eq!(Color::from("gray!30").to_string(), "gray!30");
    }
}
