//! pgfplots markup generation.
//!
//! A figure is drawn as a stack of overlaid `axis` environments sharing the
//! same plot area: padding axes reserve room for labels, background axes draw
//! fill, grids and tick marks, one invisible axis per (x, y) side pair holds
//! the data, overlay axes put tick labels on top and a last axis carries the
//! legend. Generation is pure and deterministic.

use std::collections::BTreeMap;

use crate::error::{PlotError, PlotResult};
use crate::figure::{AxisKind, AxisSetup, AxisSide, Data, Figure, XSide, YSide};

const DOC_CLASS: &str = r"\documentclass[class=IEEEtran]{standalone}";

const PREAMBLE: &[&str] = &[
    r"\usepackage{tikz,amsmath,siunitx}",
    r"\sisetup{range-units=repeat, list-units=repeat, binary-units, exponent-product = \cdot, print-unity-mantissa=false}",
    r"\usetikzlibrary{arrows,snakes,backgrounds,patterns,matrix,shapes,fit,calc,shadows,plotmarks}",
    r"\usepackage[graphics,tightpage,active]{preview}",
    r"\usepackage{pgfplots}",
    r"\pgfplotsset{compat=newest}",
    r"\usetikzlibrary{shapes.geometric}",
    r"\PreviewEnvironment{tikzpicture}",
    r"\PreviewEnvironment{equation}",
    r"\PreviewEnvironment{equation*}",
    r"\newlength\figurewidth",
    r"\newlength\figureheight",
];

/// pgfplots mis-renders values far outside the axis range, but clipping at
/// the limits would distort sparse data. Values beyond the limits scaled by
/// this factor are dropped.
const OVERSCALE_LIMIT: f64 = 1e10;

/// Generate the complete LaTeX document for `fig`.
pub fn render(fig: &Figure) -> PlotResult<String> {
    let limits = resolve_limits(fig)?;
    let writer = Writer { fig, limits };

    let mut out = writer.doc_begin();
    out.extend(writer.padding());
    out.extend(writer.background());
    for x_side in XSide::ALL {
        for y_side in YSide::ALL {
            out.extend(writer.plot_group(x_side, y_side));
        }
    }
    out.extend(writer.overlay());
    if fig.legend.enable {
        out.extend(writer.legend());
    }
    out.extend(writer.doc_end());

    let mut text = out.join("\n");
    text.push('\n');
    Ok(text)
}

/// Format a number the way every value in the markup is printed:
/// 20 fractional digits and a signed two-digit exponent.
pub fn fmt_float(x: f64) -> String {
    let raw = format!("{:.20e}", x);
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => raw,
    }
}

/// Check the figure and compute the (scaled) limits of every defined axis.
fn resolve_limits(fig: &Figure) -> PlotResult<BTreeMap<AxisSide, (f64, f64)>> {
    for (id, data) in fig.data().iter().enumerate() {
        for side in [AxisSide::from(data.x_side), AxisSide::from(data.y_side)] {
            if fig.axis(side).is_none() {
                return Err(PlotError::UndefinedAxis { id, side });
            }
        }
    }

    for (side, setup) in fig.axes() {
        if !setup.scale.is_finite() {
            return Err(PlotError::InvalidConfig(format!(
                "{} axis scale must be finite, got {}",
                side, setup.scale
            )));
        }
        if setup.grid.major_enable && !setup.tick.enable {
            return Err(PlotError::InvalidConfig(format!(
                "major grid on the {} axis requires ticks to be enabled",
                side
            )));
        }
        if let Some((min, max)) = setup.limits {
            if !min.is_finite() || !max.is_finite() || min >= max {
                return Err(PlotError::InvalidConfig(format!(
                    "{} axis limits must be finite with min < max, got ({}, {})",
                    side, min, max
                )));
            }
            if setup.log && min <= 0.0 {
                return Err(PlotError::InvalidConfig(format!(
                    "log-scaled {} axis requires positive limits",
                    side
                )));
            }
        }
        if setup.log && bound_values(fig, side, setup.scale).any(|v| v <= 0.0) {
            return Err(PlotError::InvalidData(format!(
                "log-scaled {} axis requires positive data",
                side
            )));
        }
    }

    let mut limits = BTreeMap::new();
    for (side, setup) in fig.axes() {
        let resolved = setup.limits.or_else(|| {
            data_range(fig, side, setup.scale).map(|range| widen_degenerate(range, setup.log))
        });
        if let Some((min, max)) = resolved {
            if !min.is_finite() || !max.is_finite() {
                return Err(PlotError::InvalidData(format!(
                    "scaled data on the {} axis exceeds the representable range",
                    side
                )));
            }
            limits.insert(side, (min, max));
        }
    }
    // Axes without data share the range of the axis across from them.
    for (side, setup) in fig.axes() {
        if limits.contains_key(&side) {
            continue;
        }
        let fallback = if setup.log { (1.0, 10.0) } else { (0.0, 1.0) };
        let borrowed = limits
            .get(&side.opposite())
            .copied()
            .filter(|(min, _)| !setup.log || *min > 0.0)
            .unwrap_or(fallback);
        limits.insert(side, borrowed);
    }
    Ok(limits)
}

/// Scaled values of every series bound to `side`.
fn bound_values<'a>(fig: &'a Figure, side: AxisSide, scale: f64) -> impl Iterator<Item = f64> + 'a {
    fig.data().iter().flat_map(move |data| {
        let values: &[f64] = if AxisSide::from(data.x_side) == side {
            data.x()
        } else if AxisSide::from(data.y_side) == side {
            data.y()
        } else {
            &[]
        };
        values.iter().map(move |v| v * scale)
    })
}

fn data_range(fig: &Figure, side: AxisSide, scale: f64) -> Option<(f64, f64)> {
    bound_values(fig, side, scale).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((min, max)) => Some((min.min(v), max.max(v))),
    })
}

/// pgfplots cannot draw an axis whose min equals its max.
fn widen_degenerate((min, max): (f64, f64), log: bool) -> (f64, f64) {
    if min < max {
        (min, max)
    } else if log {
        (min / 10.0, max * 10.0)
    } else if min == 0.0 {
        (-1.0, 1.0)
    } else {
        let delta = min.abs() * 0.1;
        (min - delta, max + delta)
    }
}

fn section(title: &str) -> Vec<String> {
    let bar = "%".repeat(title.len() + 4);
    vec![String::new(), bar.clone(), format!("% {} %", title), bar]
}

fn axis_block(comment: Option<String>, params: Vec<String>, body: Vec<String>) -> Vec<String> {
    let mut out = vec![match comment {
        Some(c) => format!(r"\begin{{axis}}% {}", c),
        None => r"\begin{axis}".to_string(),
    }];
    out.push("[".into());
    out.extend(params.into_iter().map(|p| format!("  {},", p)));
    out.push("]".into());
    out.extend(body);
    out.push(r"\end{axis}".into());
    out
}

fn mode(setup: &AxisSetup) -> &'static str {
    if setup.log {
        "log"
    } else {
        "linear"
    }
}

struct Writer<'a> {
    fig: &'a Figure,
    limits: BTreeMap<AxisSide, (f64, f64)>,
}

impl<'a> Writer<'a> {
    fn limits(&self, side: AxisSide) -> (f64, f64) {
        self.limits.get(&side).copied().unwrap_or((0.0, 1.0))
    }

    fn axis_params(&self, kind: AxisKind, (min, max): (f64, f64)) -> Vec<String> {
        let k = kind.as_str();
        vec![
            "scale only axis".into(),
            format!("width={}", self.fig.width),
            format!("height={}", self.fig.height),
            format!("{}min={}", k, fmt_float(min)),
            format!("{}max={}", k, fmt_float(max)),
        ]
    }

    fn doc_begin(&self) -> Vec<String> {
        let mut out = section("auto-generated using dplot");
        out.remove(0);
        out.push(DOC_CLASS.into());
        out.extend(PREAMBLE.iter().map(|line| line.to_string()));
        out.push(r"\begin{document}".into());
        out.push(format!(r"\setlength\figurewidth{{{}}}", self.fig.width));
        out.push(format!(r"\setlength\figureheight{{{}}}", self.fig.height));
        out.push(r"\begin{tikzpicture}[font=\normalsize]".into());
        out.push(format!(
            r"\pgfplotsset{{every axis/.append style={{{}}},compat=1.18}}",
            self.fig.base_thickness
        ));
        out
    }

    fn padding(&self) -> Vec<String> {
        let mut out = section("padding");
        for (side, setup) in self.fig.axes() {
            let kind = side.kind();
            let (k, op) = (kind.as_str(), kind.opposite().as_str());
            let phantom = match kind {
                AxisKind::Y => r"{\hphantom{-}}",
                AxisKind::X => r"{\vphantom{-}}",
            };
            let mut params = self.axis_params(kind, (0.0, 1.0));
            params.extend([
                format!("{}mode=linear", k),
                format!("log basis {}={}", k, setup.log_base),
                format!("{}min=0", op),
                format!("{}max=1", op),
                r"xtick=\empty".into(),
                r"ytick=\empty".into(),
                format!("hide {} axis=true", op),
                format!("{}tick style={{draw=none}}", k),
                format!("{}label={}", k, phantom),
                format!("{}label shift={}", k, setup.padding),
                format!("{}ticklabel pos={}", k, side.position()),
            ]);
            out.extend(axis_block(Some(format!("{}-axis", side.key())), params, vec![]));
        }
        out
    }

    fn background(&self) -> Vec<String> {
        let mut out = section("background");
        let mut fill_applied = false;
        for (side, setup) in self.fig.axes() {
            let kind = side.kind();
            let (k, op) = (kind.as_str(), kind.opposite().as_str());
            let mut params = self.axis_params(kind, self.limits(side));
            if !fill_applied {
                params.push(format!("axis background/.style={{fill={}}}", self.fig.background));
                fill_applied = true;
            }
            params.extend([
                format!("{}mode={}", k, mode(setup)),
                format!("log basis {}={}", k, setup.log_base),
                format!("{}min=0", op),
                format!("{}max=1", op),
                format!("{}label={{{}}}", k, setup.label),
                format!("{}label shift={{{}}}", k, setup.label_shift),
                r"xticklabel=\empty".into(),
                r"yticklabel=\empty".into(),
                format!("{}majorgrids={}", k, setup.grid.major_enable),
                format!(
                    "major grid style={{{},color={}}}",
                    setup.grid.major_thickness, setup.grid.major_color
                ),
                format!("{}minorgrids={}", k, setup.grid.minor_enable),
                format!(
                    "minor grid style={{{},color={}}}",
                    setup.grid.minor_thickness, setup.grid.minor_color
                ),
            ]);
            if !setup.tick.enable {
                params.push(format!(r"{}tick=\empty", k));
            }
            params.push(format!(r"{}tick=\empty", op));
            let tick_pos = if setup.tick.opposite { "both" } else { side.position() };
            params.push(format!("{}tick pos={}", k, tick_pos));
            if let Some(distance) = setup.tick.major_distance {
                params.push(format!("{}tick distance={}", k, fmt_float(distance)));
            }
            params.extend([
                format!(
                    "major {} tick style={{{},color={}}}",
                    k, setup.tick.major_thickness, setup.tick.major_color
                ),
                format!(
                    "minor {} tick style={{{},color={}}}",
                    k, setup.tick.minor_thickness, setup.tick.minor_color
                ),
                format!("minor {} tick num={}", k, setup.tick.minor_num),
            ]);
            out.extend(axis_block(Some(format!("{}-axis", side.key())), params, vec![]));
        }
        out
    }

    fn plot_group(&self, x_side: XSide, y_side: YSide) -> Vec<String> {
        let (xs, ys) = (AxisSide::from(x_side), AxisSide::from(y_side));
        let mut out = section(&format!("plot group {}/{}", xs.key(), ys.key()));
        let selected: Vec<(usize, &Data)> = self
            .fig
            .data()
            .iter()
            .enumerate()
            .filter(|(_, d)| d.x_side == x_side && d.y_side == y_side)
            .collect();
        if selected.is_empty() {
            return out;
        }

        // resolve_limits has checked every referenced side
        let (Some(asx), Some(asy)) = (self.fig.axis(xs), self.fig.axis(ys)) else {
            return out;
        };
        let (ymin, ymax) = self.limits(ys);
        let mut params = self.axis_params(AxisKind::X, self.limits(xs));
        params.extend([
            format!("ymin={}", fmt_float(ymin)),
            format!("ymax={}", fmt_float(ymax)),
            format!("xmode={}", mode(asx)),
            format!("log basis x={}", asx.log_base),
            format!("ymode={}", mode(asy)),
            format!("log basis y={}", asy.log_base),
            "hide x axis=true".into(),
            "hide y axis=true".into(),
            r"xtick=\empty".into(),
            r"ytick=\empty".into(),
        ]);
        let body = selected
            .into_iter()
            .flat_map(|(id, data)| self.plot_content(id, data, asx, asy))
            .collect();
        out.extend(axis_block(None, params, body));
        out
    }

    fn y_domain(&self, side: AxisSide, setup: &AxisSetup) -> Option<(f64, f64)> {
        // restrict y to domain does not work on logarithmic axes
        if setup.log {
            return None;
        }
        let (min, max) = self.limits(side);
        let lo = if min > 0.0 { min / OVERSCALE_LIMIT } else { min * OVERSCALE_LIMIT };
        let hi = if max > 0.0 { max * OVERSCALE_LIMIT } else { max / OVERSCALE_LIMIT };
        Some((lo.max(f64::MIN), hi.min(f64::MAX)))
    }

    fn plot_content(&self, id: usize, data: &Data, asx: &AxisSetup, asy: &AxisSetup) -> Vec<String> {
        let line = &data.line;
        let mut params = vec![format!("color={}", line.color)];
        if let Some(style) = line.line_style.as_tikz() {
            params.push(style.into());
        }
        params.push(format!("line width={}", line.line_width));
        if let Some(mark) = line.marker.as_pgf() {
            params.push(format!("mark={}", mark));
        }
        params.extend([
            format!("mark repeat={}", line.marker_repeat),
            format!("mark phase={}", line.marker_phase),
            // keep markers solid on dashed lines
            "mark options={solid}".into(),
        ]);
        if line.line_style.as_tikz().is_none() {
            params.push("only marks".into());
        }
        if line.marker.as_pgf().is_none() {
            params.push("no markers".into());
        }
        if let Some((lo, hi)) = self.y_domain(AxisSide::from(data.y_side), asy) {
            params.push(format!("restrict y to domain={{{}:{}}}", fmt_float(lo), fmt_float(hi)));
        }

        let table = [
            "row sep=newline".to_string(),
            format!(r"x expr=\thisrowno{{0}}*{}", fmt_float(asx.scale)),
            format!(r"y expr=\thisrowno{{1}}*{}", fmt_float(asy.scale)),
        ];

        let mut out = vec![r"\addplot [".to_string()];
        out.extend(params.into_iter().map(|p| format!("  {},", p)));
        out.push("] table [".into());
        out.extend(table.into_iter().map(|p| format!("  {},", p)));
        out.push("]{".into());
        out.extend(
            data.points()
                .map(|(x, y)| format!("  {} {}", fmt_float(x), fmt_float(y))),
        );
        out.push("};".into());
        out.push(format!(r"\label{{dplot:{}}}", id));
        out
    }

    fn overlay(&self) -> Vec<String> {
        let mut out = section("overlay");
        let mut title_applied = false;
        for (side, setup) in self.fig.axes() {
            let kind = side.kind();
            let (k, op) = (kind.as_str(), kind.opposite().as_str());
            let mut params = self.axis_params(kind, self.limits(side));
            params.extend([
                format!("{}min=0", op),
                format!("{}max=1", op),
                format!("{}mode={}", k, mode(setup)),
                format!("log basis {}={}", k, setup.log_base),
                format!("{}tick style={{draw=none}}", k),
            ]);
            if let Some(distance) = setup.tick.major_distance {
                params.push(format!("{}tick distance={}", k, fmt_float(distance)));
            }
            params.extend([
                format!("hide {} axis=true", op),
                format!("{}ticklabel pos={}", k, side.position()),
                "axis on top=true".into(),
            ]);
            if !title_applied && !self.fig.title.is_empty() {
                params.push(format!("title={{{}}}", self.fig.title));
                title_applied = true;
            }
            out.extend(axis_block(Some(format!("{}-axis", side.key())), params, vec![]));
        }
        out
    }

    fn legend(&self) -> Vec<String> {
        let mut out = section("legend");
        let legend = &self.fig.legend;
        let style = [
            format!("at={{({},{})}}", fmt_float(legend.at.0), fmt_float(legend.at.1)),
            format!("anchor={}", legend.anchor),
            format!("legend cell align={}", legend.cell_align),
            format!("align={}", legend.align),
            format!("nodes={{scale={}, transform shape}}", fmt_float(legend.scale)),
        ];
        let mut params = self.axis_params(AxisKind::X, (0.0, 1.0));
        params.extend([
            "ymin=0".into(),
            "ymax=1".into(),
            "xmode=linear".into(),
            "hide x axis=true".into(),
            "hide y axis=true".into(),
            "axis on top=true".into(),
            format!("legend style={{{}}}", style.join(", ")),
        ]);
        let entries = self
            .fig
            .data()
            .iter()
            .enumerate()
            .map(|(id, data)| {
                let label = if data.label.is_empty() { id.to_string() } else { data.label.clone() };
                format!(
                    r"\addlegendimage{{/pgfplots/refstyle=dplot:{}}}\addlegendentry{{{}}}",
                    id, label
                )
            })
            .collect();
        out.extend(axis_block(None, params, entries));
        out
    }

    fn doc_end(&self) -> Vec<String> {
        vec![r"\end{tikzpicture}".into(), r"\end{document}".into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{GridSetup, LineSetup, LineStyle, Marker, Thickness, TickSetup};

    fn parabola() -> Figure {
        let mut fig = Figure::new("parabola").background("gray!30");
        fig.set_axis(XSide::Bottom, AxisSetup::new("x"))
            .set_axis(YSide::Left, AxisSetup::new("y"));
        fig.add(Data::new(XSide::Bottom, YSide::Left, [-2, -1, 0, 1, 2], [5, 1, 0, 1, 5]).unwrap());
        fig
    }

    #[test]
    fn formats_floats_with_signed_exponent() {
        assert_eq!(fmt_float(1.0), "1.00000000000000000000e+00");
        assert_eq!(fmt_float(0.0), "0.00000000000000000000e+00");
        assert_eq!(fmt_float(-2.5e-7), "-2.50000000000000000000e-07");
        assert_eq!(fmt_float(1e10), "1.00000000000000000000e+10");
        assert_eq!(fmt_float(3e120), "3.00000000000000000000e+120");
    }

    #[test]
    fn generation_is_deterministic() {
        let fig = parabola();
        assert_eq!(render(&fig).unwrap(), render(&fig.clone()).unwrap());
    }

    #[test]
    fn document_structure() {
        let text = render(&parabola()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "%".repeat(30));
        assert_eq!(lines[1], "% auto-generated using dplot %");
        assert!(lines.contains(&r"\documentclass[class=IEEEtran]{standalone}"));
        assert_eq!(lines[lines.len() - 2], r"\end{tikzpicture}");
        assert_eq!(lines[lines.len() - 1], r"\end{document}");

        // one padding, background and overlay block per axis, one plot group, one legend
        assert_eq!(text.matches(r"\begin{axis}").count(), 3 * 2 + 1 + 1);
        assert_eq!(text.matches(r"\begin{axis}").count(), text.matches(r"\end{axis}").count());
        assert_eq!(text.matches("axis background/.style={fill=gray!30}").count(), 1);
        assert!(text.contains("% plot group b/l %"));
        assert!(text.contains(r"\label{dplot:0}"));
        assert!(text.contains(r"\addlegendimage{/pgfplots/refstyle=dplot:0}\addlegendentry{0}"));
        assert!(text.contains("  -2.00000000000000000000e+00 5.00000000000000000000e+00"));
    }

    #[test]
    fn derives_scaled_limits_from_data() {
        let mut fig = parabola();
        if let Some(setup) = fig.axis_mut(AxisSide::Left) {
            setup.scale = 2.0;
        }
        let text = render(&fig).unwrap();
        assert!(text.contains("xmin=-2.00000000000000000000e+00"));
        assert!(text.contains("xmax=2.00000000000000000000e+00"));
        assert!(text.contains("ymax=1.00000000000000000000e+01"));
        assert!(text.contains(r"y expr=\thisrowno{1}*2.00000000000000000000e+00"));
    }

    #[test]
    fn axis_without_data_borrows_opposite_limits() {
        let mut fig = parabola();
        fig.set_axis(XSide::Top, AxisSetup::new("top"));
        let limits = resolve_limits(&fig).unwrap();
        assert_eq!(limits[&AxisSide::Top], limits[&AxisSide::Bottom]);
    }

    #[test]
    fn widens_constant_data() {
        let mut fig = Figure::new("flat");
        fig.set_axis(XSide::Bottom, AxisSetup::default())
            .set_axis(YSide::Left, AxisSetup::default().log(true));
        fig.add(Data::new(XSide::Bottom, YSide::Left, [0.0, 0.0], [5.0, 5.0]).unwrap());
        let limits = resolve_limits(&fig).unwrap();
        assert_eq!(limits[&AxisSide::Bottom], (-1.0, 1.0));
        assert_eq!(limits[&AxisSide::Left], (0.5, 50.0));
    }

    #[test]
    fn rejects_undefined_axis() {
        let mut fig = parabola();
        fig.add(Data::new(XSide::Top, YSide::Left, [0.0], [0.0]).unwrap());
        let err = render(&fig).unwrap_err();
        assert!(matches!(err, PlotError::UndefinedAxis { id: 1, side: AxisSide::Top }));
    }

    #[test]
    fn rejects_major_grid_without_ticks() {
        let mut fig = parabola();
        fig.set_axis(
            XSide::Bottom,
            AxisSetup::new("x")
                .grid(GridSetup::major())
                .tick(TickSetup { enable: false, ..Default::default() }),
        );
        assert!(matches!(render(&fig), Err(PlotError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_non_positive_log_data() {
        let mut fig = parabola();
        fig.set_axis(YSide::Left, AxisSetup::new("y").log(true));
        assert!(matches!(render(&fig), Err(PlotError::InvalidData(_))));
    }

    #[test]
    fn series_styling() {
        let mut fig = parabola().legend(crate::figure::LegendSetup::hidden());
        fig.add(
            Data::new(XSide::Bottom, YSide::Left, [0.0, 1.0], [1.0, 2.0])
                .unwrap()
                .label("marks")
                .line(LineSetup::default().line_style(LineStyle::None).marker(Marker::SquareFilled).color("blue")),
        );
        let text = render(&fig).unwrap();
        assert!(text.contains("  color=blue,"));
        assert!(text.contains("  mark=square*,"));
        assert!(text.contains("  only marks,"));
        assert_eq!(text.matches("  no markers,").count(), 1);
        assert!(text.contains("restrict y to domain={0.00000000000000000000e+00:5.00000000000000000000e+10}"));
        assert!(!text.contains("% legend %"));
    }

    #[test]
    fn title_goes_on_first_overlay_axis() {
        let fig = parabola().title("Low-pass");
        let text = render(&fig).unwrap();
        assert_eq!(text.matches("title={Low-pass}").count(), 1);
        let overlay = text.find("% overlay %").unwrap();
        assert!(text.find("title={Low-pass}").unwrap() > overlay);
    }

    /// The background axis block drawn for `side`.
    fn background_block(text: &str, side: AxisSide) -> &str {
        let section = text.find("% background %").unwrap();
        let begin = section + text[section..].find(&format!(r"\begin{{axis}}% {}-axis", side.key())).unwrap();
        let end = begin + text[begin..].find(r"\end{axis}").unwrap();
        &text[begin..end]
    }

    fn all_axes() -> Figure {
        let mut fig = Figure::new("all-axes").background("gray!30");
        fig.set_axis(
            XSide::Bottom,
            AxisSetup::new("bottom")
                .tick(TickSetup {
                    opposite: true,
                    major_thickness: Thickness::VeryThick,
                    major_distance: Some(1.0),
                    minor_thickness: Thickness::VeryThin,
                    minor_color: "blue".into(),
                    minor_num: 4,
                    ..Default::default()
                })
                .grid(GridSetup {
                    major_enable: true,
                    major_thickness: Thickness::VeryThick,
                    minor_enable: true,
                    minor_thickness: Thickness::Thin,
                    minor_color: "blue".into(),
                    ..Default::default()
                }),
        )
        .set_axis(YSide::Left, AxisSetup::new("left").log(true))
        .set_axis(YSide::Right, AxisSetup::new("right"))
        .set_axis(
            XSide::Top,
            AxisSetup::new("top")
                .log(true)
                .tick(TickSetup { enable: false, ..Default::default() }),
        );
        fig.add(Data::new(XSide::Bottom, YSide::Left, [0, 1, 2, 3, 4, 5], [4, 5, 4, 5, 4, 5]).unwrap());
        fig.add(
            Data::new(XSide::Bottom, YSide::Right, [0, 1, 2, 3, 4, 5], [1, 1, 2, 1, 1, 1])
                .unwrap()
                .line(LineSetup::default().line_style(LineStyle::Dotted).line_width("2")),
        );
        fig.add(
            Data::new(XSide::Top, YSide::Left, [1, 10, 100], [4, 6, 4])
                .unwrap()
                .line(LineSetup::default().marker(Marker::Square).marker_repeat(2).marker_phase(2)),
        );
        fig.add(Data::new(XSide::Top, YSide::Right, [1, 10, 100], [0, 1, 0]).unwrap());
        fig
    }

    #[test]
    fn all_four_axes() {
        let text = render(&all_axes()).unwrap();

        // padding, background and overlay per axis, four plot groups, one legend
        assert_eq!(text.matches(r"\begin{axis}").count(), 3 * 4 + 4 + 1);
        assert_eq!(text.lines().filter(|l| *l == r"\begin{axis}").count(), 4 + 1);
        for (group, id) in [("t/l", 2), ("t/r", 3), ("b/l", 0), ("b/r", 1)] {
            let start = text.find(&format!("% plot group {} %", group)).unwrap();
            let end = start + 1 + text[start + 1..].find("%\n% ").unwrap();
            let label = text.find(&format!(r"\label{{dplot:{}}}", id)).unwrap();
            assert!(start < label && label < end, "series {} is not in group {}", id, group);
        }

        assert!(text.contains("xmode=log"));
        assert!(text.contains("ymode=log"));
        // only the two series on the linear right axis are restricted
        assert_eq!(text.matches("restrict y to domain=").count(), 2);
        assert!(text.contains("  dotted,"));
        assert!(text.contains("  mark=square,"));

        let bottom = background_block(&text, AxisSide::Bottom);
        assert!(bottom.contains("xtick pos=both"));
        assert!(bottom.contains("xtick distance=1.00000000000000000000e+00"));
        assert!(bottom.contains("xmajorgrids=true"));
        assert!(bottom.contains("xminorgrids=true"));
        assert!(bottom.contains("minor grid style={thin,color=blue}"));
        assert!(bottom.contains("minor x tick num=4"));
        assert!(!bottom.contains(r"xtick=\empty"));

        let top = background_block(&text, AxisSide::Top);
        assert!(top.contains(r"xtick=\empty"));
        assert!(top.contains("xmode=log"));
        assert!(top.contains("xtick pos=top"));
        assert!(!top.contains("xminorgrids=true"));

        let left = background_block(&text, AxisSide::Left);
        assert!(left.contains("ymode=log"));
        assert!(left.contains("ytick pos=left"));
    }

    #[test]
    fn rejects_non_finite_scale() {
        for scale in [f64::NAN, f64::INFINITY] {
            let mut fig = parabola();
            fig.set_axis(YSide::Left, AxisSetup::new("y").scale(scale));
            assert!(matches!(render(&fig), Err(PlotError::InvalidConfig(_))));
        }
    }

    #[test]
    fn rejects_limits_that_overflow() {
        let mut fig = parabola();
        fig.set_axis(YSide::Left, AxisSetup::new("y").scale(f64::MAX));
        assert!(matches!(render(&fig), Err(PlotError::InvalidData(_))));

        let mut flat = Figure::new("flat");
        flat.set_axis(XSide::Bottom, AxisSetup::default())
            .set_axis(YSide::Left, AxisSetup::default());
        flat.add(Data::new(XSide::Bottom, YSide::Left, [f64::MAX, f64::MAX], [0.0, 1.0]).unwrap());
        assert!(matches!(render(&flat), Err(PlotError::InvalidData(_))));
    }

    #[test]
    fn y_domain_is_clamped_to_representable_range() {
        let mut fig = Figure::new("huge");
        fig.set_axis(XSide::Bottom, AxisSetup::default())
            .set_axis(YSide::Left, AxisSetup::default());
        fig.add(Data::new(XSide::Bottom, YSide::Left, [0.0, 1.0], [1e300, 2e300]).unwrap());
        let text = render(&fig).unwrap();
        assert!(text.contains(&format!(":{}}}", fmt_float(f64::MAX))));
        assert!(!text.contains(":inf}"));
        assert!(!text.contains("=inf"));
    }
}
