//! dplot: pgfplots figures from plain data.
//!
//! ```no_run
//! # async fn demo() -> dplot::PlotResult<()> {
//! use dplot::{PlotKind, PlotSpec, Toolchain};
//!
//! let spec = PlotSpec::from_points(PlotKind::Line, &[(0.0, 0.0), (1.0, 1.0)]).labels("$t$", "$u$");
//! let pdf = dplot::render(&spec, "figures", &Toolchain::default()).await?;
//! println!("{}", pdf.display());
//! # Ok(())
//! # }
//! ```

pub mod compiler;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod figure;
pub mod markup;
pub mod spec;

pub use compiler::{CompilationResult, Toolchain};
pub use config::Config;
pub use document::MarkupDocument;
pub use error::{ErrorKind, PlotError, PlotResult};
pub use export::ExportType;
pub use figure::{
    AxisSetup, AxisSide, Color, Data, Figure, GridSetup, LegendSetup, LineSetup, LineStyle, Marker,
    TickSetup, Thickness, XSide, YSide,
};
pub use spec::{render, PlotKind, PlotSpec};
