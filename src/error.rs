//! Error types for figure generation, document assembly and compilation.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::figure::AxisSide;

/// Coarse classification of a [`PlotError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The figure or its data was rejected before anything was written.
    Generation,
    /// Reading or writing a file failed.
    Filesystem,
    /// The external toolchain was missing, timed out or failed.
    Compiler,
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("x and y data differ in length ({x} vs {y})")]
    LengthMismatch { x: usize, y: usize },

    #[error("empty data set")]
    EmptyData,

    #[error("non-finite {axis} value {value} at index {index}")]
    NonFinite {
        axis: &'static str,
        index: usize,
        value: f64,
    },

    #[error("series {id} references the {side} axis, which is not set up")]
    UndefinedAxis { id: usize, side: AxisSide },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("at least one export type is required")]
    NoExportType,

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} not found, is it installed and on PATH?")]
    CompilerNotFound { program: String },

    #[error("{program} did not finish within {}s", .timeout.as_secs())]
    CompilerTimeout { program: String, timeout: Duration },

    #[error("{program} failed ({}): {reason}\n{log}", exit_label(.status))]
    CompilationFailed {
        program: String,
        status: Option<i32>,
        reason: String,
        log: String,
    },
}

fn exit_label(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl PlotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlotError::Io { .. } => ErrorKind::Filesystem,
            PlotError::CompilerNotFound { .. }
            | PlotError::CompilerTimeout { .. }
            | PlotError::CompilationFailed { .. } => ErrorKind::Compiler,
            _ => ErrorKind::Generation,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlotError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for dplot operations.
pub type PlotResult<T> = Result<T, PlotError>;
