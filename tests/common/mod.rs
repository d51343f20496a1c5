#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use dplot::{PlotKind, PlotSpec, Toolchain};

/// Line through (0,0) and (1,1).
pub fn diagonal() -> PlotSpec {
    PlotSpec::from_points(PlotKind::Line, &[(0.0, 0.0), (1.0, 1.0)]).name("diagonal")
}

/// True when pdflatex and the classes/packages the generated documents use are installed.
pub fn tex_available() -> bool {
    Command::new("kpsewhich")
        .args(["IEEEtran.cls", "standalone.cls", "pgfplots.sty", "siunitx.sty"])
        .output()
        .map(|out| out.status.success() && String::from_utf8_lossy(&out.stdout).lines().count() == 4)
        .unwrap_or(false)
        && Command::new("pdflatex").arg("--version").output().is_ok()
}

/// Write an executable shell script standing in for an external program.
#[cfg(unix)]
pub fn stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

pub fn toolchain_with(pdflatex: &Path) -> Toolchain {
    Toolchain {
        pdflatex: pdflatex.to_string_lossy().into_owned(),
        ..Default::default()
    }
}
