use std::{
    collections::HashMap,
    env,
    fs,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use directories::BaseDirs;

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    pub config_path: PathBuf,
}

impl Config {
    /// Defaults, overlaid by `.dplotrc`, overlaid by the environment.
    pub fn load() -> Self {
        Self::load_from(&default_config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        let mut map = default_map();

        if config_path.exists() {
            if let Ok(file) = fs::File::open(config_path) {
                let reader = BufReader::new(file);
                for line in reader.lines().map_while(Result::ok) {
                    if let Some((k, v)) = parse_line(&line) {
                        map.insert(k, v);
                    }
                }
            }
        }

        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self {
            inner: map,
            config_path: config_path.to_path_buf(),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).cloned()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), value.into());
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.parse::<u64>().ok())
    }

    pub fn get_path(&self, key: &str) -> Option<PathBuf> {
        self.get(key).filter(|v| !v.is_empty()).map(PathBuf::from)
    }

    /// Directory artifacts are written to when the CLI gets no `--out-dir`.
    pub fn output_dir(&self) -> PathBuf {
        self.get_path("DPLOT_OUTPUT_DIR").unwrap_or_else(|| PathBuf::from("."))
    }
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    line.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
}

fn is_config_key(k: &str) -> bool {
    const KEYS: &[&str] = &[
        "DPLOT_PDFLATEX",
        "DPLOT_PDF2SVG",
        "DPLOT_SCOUR",
        "DPLOT_LATEX_PASSES",
        "DPLOT_COMPILE_TIMEOUT",
        "DPLOT_OUTPUT_DIR",
    ];

    KEYS.contains(&k)
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("dplot").join(".dplotrc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();

    // Programs
    m.insert("DPLOT_PDFLATEX".into(), "pdflatex".into());
    m.insert("DPLOT_PDF2SVG".into(), "pdf2svg".into());
    m.insert("DPLOT_SCOUR".into(), "scour".into());

    // Numbers
    m.insert("DPLOT_LATEX_PASSES".into(), "2".into());
    m.insert("DPLOT_COMPILE_TIMEOUT".into(), "60".into());

    m.insert("DPLOT_OUTPUT_DIR".into(), ".".into());

    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_rc_lines() {
        assert_eq!(parse_line("  # comment"), None);
        assert_eq!(parse_line(""), None);
        assert_eq!(
            parse_line("DPLOT_PDFLATEX = /opt/tex/bin/pdflatex"),
            Some(("DPLOT_PDFLATEX".into(), "/opt/tex/bin/pdflatex".into()))
        );
    }

    #[test]
    fn rc_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# toolchain").unwrap();
        writeln!(file, "DPLOT_SCOUR=/usr/local/bin/scour").unwrap();
        let cfg = Config::load_from(file.path());
        if env::var("DPLOT_SCOUR").is_err() {
            assert_eq!(cfg.get("DPLOT_SCOUR").as_deref(), Some("/usr/local/bin/scour"));
        }
        if env::var("DPLOT_LATEX_PASSES").is_err() {
            assert_eq!(cfg.get_u64("DPLOT_LATEX_PASSES"), Some(2));
        }
        assert_eq!(cfg.config_path.as_path(), file.path());
    }

    #[test]
    fn missing_rc_file_keeps_defaults() {
        let mut cfg = Config::load_from(Path::new("/nonexistent/dplot/.dplotrc"));
        cfg.set("DPLOT_OUTPUT_DIR", "");
        assert_eq!(cfg.output_dir(), PathBuf::from("."));
        cfg.set("DPLOT_OUTPUT_DIR", "figures");
        assert_eq!(cfg.output_dir(), PathBuf::from("figures"));
    }
}
