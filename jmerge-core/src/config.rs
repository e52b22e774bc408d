use crate::journal::format_utils::SummaryLimits;
use crate::render::RenderOptions;
use anyhow::{Context, Result, bail};
use directories::BaseDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `<title>` of the HTML view. Default is "Journal".
    pub html_title: String,
    /// Summary view limits. Default abridges entries of 12+ lines to 6 + 3.
    pub summary: SummaryLimits,
}

impl Default for Config {
    fn default() -> Self {
        let render = RenderOptions::default();
        Self {
            html_title: render.html_title,
            summary: render.summary,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    html_title: Option<String>,
    summary: Option<FileSummary>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSummary {
    abridge_at: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl Config {
    /// Loads the first config file found in the standard locations, falling
    /// back to defaults when there is none.
    pub fn load() -> Result<Self> {
        match Self::config_file_paths().into_iter().find(|p| p.exists()) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads an explicit config file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let file_config =
            Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()))?;
        Self::from_file_config(file_config).with_context(|| format!("invalid {}", path.display()))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            html_title: self.html_title.clone(),
            summary: self.summary,
        }
    }

    /// Candidate config files: `~/.config/jmerge/config.toml`, then the
    /// platform config dir (e.g. `~/Library/Application Support/jmerge/config.toml`).
    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("jmerge")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("jmerge").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    /// Applies defaults to missing keys and validates the summary limits.
    fn from_file_config(file_config: FileConfig) -> Result<Self> {
        let defaults = SummaryLimits::default();
        let summary = file_config.summary.unwrap_or_default();
        let summary = SummaryLimits {
            abridge_at: summary.abridge_at.unwrap_or(defaults.abridge_at),
            head: summary.head.unwrap_or(defaults.head),
            tail: summary.tail.unwrap_or(defaults.tail),
        };
        if summary.head + summary.tail >= summary.abridge_at {
            bail!(
                "summary.head + summary.tail ({}) must be smaller than summary.abridge_at ({})",
                summary.head + summary.tail,
                summary.abridge_at
            );
        }

        Ok(Self {
            html_title: file_config
                .html_title
                .unwrap_or_else(|| Config::default().html_title),
            summary,
        })
    }
}
