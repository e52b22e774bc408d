use clap::{ArgGroup, Parser};
use jmerge_core::View;
use std::path::PathBuf;

/// jmerge — Merge chronological journal files
///
/// Journal files are plain text where each entry starts with a date and an
/// underline:
///
///   01 May 2013
///   -----------
///
///   Bla bla bla
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    verbatim_doc_comment,
    group(ArgGroup::new("view").args(["html", "summary", "dates"])),
)]
pub struct Cli {
    /// Journal files to merge.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
    /// Output file (`-` for stdout). An existing file is never overwritten.
    #[arg(long, short)]
    pub outfile: Option<PathBuf>,
    /// Output in HTML format.
    #[arg(long)]
    pub html: bool,
    /// Output a summary, abridging long entries.
    #[arg(long)]
    pub summary: bool,
    /// Output dates only.
    #[arg(long)]
    pub dates: bool,
    /// Config file to use instead of `~/.config/jmerge/config.toml`.
    #[arg(long, short, env = "JMERGE_CONFIG")]
    pub config: Option<PathBuf>,
    /// Log more (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }

    pub fn view(&self) -> View {
        if self.html {
            View::Html
        } else if self.summary {
            View::Summary
        } else if self.dates {
            View::Dates
        } else {
            View::Plain
        }
    }
}
