mod cli;
mod logging;
mod output;

use anyhow::Result;
use cli::Cli;
use jmerge_core::{Config, Journal, Renderer};
use output::OutputTarget;
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("jmerge: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::new();
    logging::init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Fail on bad paths before reading anything.
    Journal::check_inputs(&cli.files)?;
    let target = OutputTarget::resolve(cli.outfile.as_deref())?;
    let journal = Journal::from_paths(&cli.files)?;

    let view = cli.view();
    info!(view = view.as_ref(), entries = journal.len(), "rendering journal");
    let renderer = Renderer::new(&journal, Some(config.render_options()));
    target.write_with(|out| renderer.write_view(view, out))?;

    Ok(())
}
