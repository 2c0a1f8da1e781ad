mod cli;
mod commands;
mod render;

use std::io::Write;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use eyre::WrapErr;

use smartnotes_core::{NoteStore, StorePaths};

fn main() -> eyre::Result<ExitCode> {
    let args = cli::Cli::parse();

    // Logs go to stderr so they never interleave with command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_level(true)
        .init();

    let Some(command) = args.command else {
        cli::Cli::command().print_help().context("print help")?;
        return Ok(ExitCode::SUCCESS);
    };

    let paths = StorePaths::resolve(args.data_dir.as_deref())
        .context("resolve SmartNotes data directory")?;
    tracing::debug!(path = %paths.notes_file.display(), "using notes file");

    let mut store = NoteStore::open(paths);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for warning in store.load_warnings() {
        writeln!(out, "Warning: {warning}").context("write to stdout")?;
    }

    let outcome = commands::run(command, &mut store, &mut out).context("write to stdout")?;
    out.flush().context("flush stdout")?;

    Ok(match outcome {
        commands::Outcome::Success => ExitCode::SUCCESS,
        commands::Outcome::Failure => ExitCode::FAILURE,
    })
}
