use std::io::{self, Write};

use clap::Parser;
use pomodoro_core::{CancellationToken, CycleEngine, RunOutcome, SessionConfig};
use tracing_subscriber::EnvFilter;

mod terminal;

use terminal::{SignalSleeper, TerminalReporter};

/// Interactive Pomodoro timer: prompts for work minutes, break minutes and
/// the number of cycles, then counts each step down in the terminal.
/// Press Ctrl+C to stop early; leave a prompt blank to keep its default.
#[derive(Parser)]
#[command(name = "pomodoro", version, about)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    // Diagnostics go to stderr so they never tear the countdown line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout();
    write!(
        stdout,
        "\n=== Pomodoro Timer ===\n\n\
         A 'Pomodoro' is one work session followed by a short break.\n\n"
    )?;

    let config = SessionConfig::prompt(&mut io::stdin().lock(), &mut stdout);

    // Ctrl+C keeps its default behaviour during the prompts.
    let cancel = CancellationToken::new();
    let sleeper = SignalSleeper::install(cancel.clone())?;
    let reporter = TerminalReporter::new(io::stdout());
    let mut engine = CycleEngine::new(stdout, reporter, sleeper, cancel);

    match engine.run(config.plan())? {
        RunOutcome::Finished => tracing::debug!("all cycles completed"),
        RunOutcome::Stopped => tracing::debug!("stopped by user"),
    }
    Ok(())
}
