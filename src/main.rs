//! Folio - headless driver for the portfolio page controller
//!
//! Replays scripted page sessions, manages the stored theme preference and
//! the configuration file.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::cli::{CheckEmailArgs, CliResult, ConfigArgs, ExitCode, RunArgs, ThemeArgs};

/// Folio - headless driver for the portfolio page controller
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scripted session and print the final page state
    Run(RunArgs),
    /// Manage the stored theme preference
    Theme(ThemeArgs),
    /// Check an address against the contact form's email rule
    CheckEmail(CheckEmailArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Run(args) => args.execute(),
            Self::Theme(args) => args.execute(),
            Self::CheckEmail(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command.execute() {
        Ok(()) => std::process::exit(ExitCode::Success.code()),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(err.exit_code().code());
        }
    }
}
