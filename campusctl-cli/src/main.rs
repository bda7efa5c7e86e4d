//! campusctl CLI - campus portal listings and submissions
//!
//! This is the main entry point for the campusctl command-line tool, which provides:
//! - Lost-and-found listings with free-text search and category filtering (`items` subcommand)
//! - The notice board, pinned-first and newest-first (`notices` subcommand)
//! - Lost/found item reporting (`report` subcommand)
//! - Account signup capture (`signup` subcommand)
//! - Shell completion generation (`completions` subcommand)

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};

mod commands;
mod config;
mod render;
mod tracing_setup;

use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "campusctl",
    author,
    version,
    about = "Campus portal from the terminal: lost and found, notices, signup",
    long_about = "Query the campus lost-and-found and notice board from static or \
                  file-backed record collections, and capture signup/report form \
                  submissions."
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding items.json / notices.json overrides.
    #[arg(long = "data-dir", global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG wins when set).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search and list lost-and-found items
    Items(commands::items::ItemsArgs),
    /// Search and list campus notices (pinned first, then newest first)
    Notices(commands::notices::NoticesArgs),
    /// Report a lost or found item
    Report(commands::report::ReportArgs),
    /// Create a portal account
    Signup(commands::signup::SignupArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

fn main() -> Result<()> {
    let Cli {
        config,
        data_dir,
        debug,
        command,
    } = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug })?;

    if let Commands::Completions(args) = &command {
        generate(args.shell, &mut Cli::command(), "campusctl", &mut io::stdout());
        return Ok(());
    }

    let mut resolved = Config::load(config.as_deref())?;
    resolved.apply_cli(data_dir.as_deref());

    match command {
        Commands::Items(args) => commands::items::run(&args, &resolved),
        Commands::Notices(args) => commands::notices::run(&args, &resolved),
        Commands::Report(args) => commands::report::run(&args),
        Commands::Signup(args) => commands::signup::run(&args),
        Commands::Completions(_) => unreachable!("handled above"),
    }
}
