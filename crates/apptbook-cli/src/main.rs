mod commands;
mod data;
mod error;
mod render;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, find, list, shell, Context};
use crate::error::{exit_code_for, report_error};
use apptbook_config as config;

#[derive(Debug, Parser)]
#[command(name = "apptbook", version, about = "apptbook CLI")]
struct Cli {
    #[arg(long, global = true)]
    data_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    /// Find persons: find [o/OPTION] KEYWORD [MORE_KEYWORDS]...
    Find(find::FindArgs),
    /// Find appointments by name
    #[command(name = "find-appt")]
    FindAppt(find::FindArgs),
    /// List all persons
    List,
    /// List all appointments
    #[command(name = "list-appt")]
    ListAppt,
    /// Read commands from stdin until `exit`
    Shell,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        data_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    if let Command::Completions(args) = command {
        return completions::emit(args);
    }

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) if path.exists() => debug!(path = %path.display(), "config resolved"),
            Ok(path) => debug!(path = %path.display(), "config missing, using defaults"),
            Err(err) => debug!(error = %err, "config unavailable"),
        }
    }

    let data_path = config::resolve_data_path(data_path, &app_config)
        .with_context(|| "resolve data path")?;
    debug!(path = %data_path.display(), "data path resolved");

    let book = data::load_address_book(&data_path)
        .with_context(|| format!("load address book {}", data_path.display()))?;

    let mut ctx = Context {
        book,
        json,
        ui: app_config.ui,
    };

    match command {
        Command::Find(args) => find::find_persons(&mut ctx, args),
        Command::FindAppt(args) => find::find_appointments(&mut ctx, args),
        Command::List => list::list_persons(&mut ctx),
        Command::ListAppt => list::list_appointments(&mut ctx),
        Command::Shell => shell::run_shell(&mut ctx),
        Command::Completions(_) => unreachable!("completions handled before loading data"),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
