mod commands;
mod error;
mod repl;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::Context;
use crate::error::{exit_code_for, report_error};
use addrbook_config as config;
use addrbook_core::time;
use addrbook_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "addrbook", version, about = "Contacts and birthdays assistant bot")]
struct Cli {
    /// Address book file (defaults to the XDG data directory)
    #[arg(long, value_name = "FILE")]
    data_path: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    #[arg(long, short)]
    verbose: bool,
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
        verbose,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let data_path = paths::resolve_data_path(data_path.or(app_config.data_path))
        .with_context(|| "resolve data path")?;
    debug!(path = %data_path.display(), "data path resolved");

    let store = Store::open(&data_path);
    let mut book = store
        .load()
        .with_context(|| format!("load address book {}", data_path.display()))?;
    debug!(records = book.len(), "address book loaded");

    let mut ctx = Context {
        book: &mut book,
        window_days: app_config.birthday_window_days,
    };
    repl::run(&mut ctx, time::today, io::stdin().lock(), io::stdout().lock())?;

    store
        .save(&book)
        .with_context(|| format!("save address book {}", data_path.display()))?;
    debug!(records = book.len(), "address book saved");
    println!("{}", repl::FAREWELL);
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
