//! Wochenplaner CLI — recipes, week plans, shopping lists.

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "wochenplaner",
    version,
    about = "Household meal planner — recipe catalog, week plan, shopping list, printable A4 summary"
)]
struct Cli {
    /// Path to wochenplaner.yaml
    #[arg(short, long, global = true, default_value = "wochenplaner.yaml")]
    config: PathBuf,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: wochenplaner::cli::Commands,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(e) = wochenplaner::cli::dispatch(cli.command, &cli.config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
