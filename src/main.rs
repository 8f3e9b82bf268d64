mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use weekcal_core::config::WeekcalConfig;

#[derive(Parser)]
#[command(name = "weekcal")]
#[command(about = "Plan a week of recurring events from the terminal")]
struct Cli {
    /// Use this config file instead of ~/.config/weekcal/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default). Events last until you quit.
    Session,
    /// Show the config path and the effective card colors
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = WeekcalConfig::load(cli.config.as_deref()).map_err(|e| anyhow::anyhow!(e))?;

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => commands::session::run(&config),
        Commands::Config => commands::config::run(&config, cli.config.as_deref()),
    }
}

/// Log to stderr, filtered by RUST_LOG when set.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
