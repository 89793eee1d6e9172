use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "betterrest", version, about = "BetterRest bedtime calculator")]
struct Cli {
    /// Config file to use instead of ~/.config/betterrest/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log model loading and predictions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the ideal bedtime
    Estimate(commands::estimate::EstimateArgs),
    /// Show the bedtime for every sleep amount
    Sweep(commands::sweep::SweepArgs),
    /// Adjust inputs line by line and see the bedtime update
    Interactive(commands::interactive::InteractiveArgs),
    /// Inspect model artifacts
    Model {
        #[command(subcommand)]
        action: commands::model::ModelAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config;
    let result = match cli.command {
        Commands::Estimate(args) => commands::estimate::run(args, config_path),
        Commands::Sweep(args) => commands::sweep::run(args, config_path),
        Commands::Interactive(args) => commands::interactive::run(args, config_path),
        Commands::Model { action } => commands::model::run(action, config_path),
        Commands::Config { action } => commands::config::run(action, config_path),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
