//! Egress CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "egress")]
#[command(about = "Escape-route networks and their maximum flows", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Shell configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from standard input (the default)
    Repl,
    /// Execute the commands in a script file
    Run {
        /// Script with one command per line
        script: PathBuf,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output on stdout stays clean
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("egress={log_level}")));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Egress v{}", env!("CARGO_PKG_VERSION"));

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => commands::repl(cli.config.as_deref()),
        Commands::Run { script } => commands::run_script(&script, cli.config.as_deref()),
        Commands::Version => {
            println!("Egress v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
