use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scrolly_core::{AppConfig, Storyboard};

mod commands;

#[derive(Parser)]
#[command(name = "scrolly")]
#[command(author, version, about = "Preview and inspect scroll-driven image sequence storyboards")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Preview a storyboard in the terminal
    Run {
        /// Storyboard file (defaults to the configured one, then the built-in sample)
        #[arg(short, long)]
        storyboard: Option<PathBuf>,
        /// Start in continuous (document scroll) mode regardless of width
        #[arg(short, long)]
        continuous: bool,
    },
    /// Validate a storyboard and print a summary
    Check {
        #[arg(short, long)]
        storyboard: Option<PathBuf>,
    },
    /// List the flattened frame catalog
    Frames {
        #[arg(short, long)]
        storyboard: Option<PathBuf>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Write the sample storyboard and a default config
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // The TUI owns the terminal, so its logs go to a file
    let to_file = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, to_file)?;

    match cli.command {
        Some(Commands::Run {
            storyboard,
            continuous,
        }) => {
            let storyboard = load_storyboard(&config, storyboard.as_deref())?;
            commands::run::run(&config, &storyboard, continuous)
        }
        None => {
            let storyboard = load_storyboard(&config, None)?;
            commands::run::run(&config, &storyboard, false)
        }
        Some(Commands::Check { storyboard }) => {
            let storyboard = load_storyboard(&config, storyboard.as_deref())?;
            commands::check::run(&config, &storyboard)
        }
        Some(Commands::Frames { storyboard, json }) => {
            let storyboard = load_storyboard(&config, storyboard.as_deref())?;
            commands::frames::run(&config, &storyboard, json)
        }
        Some(Commands::Init { force }) => commands::init::run(&config, force),
    }
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

/// Explicit path, then the configured storyboard, then the built-in sample
fn load_storyboard(config: &AppConfig, path: Option<&std::path::Path>) -> Result<Storyboard> {
    let path = path.map(PathBuf::from).or_else(|| config.storyboard_path());
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading storyboard");
            Storyboard::load(&path)
                .with_context(|| format!("Failed to load storyboard {}", path.display()))
        }
        None => {
            tracing::info!("Using the built-in sample storyboard");
            Ok(Storyboard::sample()?)
        }
    }
}
