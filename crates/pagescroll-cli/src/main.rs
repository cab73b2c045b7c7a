use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "pagescroll")]
#[command(version, about = "Full-section scroll pager for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deck file to open (shorthand for `run`)
    deck: Option<PathBuf>,

    /// Configuration file path or http(s) URL
    #[arg(short, long)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a deck in the pager
    Run {
        /// Deck file: slides separated by `---` lines
        deck: PathBuf,
        /// Configuration file path or http(s) URL
        #[arg(short, long)]
        config: Option<String>,
        /// Style overlay (JSON color map) applied at startup
        #[arg(long)]
        stylesheet: Option<PathBuf>,
        /// Enable arrow-key navigation regardless of configuration
        #[arg(long)]
        arrow_nav: bool,
        /// Use the steady (overlaid) page layout regardless of configuration
        #[arg(long)]
        steady: bool,
    },
    /// Write a default configuration file
    InitConfig {
        /// Destination path
        #[arg(default_value = "config.json")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            deck,
            config,
            stylesheet,
            arrow_nav,
            steady,
        }) => commands::run::run(deck, config, stylesheet, arrow_nav, steady),
        Some(Commands::InitConfig { path }) => commands::init_config::run(&path),
        None => match cli.deck {
            Some(deck) => commands::run::run(deck, cli.config, None, false, false),
            None => {
                use clap::CommandFactory;
                Cli::command().print_help()?;
                Ok(())
            }
        },
    }
}

/// Route logs to a file: the TUI owns the terminal, so nothing may write to
/// stdout or stderr while it runs.
fn init_logging() -> Result<()> {
    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pagescroll");
    std::fs::create_dir_all(&dir)?;
    let file = std::fs::File::create(dir.join("pagescroll.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .init();
    Ok(())
}
