use anyhow::Result;
use clap::{Parser, Subcommand};
use foodwise::cli::Mode;
use std::path::PathBuf;

/// foodwise - Food Inventory Tracking
#[derive(Parser)]
#[command(name = "foodwise")]
#[command(about = "Track food inventory, expiry dates and grocery lists", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show an inventory dashboard
    Dashboard {
        /// Presentation mode (overrides config file)
        #[arg(long, value_enum)]
        mode: Option<Mode>,

        /// Filter items by name or category
        #[arg(long)]
        query: Option<String>,
    },
    /// Parse an utterance into a structured inventory item
    Parse {
        /// The transcribed phrase, e.g. "2 kg tomatoes"
        utterance: String,
    },
    /// Generate the weekly grocery list
    Grocery {
        /// Presentation mode (overrides config file)
        #[arg(long, value_enum)]
        mode: Option<Mode>,

        /// Render the printable HTML document instead of plain text
        #[arg(long)]
        print: bool,

        /// Write the rendering to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = foodwise::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    foodwise::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Dashboard { mode, query } => foodwise::cli::dashboard(config, mode, query),
        Commands::Parse { utterance } => foodwise::cli::parse_utterance(config, utterance),
        Commands::Grocery { mode, print, out } => foodwise::cli::grocery(config, mode, print, out),
    }
}
