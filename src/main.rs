use clap::{Parser, Subcommand};
use colored::Colorize;

use franklin::commands::{configure, run_doctor, show_motd, update_all, update_core};
use franklin::core::resolve_paths;
use franklin::logging::init_logging;
use franklin::FranklinError;

/// Franklin - a modern Zsh environment manager with cross-platform support
#[derive(Parser)]
#[command(name = "franklin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run diagnostic checks on the Franklin environment
    Doctor {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Update Franklin core files from the repository
    Update {
        /// Skip confirmation prompts
        #[arg(short, long)]
        yes: bool,
    },

    /// Update Franklin core, plugins, and optionally system packages
    UpdateAll {
        /// Skip confirmation prompts
        #[arg(short, long)]
        yes: bool,

        /// Also update system packages (requires sudo)
        #[arg(long)]
        system: bool,
    },

    /// Configure Franklin settings interactively or via flags
    Config {
        /// Set MOTD color (Campfire color name or #rrggbb)
        #[arg(long)]
        color: Option<String>,
    },

    /// Display the Message of the Day banner
    Motd {
        /// Banner width (defaults to $COLUMNS, clamped to 40-80)
        #[arg(long)]
        width: Option<usize>,
    },
}

fn run(cli: Cli) -> Result<(), FranklinError> {
    let paths = resolve_paths()?;

    match cli.command {
        Commands::Doctor { json } => run_doctor(&paths, json),
        Commands::Update { yes } => update_core(&paths, yes).map(|_| ()),
        Commands::UpdateAll { yes, system } => update_all(&paths, yes, system),
        Commands::Config { color } => configure(&paths, color),
        Commands::Motd { width } => show_motd(&paths, width),
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
