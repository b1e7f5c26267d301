//! Reduce OS-conditional blocks in shell templates to one platform's branch.
//!
//! Used by the installer:
//! `render-os-specific --os debian --zshrc ~/.zshrc --update ~/.local/bin/update-all`

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use franklin::commands::render_templates;
use franklin::logging::init_logging;
use franklin::models::Platform;

/// Render OS-specific files
#[derive(Parser)]
#[command(name = "render-os-specific")]
#[command(version, about, long_about = None)]
struct Args {
    /// Target platform
    #[arg(long = "os", value_enum)]
    os: Platform,

    /// zshrc template; if/else blocks are rendered in place
    #[arg(long)]
    zshrc: Option<PathBuf>,

    /// Update-script template; case blocks are rendered in place
    #[arg(long)]
    update: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    render_templates(args.os, args.zshrc.as_deref(), args.update.as_deref())?;
    Ok(())
}
