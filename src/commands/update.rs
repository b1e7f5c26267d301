use std::io::IsTerminal;
use std::process::Command;
use tracing::{info, warn};

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::core::{detect_platform, run_command};
use crate::error::FranklinError;
use crate::models::{Paths, Platform};
use crate::ui;

/// Result of `franklin update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// git pull ran; carries its output lines
    Updated(Vec<String>),
    /// The user declined the confirmation prompt
    Cancelled,
}

/// Pull the latest Franklin core files
pub fn update_core(paths: &Paths, yes: bool) -> Result<UpdateOutcome, FranklinError> {
    ui::print_header("Updating Franklin Core");

    if !paths.is_git_checkout() {
        return Err(FranklinError::NotAGitRepository(paths.root.clone()));
    }

    if !yes && std::io::stderr().is_terminal() {
        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("This will pull the latest changes from the repository. Continue?")
            .default(false)
            .interact()?;
        if !proceed {
            ui::print_info("Update cancelled");
            return Ok(UpdateOutcome::Cancelled);
        }
    }

    ui::print_wait("Running git pull...");
    let root = paths.root.to_string_lossy().into_owned();
    let stdout = run_command("git", &["-C", root.as_str(), "pull"])?;
    info!("git pull completed in {}", paths.root.display());

    ui::print_success("Franklin core updated");
    let lines: Vec<String> = stdout
        .trim()
        .lines()
        .map(|line| line.to_string())
        .collect();
    for line in &lines {
        ui::print_branch(line);
    }
    Ok(UpdateOutcome::Updated(lines))
}

/// Package manager invocations that upgrade a platform's system packages
pub fn system_update_steps(platform: Platform) -> &'static [&'static [&'static str]] {
    match platform {
        Platform::Macos => &[&["brew", "update"], &["brew", "upgrade"]],
        Platform::Debian => &[
            &["sudo", "apt-get", "update"],
            &["sudo", "apt-get", "upgrade", "-y"],
        ],
        Platform::Fedora => &[&["sudo", "dnf", "upgrade", "-y"]],
    }
}

/// Run the package manager with the terminal attached so sudo can prompt
fn update_system_packages() -> Result<(), FranklinError> {
    let platform = match detect_platform() {
        Some(p) => p,
        None => {
            ui::print_warning("Unsupported platform, skipping system package update");
            return Ok(());
        }
    };
    info!("Updating system packages for {}", platform.display_name());

    for step in system_update_steps(platform) {
        let command_line = step.join(" ");
        ui::print_branch(&format!("$ {}", command_line));
        let status = Command::new(step[0]).args(&step[1..]).status().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FranklinError::CommandNotFound {
                    command: step[0].to_string(),
                }
            } else {
                FranklinError::Io(e)
            }
        })?;
        if !status.success() {
            return Err(FranklinError::CommandFailed {
                command: command_line,
                stderr: format!("exited with {}", status),
            });
        }
    }
    Ok(())
}

/// Update Franklin core, Sheldon plugins and optionally system packages.
///
/// Each step reports its own failure and the run continues with the next.
pub fn update_all(paths: &Paths, yes: bool, system: bool) -> Result<(), FranklinError> {
    ui::print_header("Running update-all");

    ui::print_branch("Updating Franklin core...");
    if let Err(e) = update_core(paths, yes) {
        warn!("Core update failed: {}", e);
        ui::print_error(&format!("Failed to update Franklin core: {}", e));
    }

    ui::print_branch("Updating Sheldon plugins...");
    match run_command("sheldon", &["lock", "--update"]) {
        Ok(_) => ui::print_success("Sheldon plugins updated"),
        Err(FranklinError::CommandNotFound { .. }) => {
            ui::print_warning("Sheldon not found, skipping plugin update")
        }
        Err(e) => ui::print_warning(&format!("Failed to update Sheldon plugins: {}", e)),
    }

    if system {
        ui::print_branch("Updating system packages...");
        match update_system_packages() {
            Ok(()) => ui::print_success("System packages updated"),
            Err(e) => ui::print_warning(&format!("System package update failed: {}", e)),
        }
    }

    ui::print_success("Update complete");
    Ok(())
}
