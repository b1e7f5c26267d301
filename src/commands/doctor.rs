use colored::Colorize;
use serde::Serialize;
use tracing::debug;

use crate::core::{franklin_version, tool_version};
use crate::error::FranklinError;
use crate::models::Paths;
use crate::ui;

/// Outcome of a single diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

/// One row of the doctor report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    pub name: String,
    pub status: CheckStatus,
    pub detail: String,
}

impl Check {
    fn new(name: &str, status: CheckStatus, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status,
            detail: detail.into(),
        }
    }
}

/// Doctor report, serialized as-is for `--json`
#[derive(Debug, Serialize)]
pub struct DoctorReport {
    pub franklin_version: String,
    pub checks: Vec<Check>,
}

/// External tools Franklin relies on: (check name, executable, display name, required)
const TOOLS: &[(&str, &str, &str, bool)] = &[
    ("Shell", "zsh", "Zsh", true),
    ("Plugin Manager", "sheldon", "Sheldon", true),
    ("Prompt", "starship", "Starship", true),
    ("Version Control", "git", "Git", false),
];

fn tool_check(name: &str, display: &str, required: bool, version: Option<String>) -> Check {
    match version {
        Some(v) => Check::new(name, CheckStatus::Ok, format!("{} {}", display, v)),
        None => {
            let status = if required {
                CheckStatus::Error
            } else {
                CheckStatus::Warning
            };
            Check::new(name, status, format!("{} not found", display))
        }
    }
}

/// Run every diagnostic against the current environment
pub fn collect_checks(paths: &Paths) -> Vec<Check> {
    let mut checks: Vec<Check> = TOOLS
        .iter()
        .map(|(name, program, display, required)| {
            let version = tool_version(program);
            debug!("{}: {:?}", program, version);
            tool_check(name, display, *required, version)
        })
        .collect();

    checks.push(if paths.root.is_dir() {
        Check::new("Franklin Root", CheckStatus::Ok, paths.root.display().to_string())
    } else {
        Check::new("Franklin Root", CheckStatus::Error, "Not found")
    });

    let config_file = paths.config_file();
    checks.push(if config_file.is_file() {
        Check::new("Config", CheckStatus::Ok, config_file.display().to_string())
    } else {
        Check::new("Config", CheckStatus::Warning, "Not created (using defaults)")
    });

    checks
}

/// Run diagnostics and print them. Always succeeds; problems are reported,
/// not raised.
pub fn run_doctor(paths: &Paths, json: bool) -> Result<(), FranklinError> {
    if !json {
        ui::print_logic("Checking Environment...");
    }

    let report = DoctorReport {
        franklin_version: franklin_version(paths),
        checks: collect_checks(paths),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let rows: Vec<(String, String)> = report
        .checks
        .iter()
        .map(|check| {
            let detail = match check.status {
                CheckStatus::Ok => check.detail.clone(),
                CheckStatus::Warning => check.detail.yellow().to_string(),
                CheckStatus::Error => check.detail.red().to_string(),
            };
            (check.name.clone(), detail)
        })
        .collect();
    ui::print_columnar(&rows);

    let problems = report
        .checks
        .iter()
        .filter(|c| c.status == CheckStatus::Error)
        .count();
    if problems == 0 {
        ui::print_success(&format!("Franklin v{} looks healthy", report.franklin_version));
    } else {
        ui::print_warning(&format!("{} check(s) need attention", problems));
    }

    Ok(())
}
