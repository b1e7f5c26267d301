//! Best-effort host introspection: tool versions, hostname, address, OS and
//! memory. Every probe degrades to a placeholder instead of failing.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::net::UdpSocket;
use std::process::Command;
use tracing::debug;

use crate::error::FranklinError;
use crate::models::Platform;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Run a program to completion and return its stdout.
///
/// A missing executable or a non-zero exit becomes an error carrying stderr.
pub fn run_command(program: &str, args: &[&str]) -> Result<String, FranklinError> {
    let command_line = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");
    debug!("$ {}", command_line);

    let output = Command::new(program).args(args).output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FranklinError::CommandNotFound {
                command: program.to_string(),
            }
        } else {
            FranklinError::Io(e)
        }
    })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(FranklinError::CommandFailed {
            command: command_line,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Extract the version from `<tool> --version` output.
///
/// Takes the first token on the first line that starts with a digit, so both
/// `zsh 5.9 (x86_64-apple-darwin23.0)` and `git version 2.43.0` work.
pub fn parse_version_output(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .next()?
        .split_whitespace()
        .find(|token| token.starts_with(|c: char| c.is_ascii_digit()))
        .map(|token| token.to_string())
}

/// Version of a tool on PATH, or None when it is missing or fails
pub fn tool_version(program: &str) -> Option<String> {
    let path = which::which(program).ok()?;
    let path = path.to_string_lossy();
    match run_command(&path, &["--version"]) {
        Ok(stdout) => parse_version_output(&stdout),
        Err(e) => {
            debug!("{} --version failed: {}", program, e);
            None
        }
    }
}

/// Parse `/etc/os-release` style `KEY=value` lines
pub fn parse_os_release(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .filter_map(|line| line.trim().split_once('='))
        .filter(|(key, _)| !key.is_empty() && !key.starts_with('#'))
        .map(|(key, value)| (key.to_string(), value.trim_matches('"').to_string()))
        .collect()
}

/// `NAME VERSION_ID` from os-release fields
pub fn describe_os_release(fields: &HashMap<String, String>) -> String {
    let name = fields.get("NAME").map(String::as_str).unwrap_or("Linux");
    match fields.get("VERSION_ID").filter(|v| !v.is_empty()) {
        Some(version) => format!("{} {}", name, version),
        None => name.to_string(),
    }
}

/// Map os-release `ID`, then `ID_LIKE`, onto a supported platform
pub fn platform_from_os_release(fields: &HashMap<String, String>) -> Option<Platform> {
    let id = fields.get("ID").into_iter().flat_map(|v| v.split_whitespace());
    let id_like = fields
        .get("ID_LIKE")
        .into_iter()
        .flat_map(|v| v.split_whitespace());
    id.chain(id_like).find_map(Platform::from_identifier)
}

/// Platform of the machine Franklin is running on
pub fn detect_platform() -> Option<Platform> {
    if cfg!(target_os = "macos") {
        return Some(Platform::Macos);
    }
    let contents = fs::read_to_string("/etc/os-release").ok()?;
    platform_from_os_release(&parse_os_release(&contents))
}

/// Memory in use versus installed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    pub used_bytes: u64,
    pub total_bytes: u64,
}

impl MemoryUsage {
    pub fn percent(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        self.used_bytes as f64 * 100.0 / self.total_bytes as f64
    }
}

impl fmt::Display for MemoryUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}GB / {:.1}GB ({:.0}%)",
            self.used_bytes as f64 / GIB,
            self.total_bytes as f64 / GIB,
            self.percent()
        )
    }
}

/// Parse `/proc/meminfo`; used memory is total minus available
pub fn parse_meminfo(contents: &str) -> Option<MemoryUsage> {
    let field_kb = |name: &str| -> Option<u64> {
        contents
            .lines()
            .find_map(|line| line.strip_prefix(name)?.strip_prefix(':'))
            .and_then(|rest| rest.split_whitespace().next())
            .and_then(|kb| kb.parse().ok())
    };
    let total = field_kb("MemTotal")? * 1024;
    let available = field_kb("MemAvailable")
        .or_else(|| field_kb("MemFree"))
        .map(|kb| kb * 1024)?;
    Some(MemoryUsage {
        used_bytes: total.saturating_sub(available),
        total_bytes: total,
    })
}

/// Parse macOS `vm_stat` output given the installed memory.
///
/// Free, inactive and speculative pages count as available.
pub fn parse_vm_stat(contents: &str, total_bytes: u64) -> Option<MemoryUsage> {
    let page_size: u64 = contents
        .lines()
        .next()?
        .split("page size of ")
        .nth(1)?
        .split_whitespace()
        .next()?
        .parse()
        .ok()?;
    let pages = |name: &str| -> u64 {
        contents
            .lines()
            .find_map(|line| line.strip_prefix(name))
            .and_then(|rest| rest.trim().trim_end_matches('.').parse().ok())
            .unwrap_or(0)
    };
    let available = (pages("Pages free:") + pages("Pages inactive:") + pages("Pages speculative:"))
        * page_size;
    Some(MemoryUsage {
        used_bytes: total_bytes.saturating_sub(available),
        total_bytes,
    })
}

fn memory_usage() -> Option<MemoryUsage> {
    if cfg!(target_os = "macos") {
        let total: u64 = run_command("sysctl", &["-n", "hw.memsize"])
            .ok()?
            .trim()
            .parse()
            .ok()?;
        let vm_stat = run_command("vm_stat", &[]).ok()?;
        parse_vm_stat(&vm_stat, total)
    } else {
        parse_meminfo(&fs::read_to_string("/proc/meminfo").ok()?)
    }
}

fn hostname() -> String {
    hostname::get()
        .map(|name| name.to_string_lossy().trim().to_string())
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Address of the interface that routes to the internet. Connecting a UDP
/// socket only selects a route; nothing is sent.
fn primary_ip() -> String {
    UdpSocket::bind("0.0.0.0:0")
        .and_then(|socket| {
            socket.connect("8.8.8.8:80")?;
            socket.local_addr()
        })
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|e| {
            debug!("Could not determine primary IP: {}", e);
            "0.0.0.0".to_string()
        })
}

fn os_description() -> String {
    if cfg!(target_os = "macos") {
        match run_command("sw_vers", &["-productVersion"]) {
            Ok(version) => format!("macOS {}", version.trim()),
            Err(_) => "macOS (version unknown)".to_string(),
        }
    } else if cfg!(target_os = "linux") {
        match fs::read_to_string("/etc/os-release") {
            Ok(contents) => describe_os_release(&parse_os_release(&contents)),
            Err(_) => "Linux (unknown distribution)".to_string(),
        }
    } else {
        std::env::consts::OS.to_string()
    }
}

/// Facts shown in the MOTD banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemStats {
    pub hostname: String,
    pub ip_address: String,
    pub franklin_version: String,
    pub os: String,
    pub memory: String,
}

impl SystemStats {
    /// Gather stats from the running host
    pub fn gather(franklin_version: String) -> Self {
        let memory = memory_usage()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Self {
            hostname: hostname(),
            ip_address: primary_ip(),
            franklin_version,
            os: os_description(),
            memory,
        }
    }
}
