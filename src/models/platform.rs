//! Target platform enumeration and the OS synonym table

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

/// Platform families Franklin can render templates for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Apple macOS (Homebrew)
    Macos,
    /// Debian and its derivatives (apt)
    Debian,
    /// Fedora (dnf)
    Fedora,
}

/// Identifiers treated as equivalent to each platform label
static OS_SYNONYMS: LazyLock<HashMap<&'static str, HashSet<&'static str>>> = LazyLock::new(|| {
    HashMap::from([
        ("macos", HashSet::from(["macos", "darwin"])),
        (
            "debian",
            HashSet::from([
                "debian",
                "ubuntu",
                "pop",
                "elementary",
                "linuxmint",
                "neon",
                "debian-based",
            ]),
        ),
        ("fedora", HashSet::from(["fedora"])),
    ])
});

/// Return the synonym set for a target label.
///
/// Labels outside the table match only themselves.
pub fn synonyms_for(label: &str) -> HashSet<&str> {
    match OS_SYNONYMS.get(label) {
        Some(set) => set.iter().copied().collect(),
        None => HashSet::from([label]),
    }
}

impl Platform {
    /// Returns the label used in templates and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Macos => "macos",
            Platform::Debian => "debian",
            Platform::Fedora => "fedora",
        }
    }

    /// Returns the display name for the platform
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Macos => "macOS",
            Platform::Debian => "Debian",
            Platform::Fedora => "Fedora",
        }
    }

    /// Returns all available platforms
    pub fn all() -> &'static [Platform] {
        &[Platform::Macos, Platform::Debian, Platform::Fedora]
    }

    /// Find the platform whose synonym set contains `identifier`
    pub fn from_identifier(identifier: &str) -> Option<Platform> {
        let identifier = identifier.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|p| synonyms_for(p.as_str()).contains(identifier.as_str()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
