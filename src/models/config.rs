use std::fs;
use std::path::{Path, PathBuf};

use crate::models::palette::default_color;

/// Name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.env";

/// The only key Franklin stores
const MOTD_COLOR_KEY: &str = "MOTD_COLOR";

/// Filesystem locations Franklin works with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Franklin checkout (dotfiles repository)
    pub root: PathBuf,
    /// Directory holding config.env
    pub config_dir: PathBuf,
}

impl Paths {
    pub fn new(root: impl Into<PathBuf>, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config_dir: config_dir.into(),
        }
    }

    /// Path to config.env
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Path to the VERSION file at the Franklin root
    pub fn version_file(&self) -> PathBuf {
        self.root.join("VERSION")
    }

    /// Whether the Franklin root is a git checkout
    pub fn is_git_checkout(&self) -> bool {
        self.root.join(".git").exists()
    }
}

/// Configuration loaded from config.env
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Hex color for the MOTD banner
    pub motd_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            motd_color: default_color().hex.to_string(),
        }
    }
}

impl Config {
    /// Parse config.env contents. Unknown lines are ignored.
    pub fn parse(contents: &str) -> Self {
        let mut config = Self::default();
        for line in contents.lines() {
            if let Some(value) = line
                .strip_prefix(MOTD_COLOR_KEY)
                .and_then(|rest| rest.strip_prefix('='))
            {
                config.motd_color = value.trim().trim_matches('"').to_string();
                break;
            }
        }
        config
    }

    /// Serialize to the config.env format
    pub fn to_env_string(&self) -> String {
        format!("{}=\"{}\"\n", MOTD_COLOR_KEY, self.motd_color)
    }

    /// Load config from a file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        Ok(Self::parse(&contents))
    }

    /// Load config.env from the given directory, using defaults when absent
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write config.env into the given directory, creating it if needed
    pub fn save_to_dir(&self, dir: &Path) -> Result<PathBuf, ConfigError> {
        fs::create_dir_all(dir).map_err(|e| ConfigError::WriteError(dir.to_path_buf(), e))?;
        let config_path = dir.join(CONFIG_FILE_NAME);
        fs::write(&config_path, self.to_env_string())
            .map_err(|e| ConfigError::WriteError(config_path.clone(), e))?;
        Ok(config_path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to write config file {0}: {1}")]
    WriteError(PathBuf, std::io::Error),
    #[error("Could not determine the home directory")]
    HomeDirNotFound,
}
