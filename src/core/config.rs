use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::models::{Config, ConfigError, Paths};

/// Overrides the Franklin checkout location
pub const ROOT_ENV: &str = "FRANKLIN_ROOT";
/// Overrides the directory holding config.env
pub const CONFIG_DIR_ENV: &str = "FRANKLIN_CONFIG_DIR";

/// Resolve Franklin's paths from the environment and the user's home directory
pub fn resolve_paths() -> Result<Paths, ConfigError> {
    paths_from(
        env::var_os(ROOT_ENV),
        env::var_os(CONFIG_DIR_ENV),
        dirs::home_dir(),
    )
}

fn paths_from(
    root: Option<OsString>,
    config_dir: Option<OsString>,
    home: Option<PathBuf>,
) -> Result<Paths, ConfigError> {
    let non_empty = |value: Option<OsString>| value.filter(|v| !v.is_empty()).map(PathBuf::from);
    let home_join = |rel: &str| {
        home.as_ref()
            .map(|h| h.join(rel))
            .ok_or(ConfigError::HomeDirNotFound)
    };

    let root = match non_empty(root) {
        Some(path) => path,
        None => home_join(".local/share/franklin")?,
    };
    let config_dir = match non_empty(config_dir) {
        Some(path) => path,
        None => home_join(".config/franklin")?,
    };

    debug!(
        "Franklin root: {}, config dir: {}",
        root.display(),
        config_dir.display()
    );
    Ok(Paths::new(root, config_dir))
}

/// Load config.env, falling back to defaults if it cannot be read
pub fn load_config(paths: &Paths) -> Config {
    match Config::load_from_dir(&paths.config_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; using default settings", e);
            Config::default()
        }
    }
}

/// Franklin version from the VERSION file at the root, else the crate version
pub fn franklin_version(paths: &Paths) -> String {
    fs::read_to_string(paths.version_file())
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string())
}
