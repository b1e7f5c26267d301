//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway Franklin install: a root checkout and a config directory
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub root: PathBuf,
    pub config_dir: PathBuf,
}

/// Create a Franklin root with a VERSION file and an empty config directory
pub fn create_test_env(version: &str) -> TestEnv {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path().join("franklin");
    let config_dir = temp_dir.path().join("config");

    fs::create_dir_all(&root).expect("Failed to create franklin root");
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");
    fs::write(root.join("VERSION"), format!("{}\n", version)).expect("Failed to write VERSION");

    TestEnv {
        temp_dir,
        root,
        config_dir,
    }
}

/// Write a template file and return its path
pub fn write_template(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write template");
    path
}

/// A zshrc with one single-bracket and one double-bracket OS block
pub const ZSHRC_TEMPLATE: &str = "\
# franklin zshrc
export EDITOR=vim
if [ \"$OS_FAMILY\" = \"macos\" ]; then
    export HOMEBREW_PREFIX=/opt/homebrew
else
    export LINUXBREW=0
fi
if [[ \"$OS_FAMILY\" == \"macos\" || \"$OS_FAMILY\" == \"darwin\" ]]; then
    alias ls='ls -G'
else
    alias ls='ls --color=auto'
fi
source ~/.config/franklin/config.env
";

/// An update script with one case block keyed on OS_FAMILY
pub const UPDATE_TEMPLATE: &str = "\
#!/usr/bin/env zsh
case \"$OS_FAMILY\" in
  macos)
    brew update
    ;;
  debian)
    sudo apt-get update
    ;;
  fedora|rhel)
    sudo dnf upgrade
    ;;
  *)
    echo unsupported
    ;;
esac
echo done
";
