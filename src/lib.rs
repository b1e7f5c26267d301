//! Franklin - a Zsh environment manager
//!
//! Franklin keeps a Zsh setup healthy: it checks the toolchain, pulls updates
//! for the dotfiles checkout and plugins, stores the banner color and prints a
//! "message of the day". Install scripts use its template renderer to reduce
//! OS-conditional shell blocks to the branch for the target platform.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (doctor, update, config, motd, render)
//! - **core**: Template rendering, paths and config loading, host probes, MOTD layout
//! - **models**: Data structures (config store, palette, platforms)
//! - **ui**: Console output helpers
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod ui;

pub use error::{FranklinError, Result};
