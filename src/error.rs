use std::path::PathBuf;
use thiserror::Error;

use crate::models::ConfigError;

/// Main error type for Franklin
#[derive(Error, Debug)]
pub enum FranklinError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Franklin root is not a git repository: {0}")]
    NotAGitRepository(PathBuf),

    #[error("{command} not found on PATH")]
    CommandNotFound { command: String },

    #[error("{command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Failed to get user input: {0}")]
    Prompt(String),
}

/// Errors raised while rendering template files on disk
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to read template {0}: {1}")]
    ReadError(PathBuf, std::io::Error),

    #[error("Failed to write template {0}: {1}")]
    WriteError(PathBuf, std::io::Error),
}

impl From<dialoguer::Error> for FranklinError {
    fn from(err: dialoguer::Error) -> Self {
        FranklinError::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FranklinError>;
