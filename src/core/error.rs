use super::config::ConfigError;
use std::io;
use thiserror::Error;

/// Fatal startup/runtime errors of the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid argument: {0}")]
    Usage(String),
}
