//! Crate-level error type and `Result` alias for stable, structured error
//! handling. Converts underlying I/O, argument, and config-file errors into
//! one enum the top-level caller can report and exit on.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Argument error: {0}")]
    Argument(#[from] crate::config::ArgumentError),

    #[error("Config file error: {0}")]
    Config(#[from] crate::config::ConfigError),
}
