//! Configuration resolution engine.
//!
//! This module turns a flat command line plus optional key=value config
//! files into a validated, per-image list of transform parameters:
//!
//! - `partition` splits raw argv into the output selection, the image list,
//!   and the archived directive tokens;
//! - `file` parses key=value config files;
//! - `resolver` applies inline directives over a scoped sub-range of the
//!   token list, delegating `--conf` to the file parser;
//! - `session` orchestrates the two-tier overlay (global scope before each
//!   image's local scope) and exposes the finished result.
//!
//! Resolution is single-threaded and fail-fast: the first invalid token
//! aborts the whole pass, and no partially resolved state is exposed.
pub mod file;
pub mod partition;
pub mod resolver;
pub mod session;

pub use file::ConfigError;
pub use partition::Partition;
pub use resolver::Scope;
pub use session::ResolvedSession;

use thiserror::Error;

/// Errors raised while partitioning argv or resolving inline directives
#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("not enough arguments: expected at least an image and an output option")]
    NotEnoughArguments,

    #[error("no output file specified after `--file`")]
    MissingOutputPath,

    #[error("multiple output options specified")]
    MultipleOutputs,

    #[error("image file does not exist: {path}")]
    ImageNotFound { path: String },

    #[error("no image files provided")]
    NoImages,

    #[error("no output option specified")]
    NoOutput,

    #[error("invalid argument: {token}")]
    UnknownDirective { token: String },

    #[error("no value provided for `{directive}`")]
    MissingValue { directive: &'static str },

    #[error("invalid value `{value}` for `{directive}`")]
    InvalidValue { directive: &'static str, value: String },

    #[error("config file does not exist: {path}")]
    MissingConfig { path: String },
}
