//! Command Line Interface (CLI) layer for asciigen.
//!
//! The interesting argument handling lives in the library (`asciigen::config`),
//! because the grammar is position-sensitive: the same directive means
//! different things before and after an image path. This layer only wires
//! process argv to the engine and emits the resolved render plan.
//!
//! If you are embedding the engine into another application, prefer the
//! high-level `asciigen::api` module instead of calling the CLI code.
pub mod runner;

pub use runner::run;
