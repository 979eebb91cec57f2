//! asciigen CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: resolve the command line
//! into a render plan, print it, and exit with appropriate status. For
//! programmatic use, prefer the library API (`asciigen::api`).

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::run()
}
