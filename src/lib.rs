#![doc = r#"
asciigen — configuration resolution engine for an ASCII-art image renderer.

This crate turns a flat command line plus optional key=value config files
into a validated, per-image list of transform parameters (brightness, scale,
rotation, flips, inversion, glyph ramp) and an output selection. It powers
the `asciigen` CLI and can be embedded in your own renderer.

Command-line grammar
--------------------
```text
asciigen (--file <path>|--console|--screen|--image) <directives and images>
```

Tokens ending in `.jpg`/`.png` that exist on disk become images. Directives
before the first image apply to every image (the global scope); directives
after an image apply to that image only (its local scope). Local directives
are applied after global ones, so they extend accumulators (`--brightness`,
`--scale`, `--rotate`) and re-toggle flags (`--invert`, `--flip-horizontal`,
`--flip-vertical`, `--fancy`). `--conf <path>` pulls in a key=value config
file; `--ascii <path>` reads a glyph ramp from the first line of a file.

Quick start
-----------
```rust,no_run
fn main() -> asciigen::Result<()> {
    let session = asciigen::resolve_args([
        "--brightness", "10", "--console", "landscape.jpg", "--rotate", "90",
    ])?;

    assert_eq!(session.output_mode(), asciigen::OutputMode::Console);
    for image in session.images() {
        println!("{}: rotate={} brightness={}",
            image.path().display(), image.rotate, image.brightness);
    }
    Ok(())
}
```

Error handling
--------------
All public functions return `asciigen::Result<T>`; match on
`asciigen::Error` to distinguish argument, config-file, and I/O failures.
Resolution is fail-fast: the first invalid token aborts the whole pass.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`config`] — the partition/file/resolver/session engine.
- [`core`] — `ImageParams`, the per-image transform state.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use core::params::ImageParams;
pub use error::{Error, Result};
pub use types::OutputMode;

pub use config::{ArgumentError, ConfigError, Partition, ResolvedSession, Scope};

pub use api::{resolve_args, resolve_env};
