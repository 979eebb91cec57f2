//! Shared types used across the crate.
//! Includes `OutputMode`, the mutually exclusive destination selected on the
//! command line, whose `Display` form is the tag handed to the renderer.
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Plain text written to stdout.
    Console,
    /// Interactive terminal screen rendering.
    Screen,
    /// Text written to a user-supplied file path.
    File,
    /// Rendered back out as a raster image.
    Image,
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OutputMode::Console => "console",
            OutputMode::Screen => "screen",
            OutputMode::File => "file",
            OutputMode::Image => "image",
        };
        write!(f, "{}", s)
    }
}
