use std::path::Path;

use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use asciigen::{ImageParams, OutputMode};

/// JSON shape handed to the downstream renderer: the output selection plus
/// the ordered, fully resolved per-image parameters.
#[derive(Serialize)]
struct RenderPlan<'a> {
    output_type: OutputMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_path: Option<&'a Path>,
    images: &'a [ImageParams],
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr so the plan on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let session = asciigen::resolve_env()?;
    info!(
        images = session.images().len(),
        output = %session.output_mode(),
        "command line resolved"
    );

    let plan = RenderPlan {
        output_type: session.output_mode(),
        output_path: session.output_path(),
        images: session.images(),
    };
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
