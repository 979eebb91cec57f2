use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::partition::Partition;
use crate::config::resolver::apply_scope;
use crate::core::params::ImageParams;
use crate::error::Result;
use crate::types::OutputMode;

/// Final outcome of one resolution pass: the ordered, fully resolved
/// per-image parameters plus the output selection.
///
/// Built once at program start and read-only afterwards. For every image
/// the global scope (directives before the first image path) is applied
/// first, then the image's own local scope, so local directives can extend
/// accumulators or re-toggle flags set globally. The first error anywhere
/// aborts the pass; no partially resolved session is ever returned.
#[derive(Debug, Clone)]
pub struct ResolvedSession {
    images: Vec<ImageParams>,
    output_mode: OutputMode,
    output_path: Option<PathBuf>,
}

impl ResolvedSession {
    /// Resolves `args` (program name already stripped) end to end:
    /// partition, then the two-tier overlay for each image in appearance
    /// order.
    pub fn resolve(args: &[String]) -> Result<Self> {
        let mut partition = Partition::from_args(args)?;

        let global = partition.global_scope();
        let locals: Vec<_> = (0..partition.images.len())
            .map(|idx| partition.local_scope(idx))
            .collect();

        for (params, local) in partition.images.iter_mut().zip(locals) {
            apply_scope(&partition.tokens, global, params)?;
            apply_scope(&partition.tokens, local, params)?;
            debug!(image = %params.image_path.display(), "resolved image parameters");
        }

        Ok(Self {
            images: partition.images,
            output_mode: partition.output_mode,
            output_path: partition.output_path,
        })
    }

    /// Resolved transform parameters, one per image, in appearance order.
    pub fn images(&self) -> &[ImageParams] {
        &self.images
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Destination path; present only when the output mode is `File`.
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }
}
