use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ArgumentError;
use crate::config::resolver::Scope;
use crate::core::params::ImageParams;
use crate::types::OutputMode;

/// Result of the single left-to-right pass over raw argv.
///
/// Image paths and output selectors are consumed here; everything else is
/// archived verbatim into `tokens`, in order, for later scoped resolution.
/// `image_positions[i]` is the index into `tokens` at which image `i`'s
/// local scope begins; the global scope is always `[0, image_positions[0])`.
#[derive(Debug, Clone)]
pub struct Partition {
    pub tokens: Vec<String>,
    pub image_positions: Vec<usize>,
    pub images: Vec<ImageParams>,
    pub output_mode: OutputMode,
    pub output_path: Option<PathBuf>,
}

/// Tokens longer than 5 bytes ending in `.jpg`/`.png` (case-sensitive) are
/// treated as image paths rather than directives.
fn is_image_token(token: &str) -> bool {
    token.len() > 5 && (token.ends_with(".jpg") || token.ends_with(".png"))
}

impl Partition {
    /// Partitions `args` (program name already stripped).
    ///
    /// Directive flags such as `--rotate 90` or `--conf path` are not
    /// interpreted here; validation of their shape and values happens in
    /// the scoped resolver. Image tokens must exist on disk at this point.
    pub fn from_args(args: &[String]) -> Result<Self, ArgumentError> {
        // At minimum one image and one output option.
        if args.len() < 2 {
            return Err(ArgumentError::NotEnoughArguments);
        }

        let mut output_mode: Option<OutputMode> = None;
        let mut output_path: Option<PathBuf> = None;
        let mut tokens = Vec::new();
        let mut images = Vec::new();
        let mut image_positions = Vec::new();

        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            match arg {
                "--file" => {
                    let path = args
                        .get(i + 1)
                        .ok_or(ArgumentError::MissingOutputPath)?;
                    select_output(&mut output_mode, OutputMode::File)?;
                    output_path = Some(PathBuf::from(path));
                    i += 2;
                    continue;
                }
                "--console" => {
                    select_output(&mut output_mode, OutputMode::Console)?;
                    i += 1;
                    continue;
                }
                "--screen" => {
                    select_output(&mut output_mode, OutputMode::Screen)?;
                    i += 1;
                    continue;
                }
                "--image" => {
                    select_output(&mut output_mode, OutputMode::Image)?;
                    i += 1;
                    continue;
                }
                _ => {}
            }

            if is_image_token(arg) {
                if !Path::new(arg).exists() {
                    return Err(ArgumentError::ImageNotFound {
                        path: arg.to_string(),
                    });
                }
                image_positions.push(tokens.len());
                images.push(ImageParams::new(arg));
            } else {
                tokens.push(args[i].clone());
            }
            i += 1;
        }

        if images.is_empty() {
            return Err(ArgumentError::NoImages);
        }
        let output_mode = output_mode.ok_or(ArgumentError::NoOutput)?;

        debug!(
            images = images.len(),
            directive_tokens = tokens.len(),
            output = %output_mode,
            "partitioned command line"
        );

        Ok(Self {
            tokens,
            image_positions,
            images,
            output_mode,
            output_path,
        })
    }

    /// Scope of the directives preceding the first image path; these apply
    /// to every image.
    pub fn global_scope(&self) -> Scope {
        Scope::new(0, self.image_positions[0])
    }

    /// Scope of the directives following image `idx`, up to the next image
    /// (or the end of the token list for the last one).
    pub fn local_scope(&self, idx: usize) -> Scope {
        let end = self
            .image_positions
            .get(idx + 1)
            .copied()
            .unwrap_or(self.tokens.len());
        Scope::new(self.image_positions[idx], end)
    }
}

fn select_output(
    current: &mut Option<OutputMode>,
    mode: OutputMode,
) -> Result<(), ArgumentError> {
    if current.is_some() {
        return Err(ArgumentError::MultipleOutputs);
    }
    *current = Some(mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn touch_image(dir: &TempDir, name: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, b"fake").unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn splits_tokens_images_and_output() {
        let dir = TempDir::new().unwrap();
        let a = touch_image(&dir, "first.jpg");
        let b = touch_image(&dir, "second.png");

        let partition = Partition::from_args(&args(&[
            "--rotate", "90", "--console", &a, "--invert", &b,
        ]))
        .unwrap();

        assert_eq!(partition.tokens, vec!["--rotate", "90", "--invert"]);
        assert_eq!(partition.image_positions, vec![2, 3]);
        assert_eq!(partition.images.len(), 2);
        assert_eq!(partition.output_mode, OutputMode::Console);
        assert!(partition.output_path.is_none());
    }

    #[test]
    fn file_output_records_path() {
        let dir = TempDir::new().unwrap();
        let a = touch_image(&dir, "first.jpg");

        let partition =
            Partition::from_args(&args(&["--file", "out.txt", &a])).unwrap();
        assert_eq!(partition.output_mode, OutputMode::File);
        assert_eq!(partition.output_path.as_deref(), Some(Path::new("out.txt")));
    }

    #[test]
    fn file_output_without_path_fails() {
        let dir = TempDir::new().unwrap();
        let a = touch_image(&dir, "first.jpg");

        let err = Partition::from_args(&args(&[&a, "--file"])).unwrap_err();
        assert!(matches!(err, ArgumentError::MissingOutputPath));
    }

    #[test]
    fn duplicate_output_selectors_fail_before_images_are_checked() {
        // second.jpg does not exist, but the selector clash wins first
        let err = Partition::from_args(&args(&[
            "--console", "--screen", "missing-second.jpg",
        ]))
        .unwrap_err();
        assert!(matches!(err, ArgumentError::MultipleOutputs));
    }

    #[test]
    fn missing_image_file_fails_at_partition_time() {
        let err = Partition::from_args(&args(&["--console", "missing.jpg"]))
            .unwrap_err();
        assert!(matches!(err, ArgumentError::ImageNotFound { .. }));
    }

    #[test]
    fn requires_an_image_and_an_output() {
        let dir = TempDir::new().unwrap();
        let a = touch_image(&dir, "first.jpg");

        let err = Partition::from_args(&args(&["--console", "--rotate"]))
            .unwrap_err();
        assert!(matches!(err, ArgumentError::NoImages));

        let err = Partition::from_args(&args(&[&a, "--rotate", "90"])).unwrap_err();
        assert!(matches!(err, ArgumentError::NoOutput));

        let err = Partition::from_args(&args(&["--console"])).unwrap_err();
        assert!(matches!(err, ArgumentError::NotEnoughArguments));
    }

    #[test]
    fn short_or_differently_cased_names_are_not_image_tokens() {
        assert!(!is_image_token("a.jpg")); // 5 bytes, below the length gate
        assert!(!is_image_token("photo.JPG"));
        assert!(!is_image_token("photo.jpeg"));
        assert!(is_image_token("ab.jpg"));
        assert!(is_image_token("shot.png"));
    }

    #[test]
    fn scopes_derive_from_image_positions() {
        let dir = TempDir::new().unwrap();
        let a = touch_image(&dir, "first.jpg");
        let b = touch_image(&dir, "second.jpg");

        let partition = Partition::from_args(&args(&[
            "--rotate", "10", "--console", &a, "--invert", &b, "--fancy",
        ]))
        .unwrap();

        assert_eq!(partition.global_scope(), Scope::new(0, 2));
        assert_eq!(partition.local_scope(0), Scope::new(2, 3));
        assert_eq!(partition.local_scope(1), Scope::new(3, 4));
    }
}
