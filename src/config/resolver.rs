use std::path::Path;
use std::str::FromStr;

use crate::config::ArgumentError;
use crate::config::file::{apply_config_file, read_charset_line};
use crate::core::params::ImageParams;
use crate::error::Result;

/// Half-open `[start, end)` index range into the shared directive-token
/// list. Scopes never own tokens; they only delimit which directives apply
/// to one image (local scope) or to all images (global scope).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    start: usize,
    end: usize,
}

impl Scope {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Applies every inline directive inside `scope` to `params`, consuming one
/// or two tokens per step.
///
/// `--conf` delegates the referenced file to the config-file parser against
/// the same state. `--ascii` may appear any number of times in one scope
/// (last one wins), unlike the `ascii` key inside a single config file.
/// `--scale` performs no range check here; only file-sourced scale is
/// bounded. A directive whose value would lie past the scope end fails
/// rather than reading into a neighboring scope.
pub fn apply_scope(tokens: &[String], scope: Scope, params: &mut ImageParams) -> Result<()> {
    let mut i = scope.start;
    while i < scope.end {
        match tokens[i].as_str() {
            "--conf" => {
                let path = value_token(tokens, scope, i, "--conf")?;
                if !Path::new(path).exists() {
                    return Err(ArgumentError::MissingConfig {
                        path: path.to_string(),
                    }
                    .into());
                }
                apply_config_file(Path::new(path), params)?;
                i += 2;
            }
            "--ascii" => {
                let path = value_token(tokens, scope, i, "--ascii")?;
                params.set_charset(read_charset_line(Path::new(path))?);
                i += 2;
            }
            "--brightness" => {
                let delta = parse_directive(tokens, scope, i, "--brightness")?;
                params.add_brightness(delta);
                i += 2;
            }
            "--scale" => {
                let factor = parse_directive(tokens, scope, i, "--scale")?;
                params.multiply_scale(factor);
                i += 2;
            }
            "--rotate" => {
                let degrees = parse_directive(tokens, scope, i, "--rotate")?;
                params.add_rotation(degrees);
                i += 2;
            }
            "--invert" => {
                params.toggle_invert();
                i += 1;
            }
            "--flip-horizontal" => {
                params.toggle_flip_horizontal();
                i += 1;
            }
            "--flip-vertical" => {
                params.toggle_flip_vertical();
                i += 1;
            }
            "--fancy" => {
                params.toggle_fancy();
                i += 1;
            }
            other => {
                return Err(ArgumentError::UnknownDirective {
                    token: other.to_string(),
                }
                .into());
            }
        }
    }
    Ok(())
}

fn value_token<'a>(
    tokens: &'a [String],
    scope: Scope,
    i: usize,
    directive: &'static str,
) -> std::result::Result<&'a str, ArgumentError> {
    if i + 1 >= scope.end {
        return Err(ArgumentError::MissingValue { directive });
    }
    Ok(tokens[i + 1].as_str())
}

/// Full-consumption parse of a directive's value token.
fn parse_directive<T: FromStr>(
    tokens: &[String],
    scope: Scope,
    i: usize,
    directive: &'static str,
) -> std::result::Result<T, ArgumentError> {
    let raw = value_token(tokens, scope, i, directive)?;
    raw.parse().map_err(|_| ArgumentError::InvalidValue {
        directive,
        value: raw.to_string(),
    })
}
