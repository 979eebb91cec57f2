use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::core::params::ImageParams;
use crate::error::Result;

/// Errors encountered while parsing a key=value config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config key `{key}`")]
    InvalidKey { key: String },

    #[error("invalid value `{value}` for config key `{key}`")]
    InvalidValue { key: &'static str, value: String },

    #[error("scale {value} outside the permitted range [0.1, 10]")]
    OutOfRange { key: &'static str, value: f64 },

    #[error("config key `{key}` given more than once")]
    DuplicateKey { key: &'static str },

    #[error("missing value in config line `{line}`")]
    MissingValue { line: String },
}

/// Applies every directive in the config file at `path` to `params`.
///
/// Lines are trimmed and split on the first `=`; blank lines are skipped,
/// there is no comment syntax. Recognized keys are exactly `brightness`,
/// `flip`, `rotate`, `invert`, `scale`, `ascii`, and `fancy`. The first
/// invalid line aborts the parse. The file handle is scoped to this call
/// and released on every exit path.
pub fn apply_config_file(path: &Path, params: &mut ImageParams) -> Result<()> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    debug!(config = %path.display(), "applying config file");

    // `ascii` is the one key restricted to a single occurrence per parse.
    let mut ascii_seen = false;
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        apply_line(line, &mut ascii_seen, params)?;
    }
    Ok(())
}

fn apply_line(line: &str, ascii_seen: &mut bool, params: &mut ImageParams) -> Result<()> {
    let Some((key, value)) = line.split_once('=') else {
        return Err(ConfigError::MissingValue {
            line: line.to_string(),
        }
        .into());
    };
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::MissingValue {
            line: line.to_string(),
        }
        .into());
    }

    match key {
        "brightness" => params.add_brightness(parse_value("brightness", value)?),
        "flip" => match value {
            "horizontal" => params.toggle_flip_horizontal(),
            "vertical" => params.toggle_flip_vertical(),
            _ => {
                return Err(ConfigError::InvalidValue {
                    key: "flip",
                    value: value.to_string(),
                }
                .into());
            }
        },
        "rotate" => params.add_rotation(parse_value("rotate", value)?),
        "invert" => params.set_invert(parse_value("invert", value)?),
        "scale" => {
            params.multiply_scale(parse_value("scale", value)?);
            // File-sourced scale is bounded; the inline `--scale` directive
            // deliberately is not.
            if !(0.1..=10.0).contains(&params.scale) {
                return Err(ConfigError::OutOfRange {
                    key: "scale",
                    value: params.scale,
                }
                .into());
            }
        }
        "ascii" => {
            if *ascii_seen {
                return Err(ConfigError::DuplicateKey { key: "ascii" }.into());
            }
            *ascii_seen = true;
            params.set_charset(read_charset_line(Path::new(value))?);
        }
        "fancy" => params.set_fancy(parse_value("fancy", value)?),
        other => {
            return Err(ConfigError::InvalidKey {
                key: other.to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Full-consumption parse: trailing garbage after a numeric or boolean
/// value is an error, not ignored.
fn parse_value<T: FromStr>(key: &'static str, value: &str) -> std::result::Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Reads the first line of the charset file at `path`; the rest of the
/// file is ignored.
pub(crate) fn read_charset_line(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    fn fresh_params() -> ImageParams {
        ImageParams::new("a.jpg")
    }

    #[test]
    fn applies_every_recognized_key() {
        let dir = TempDir::new().unwrap();
        let charset = write_config(&dir, "ramp.txt", " .:-=+*#%@\nignored tail\n");
        let cfg = write_config(
            &dir,
            "full.conf",
            &format!(
                "brightness=12.5\nflip=horizontal\nrotate=-30\ninvert=true\n\
                 scale=2\nascii={}\nfancy=true\n",
                charset.display()
            ),
        );

        let mut params = fresh_params();
        apply_config_file(&cfg, &mut params).unwrap();

        assert_eq!(params.brightness, 12.5);
        assert!(params.flip_horizontal);
        assert!(!params.flip_vertical);
        assert_eq!(params.rotate, 330);
        assert!(params.invert);
        assert_eq!(params.scale, 2.0);
        assert_eq!(params.charset, " .:-=+*#%@");
        assert!(params.fancy);
    }

    #[test]
    fn blank_lines_and_surrounding_whitespace_are_tolerated() {
        let dir = TempDir::new().unwrap();
        let cfg = write_config(&dir, "ws.conf", "\n  brightness=3\n\n\trotate=90  \n");

        let mut params = fresh_params();
        apply_config_file(&cfg, &mut params).unwrap();
        assert_eq!(params.brightness, 3.0);
        assert_eq!(params.rotate, 90);
    }

    #[test]
    fn trailing_garbage_on_numeric_value_fails() {
        let dir = TempDir::new().unwrap();
        let cfg = write_config(&dir, "bad.conf", "brightness=12abc\n");

        let mut params = fresh_params();
        let err = apply_config_file(&cfg, &mut params).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { key: "brightness", .. })
        ));
    }

    #[test]
    fn missing_equals_or_value_fails() {
        let dir = TempDir::new().unwrap();
        let mut params = fresh_params();

        let cfg = write_config(&dir, "noeq.conf", "brightness\n");
        let err = apply_config_file(&cfg, &mut params).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::MissingValue { .. })));

        let cfg = write_config(&dir, "noval.conf", "brightness=\n");
        let err = apply_config_file(&cfg, &mut params).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::MissingValue { .. })));
    }

    #[test]
    fn unknown_key_fails() {
        let dir = TempDir::new().unwrap();
        let cfg = write_config(&dir, "bad.conf", "contrast=5\n");

        let mut params = fresh_params();
        let err = apply_config_file(&cfg, &mut params).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::InvalidKey { .. })));
    }

    #[test]
    fn invert_and_fancy_assign_rather_than_toggle() {
        let dir = TempDir::new().unwrap();
        let cfg = write_config(&dir, "inv.conf", "invert=true\nfancy=false\n");

        let mut params = fresh_params();
        params.set_invert(true);
        params.set_fancy(false);
        // Re-applying the same literals leaves the fields unchanged.
        apply_config_file(&cfg, &mut params).unwrap();
        assert!(params.invert);
        assert!(!params.fancy);
    }

    #[test]
    fn flip_value_must_be_horizontal_or_vertical() {
        let dir = TempDir::new().unwrap();
        let cfg = write_config(&dir, "flip.conf", "flip=diagonal\n");

        let mut params = fresh_params();
        let err = apply_config_file(&cfg, &mut params).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { key: "flip", .. })
        ));
    }

    #[test]
    fn scale_product_is_bounded_to_the_permitted_range() {
        let dir = TempDir::new().unwrap();
        let cfg = write_config(&dir, "scale.conf", "scale=4\nscale=4\n");

        // 1.0 * 4 = 4 passes, 4 * 4 = 16 exceeds the upper bound.
        let mut params = fresh_params();
        let err = apply_config_file(&cfg, &mut params).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::OutOfRange { key: "scale", .. })
        ));

        let cfg = write_config(&dir, "tiny.conf", "scale=0.01\n");
        let mut params = fresh_params();
        let err = apply_config_file(&cfg, &mut params).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::OutOfRange { .. })));
    }

    #[test]
    fn second_ascii_key_in_one_parse_fails() {
        let dir = TempDir::new().unwrap();
        let ramp = write_config(&dir, "ramp.txt", "@#\n");
        let cfg = write_config(
            &dir,
            "dup.conf",
            &format!("ascii={}\nascii={}\n", ramp.display(), ramp.display()),
        );

        let mut params = fresh_params();
        let err = apply_config_file(&cfg, &mut params).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::DuplicateKey { key: "ascii" })
        ));
    }

    #[test]
    fn unreadable_config_or_charset_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let mut params = fresh_params();

        let err = apply_config_file(&dir.path().join("absent.conf"), &mut params)
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));

        let cfg = write_config(&dir, "ascii.conf", "ascii=/no/such/ramp.txt\n");
        let err = apply_config_file(&cfg, &mut params).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
