use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Transform parameters for a single image, suitable for plan serialization
/// and renderer presets.
///
/// One `ImageParams` is created per image token on the command line and
/// mutated only while the config engine resolves directives onto it; the
/// finished list is exposed as an immutable snapshot.
///
/// Boolean fields deliberately expose two kinds of mutation: `toggle_*`
/// (inline directives flip the current value) and `set_*` (config files
/// assign a literal). Which one applies to which source is part of the
/// engine's contract, so the distinction is named here rather than implied
/// by the call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageParams {
    pub image_path: PathBuf,
    /// Additive brightness offset; identity 0.0.
    pub brightness: f64,
    /// Multiplicative scale factor; identity 1.0.
    pub scale: f64,
    /// Rotation in degrees, always normalized into [0, 360).
    pub rotate: i32,
    pub invert: bool,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
    pub fancy: bool,
    /// Glyph ramp for the renderer; empty means the renderer's default.
    pub charset: String,
}

impl ImageParams {
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
            brightness: 0.0,
            scale: 1.0,
            rotate: 0,
            invert: false,
            flip_horizontal: false,
            flip_vertical: false,
            fancy: false,
            charset: String::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.image_path
    }

    pub fn add_brightness(&mut self, delta: f64) {
        self.brightness += delta;
    }

    pub fn multiply_scale(&mut self, factor: f64) {
        self.scale *= factor;
    }

    /// Adds `degrees` (may be negative) and wraps with floored modulo, so
    /// the accumulated value stays in [0, 360).
    pub fn add_rotation(&mut self, degrees: i32) {
        self.rotate = (i64::from(self.rotate) + i64::from(degrees)).rem_euclid(360) as i32;
    }

    pub fn toggle_invert(&mut self) {
        self.invert = !self.invert;
    }

    pub fn set_invert(&mut self, value: bool) {
        self.invert = value;
    }

    pub fn toggle_flip_horizontal(&mut self) {
        self.flip_horizontal = !self.flip_horizontal;
    }

    pub fn toggle_flip_vertical(&mut self) {
        self.flip_vertical = !self.flip_vertical;
    }

    pub fn toggle_fancy(&mut self) {
        self.fancy = !self.fancy;
    }

    pub fn set_fancy(&mut self, value: bool) {
        self.fancy = value;
    }

    pub fn set_charset(&mut self, charset: String) {
        self.charset = charset;
    }
}
