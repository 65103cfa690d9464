//! Hex color parsing and sRGB normalization.
//!
//! Colors enter the generator as `#rrggbb` (or bare `rrggbb`) strings and
//! leave as three components in `[0, 1]`, which is what the property list
//! format stores.
//!
//! # Example
//!
//! ```rust
//! use iterm_theme::color::hex_to_rgb01;
//!
//! let rgb = hex_to_rgb01("#ff005f").unwrap();
//! assert_eq!(rgb.red, 1.0);
//! assert_eq!(rgb.green, 0.0);
//! assert_eq!(rgb.blue, 95.0 / 255.0);
//! ```

use thiserror::Error;
use tracing::trace;

/// Error converting a color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string (with any leading `#` removed) is not six hex digits.
    #[error("Invalid color string '{0}'")]
    InvalidColorFormat(String),
}

/// Result alias for color conversion.
pub type ColorResult<T> = Result<T, ColorError>;

/// An sRGB color with each channel normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb01 {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb01 {
    /// Build a normalized color from 8-bit channels.
    #[must_use]
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self {
            red: f64::from(r) / 255.0,
            green: f64::from(g) / 255.0,
            blue: f64::from(b) / 255.0,
        }
    }

    /// Channels in (red, green, blue) order.
    #[must_use]
    pub const fn components(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<Rgb01> for (f64, f64, f64) {
    fn from(rgb: Rgb01) -> Self {
        (rgb.red, rgb.green, rgb.blue)
    }
}

/// Convert a `#rrggbb` or `rrggbb` string into normalized components.
///
/// Hex digits are case-insensitive. Only one leading `#` is accepted.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] when the remaining string is
/// not exactly six ASCII hex digits.
pub fn hex_to_rgb01(hex: &str) -> ColorResult<Rgb01> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let invalid = || ColorError::InvalidColorFormat(digits.to_string());

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    // All six bytes are ASCII, so these slices land on char boundaries.
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    let rgb = Rgb01::from_bytes(channel(0)?, channel(2)?, channel(4)?);

    trace!(color.hex = %hex, color.rgb = ?rgb.components(), "Converted hex color");
    Ok(rgb)
}
