//! A single named color in the property list.
//!
//! Each [`ColorEntry`] renders as a `<key>` naming the slot followed by a
//! `<dict>` holding the color space and the four components. The key order
//! inside the dict is fixed so output stays byte-identical between runs.

use std::fmt::Write as _;

use tracing::trace;

use crate::color::{ColorResult, hex_to_rgb01};
use crate::variant::ThemeVariant;

/// Color space label used when none is given.
pub const DEFAULT_COLOR_SPACE: &str = "sRGB";

/// One color slot of one theme variant.
///
/// # Example
///
/// ```rust
/// use iterm_theme::{ColorEntry, ThemeVariant};
///
/// let block = ColorEntry::new("Badge Color", "#ea4024", ThemeVariant::Dark)
///     .alpha(0.5)
///     .render()
///     .unwrap();
/// assert!(block.starts_with("\t<key>Badge Color (Dark)</key>"));
/// assert!(block.contains("<real>0.5</real>"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry<'a> {
    title: &'a str,
    hex: &'a str,
    variant: ThemeVariant,
    alpha: f64,
    color_space: &'a str,
}

impl<'a> ColorEntry<'a> {
    /// Creates an opaque sRGB entry.
    #[must_use]
    pub const fn new(title: &'a str, hex: &'a str, variant: ThemeVariant) -> Self {
        Self {
            title,
            hex,
            variant,
            alpha: 1.0,
            color_space: DEFAULT_COLOR_SPACE,
        }
    }

    /// Sets the alpha component.
    #[must_use]
    pub const fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the color space label.
    #[must_use]
    pub const fn color_space(mut self, color_space: &'a str) -> Self {
        self.color_space = color_space;
        self
    }

    /// Key under which the entry appears, including the variant suffix.
    #[must_use]
    pub fn display_title(&self) -> String {
        format!("{}{}", self.title, self.variant.suffix())
    }

    /// Renders the `<key>`/`<dict>` block, without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ColorError::InvalidColorFormat`] if the entry's
    /// color is not a six-digit hex string.
    pub fn render(&self) -> ColorResult<String> {
        let rgb = hex_to_rgb01(self.hex)?;
        let mut out = String::with_capacity(384);

        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "\t<key>{title}</key>\n\
             \t<dict>\n\
             \t\t<key>Color Space</key>\n\
             \t\t<string>{space}</string>\n\
             \t\t<key>Red Component</key>\n\
             \t\t<real>{r}</real>\n\
             \t\t<key>Green Component</key>\n\
             \t\t<real>{g}</real>\n\
             \t\t<key>Blue Component</key>\n\
             \t\t<real>{b}</real>\n\
             \t\t<key>Alpha Component</key>\n\
             \t\t<real>{a}</real>\n\
             \t</dict>",
            title = self.display_title(),
            space = self.color_space,
            r = rgb.red,
            g = rgb.green,
            b = rgb.blue,
            a = self.alpha,
        );

        trace!(entry.title = %self.title, theme.variant = %self.variant, "Rendered color entry");
        Ok(out)
    }
}
