//! The two color palettes the theme file is built from.
//!
//! A [`Palette`] is a plain record rather than a map so every role is
//! guaranteed to be filled in at compile time.

/// Every color a theme variant needs, as `#rrggbb` literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// ANSI colors 0–7 followed by their bright variants 8–15.
    pub ansi: [&'static str; 16],
    pub foreground: &'static str,
    pub background: &'static str,
    pub badge: &'static str,
    pub bold: &'static str,
    pub cursor: &'static str,
    pub cursor_guide: &'static str,
    pub cursor_text: &'static str,
    pub link: &'static str,
    pub selection_text: &'static str,
    pub selection: &'static str,
    pub match_background: &'static str,
}

/// Palette for the dark variant.
pub const DARK: Palette = Palette {
    ansi: [
        "#1c1c1c", // black
        "#af005f", // red
        "#5faf00", // green
        "#d7af5f", // yellow
        "#3994af", // blue
        "#8787AF", // magenta
        "#5f8787", // cyan
        "#d0d0d0", // white
        "#585858", // bright black
        "#ff5faf", // bright red
        "#afd700", // bright green
        "#ffaf00", // bright yellow
        "#5fafd7", // bright blue
        "#af87d7", // bright magenta
        "#00afaf", // bright cyan
        "#ffffff", // bright white
    ],
    foreground: "#d0d0d0",
    background: "#1c1c1c",
    badge: "#ea4024",
    bold: "#d0d0d0",
    cursor: "#d0d0d0",
    cursor_guide: "#beeafc",
    cursor_text: "#1c1c1c",
    link: "#5fafd7",
    selection_text: "#1c1c1c",
    selection: "#8786ab",
    match_background: "#d7af5f",
};

/// Palette for the light variant, also used for the unsuffixed default keys.
pub const LIGHT: Palette = Palette {
    ansi: [
        "#444444", // black
        "#af0000", // red
        "#008700", // green
        "#d75f00", // yellow
        "#005f87", // blue
        "#8700af", // magenta
        "#005f87", // cyan
        "#bcbcbc", // white
        "#878787", // bright black
        "#d70000", // bright red
        "#5f8700", // bright green
        "#d75f00", // bright yellow
        "#005faf", // bright blue
        "#d70087", // bright magenta
        "#0087af", // bright cyan
        "#eeeeee", // bright white
    ],
    foreground: "#1c1c1c",
    background: "#eeeeee",
    badge: "#ea4024",
    bold: "#4c4c4c",
    cursor: "#444444",
    cursor_guide: "#beeafc",
    cursor_text: "#eeeeee",
    link: "#005f87",
    selection_text: "#eeeeee",
    selection: "#878787",
    match_background: "#f9d891",
};

impl Palette {
    /// All `(role, hex)` pairs, ANSI slots first.
    #[must_use]
    pub fn colors(&self) -> Vec<(String, &'static str)> {
        let mut colors: Vec<(String, &'static str)> = self
            .ansi
            .iter()
            .enumerate()
            .map(|(i, hex)| (format!("ansi{i}"), *hex))
            .collect();
        colors.extend(
            [
                ("foreground", self.foreground),
                ("background", self.background),
                ("badge", self.badge),
                ("bold", self.bold),
                ("cursor", self.cursor),
                ("cursorGuide", self.cursor_guide),
                ("cursorText", self.cursor_text),
                ("link", self.link),
                ("selectionText", self.selection_text),
                ("selection", self.selection),
                ("matchBackground", self.match_background),
            ]
            .map(|(role, hex)| (role.to_string(), hex)),
        );
        colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex_to_rgb01;

    #[test]
    fn every_literal_is_valid() {
        for palette in [LIGHT, DARK] {
            for (role, hex) in palette.colors() {
                assert!(hex_to_rgb01(hex).is_ok(), "{role} has bad color {hex}");
            }
        }
    }

    #[test]
    fn lists_every_role() {
        assert_eq!(LIGHT.colors().len(), 27);
        assert_eq!(DARK.colors().len(), 27);
    }

    #[test]
    fn shared_values() {
        assert_eq!(LIGHT.badge, DARK.badge);
        assert_eq!(LIGHT.cursor_guide, DARK.cursor_guide);
        assert_ne!(LIGHT.background, DARK.background);
    }

    #[test]
    fn reference_values() {
        assert_eq!(DARK.ansi[5], "#8787AF");
        assert_eq!(DARK.selection, "#8786ab");
        assert_eq!(LIGHT.bold, "#4c4c4c");
        assert_eq!(LIGHT.match_background, "#f9d891");
        assert_eq!(LIGHT.ansi[15], LIGHT.background);
    }
}
