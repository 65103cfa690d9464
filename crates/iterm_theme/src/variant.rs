//! Theme variants and the key suffix each one contributes.

use std::fmt;

use crate::palette::{DARK, LIGHT, Palette};

/// Which section of the theme file a color key belongs to.
///
/// The variant only affects key naming. [`ThemeVariant::Default`] keys are
/// unsuffixed and carry the light palette's colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    Default,
    Light,
    Dark,
}

impl ThemeVariant {
    /// Variants in the order their sections appear in the document.
    pub const ALL: [Self; 3] = [Self::Default, Self::Light, Self::Dark];

    /// Suffix appended to every key title in this variant's section.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Light => " (Light)",
            Self::Dark => " (Dark)",
        }
    }

    /// The palette this variant's section is built from.
    #[must_use]
    pub const fn palette(self) -> &'static Palette {
        match self {
            Self::Default | Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "default",
            Self::Light => "light",
            Self::Dark => "dark",
        };
        f.write_str(name)
    }
}
