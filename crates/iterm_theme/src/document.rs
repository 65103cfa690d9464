//! Assembly of theme sections and the complete property list document.
//!
//! The document holds three sections in a fixed order: the unsuffixed
//! default keys, the `(Light)` keys and the `(Dark)` keys. Each section lists
//! the same 27 slots in the same order, which the consuming terminal relies
//! on.

use tracing::debug;

use crate::color::ColorResult;
use crate::entry::ColorEntry;
use crate::palette::Palette;
use crate::variant::ThemeVariant;

/// XML prologue and the opening of the root dictionary.
pub const HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n\
<plist version=\"1.0\">\n\
<dict>";

/// Closes the root dictionary and the plist.
pub const FOOTER: &str = "</dict>\n</plist>";

/// Titles of the ANSI slots, indexed by color number.
pub const ANSI_TITLES: [&str; 16] = [
    "Ansi 0 Color",
    "Ansi 1 Color",
    "Ansi 2 Color",
    "Ansi 3 Color",
    "Ansi 4 Color",
    "Ansi 5 Color",
    "Ansi 6 Color",
    "Ansi 7 Color",
    "Ansi 8 Color",
    "Ansi 9 Color",
    "Ansi 10 Color",
    "Ansi 11 Color",
    "Ansi 12 Color",
    "Ansi 13 Color",
    "Ansi 14 Color",
    "Ansi 15 Color",
];

/// Number of color entries in one section.
pub const ENTRIES_PER_SECTION: usize = 27;

/// Alpha of the badge overlay.
pub const BADGE_ALPHA: f64 = 0.5;

/// Alpha of the cursor guide highlight.
pub const CURSOR_GUIDE_ALPHA: f64 = 0.25;

/// Entries of one section, in output order.
#[must_use]
pub fn section_entries(variant: ThemeVariant, palette: &Palette) -> Vec<ColorEntry<'_>> {
    let mut entries: Vec<ColorEntry<'_>> = ANSI_TITLES
        .iter()
        .zip(palette.ansi.iter())
        .map(|(title, hex)| ColorEntry::new(title, hex, variant))
        .collect();

    entries.extend([
        ColorEntry::new("Background Color", palette.background, variant),
        ColorEntry::new("Badge Color", palette.badge, variant).alpha(BADGE_ALPHA),
        ColorEntry::new("Bold Color", palette.bold, variant),
        ColorEntry::new("Cursor Color", palette.cursor, variant),
        ColorEntry::new("Cursor Guide Color", palette.cursor_guide, variant)
            .alpha(CURSOR_GUIDE_ALPHA),
        ColorEntry::new("Cursor Text Color", palette.cursor_text, variant),
        ColorEntry::new("Foreground Color", palette.foreground, variant),
        ColorEntry::new("Link Color", palette.link, variant),
        ColorEntry::new("Match Background Color", palette.match_background, variant),
        ColorEntry::new("Selected Text Color", palette.selection_text, variant),
        ColorEntry::new("Selection Color", palette.selection, variant),
    ]);

    debug_assert_eq!(entries.len(), ENTRIES_PER_SECTION);
    entries
}

/// Renders one variant's section: its entries joined by newlines.
///
/// # Errors
///
/// Fails on the first palette color that is not valid hex.
pub fn theme_section(variant: ThemeVariant, palette: &Palette) -> ColorResult<String> {
    let blocks = section_entries(variant, palette)
        .iter()
        .map(ColorEntry::render)
        .collect::<ColorResult<Vec<_>>>()?;

    debug!(theme.variant = %variant, theme.entries = blocks.len(), "Theme section assembled");
    Ok(blocks.join("\n"))
}

/// Renders the complete document from the built-in palettes.
///
/// # Errors
///
/// Fails if any built-in palette color is malformed. Nothing is returned in
/// that case, so callers never emit a partial document.
pub fn theme_document() -> ColorResult<String> {
    let mut parts = Vec::with_capacity(ThemeVariant::ALL.len() + 2);
    parts.push(HEADER.to_string());
    for variant in ThemeVariant::ALL {
        parts.push(theme_section(variant, variant.palette())?);
    }
    parts.push(FOOTER.to_string());

    let document = parts.join("\n");
    debug!(document.bytes = document.len(), "Theme document assembled");
    Ok(document)
}
