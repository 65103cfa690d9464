#![forbid(unsafe_code)]
// Float equality in tests compares exactly-representable results.
#![cfg_attr(test, allow(clippy::float_cmp))]

//! # iterm_theme
//!
//! Generates an iTerm2 color preset (an XML property list) from two built-in
//! palettes.
//!
//! The document carries three sections with identical slot layouts:
//! unsuffixed default keys built from the light palette, `(Light)` keys and
//! `(Dark)` keys. Each section holds the 16 ANSI colors followed by the
//! background, badge, bold, cursor, cursor guide, cursor text, foreground,
//! link, match background, selected text and selection colors.
//!
//! ## Quick start
//!
//! ```rust
//! let document = iterm_theme::theme_document().unwrap();
//! assert!(document.contains("<key>Ansi 0 Color (Dark)</key>"));
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! palette.rs   LIGHT / DARK hex literals
//!     │
//!     ▼
//! color.rs     "#rrggbb" → Rgb01 (validated)
//!     │
//!     ▼
//! entry.rs     one <key>/<dict> block per slot
//!     │
//!     ▼
//! document.rs  header + default/light/dark sections + footer
//! ```

pub mod cli;
pub mod color;
pub mod document;
pub mod entry;
pub mod logging;
pub mod palette;
pub mod variant;

pub use color::{ColorError, ColorResult, Rgb01, hex_to_rgb01};
pub use document::{theme_document, theme_section};
pub use entry::ColorEntry;
pub use palette::Palette;
pub use variant::ThemeVariant;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::color::{ColorError, Rgb01, hex_to_rgb01};
    pub use crate::document::{theme_document, theme_section};
    pub use crate::entry::ColorEntry;
    pub use crate::palette::{DARK, LIGHT, Palette};
    pub use crate::variant::ThemeVariant;
}
