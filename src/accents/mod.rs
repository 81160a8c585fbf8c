//! Accent variant generation for icon themes.
//!
//! The pipeline is deliberately flat: [`ThemeGenerator`] walks the palette,
//! clones the base manifest per accent, and hands each eligible icon to an
//! [`IconWriter`], which recolours it with [`replace_svg_colour`].

mod colour;
mod error;
mod generator;
mod naming;
mod palette;
mod paths;
mod report;
mod writer;

pub use colour::{FillKind, find_fill_colour, replace_svg_colour};
pub use error::AccentError;
pub use generator::{AccentVariant, ThemeGenerator, ThemeTargets};
pub use naming::{accent_file_name, sanitize_accent_name, theme_file_name};
pub use palette::{AccentPalette, PaletteError, is_hex_colour};
pub use paths::IconsRoot;
pub use report::{AccentSummary, GenerationReport};
pub use writer::IconWriter;
