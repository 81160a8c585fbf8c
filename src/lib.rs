//! Core crate for generating accent-coloured icon variants of an editor
//! icon theme.
//!
//! The root module re-exports the accent pipeline and the manifest types
//! from `icon-theme` so that build scripts can drive a run without digging
//! through the module hierarchy.

pub mod accents;
pub mod app_dirs;
pub mod logging;
pub mod task;

#[cfg(test)]
mod test_support;

pub use accents::{
	AccentError, AccentPalette, AccentSummary, GenerationReport, IconsRoot, ThemeGenerator,
	ThemeTargets, replace_svg_colour,
};
pub use icon_theme::{AccentableIcons, IconDefinition, IconList, IconTheme, PrefixSelector};
pub use task::{AccentTask, ERROR_BANNER};
