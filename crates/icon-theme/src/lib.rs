//! Data model for editor icon-theme manifests.
//!
//! A manifest maps icon identifiers to icon definitions whose `iconPath`
//! points at an SVG file. Everything the accent tooling does not touch is
//! carried through untouched so a serialized copy stays faithful to the
//! original file.

pub mod error;
pub mod manifest;
pub mod selector;

pub use error::ThemeError;
pub use manifest::{IconDefinition, IconTheme};
pub use selector::{AccentableIcons, DEFAULT_PREFIX, IconList, PrefixSelector};
