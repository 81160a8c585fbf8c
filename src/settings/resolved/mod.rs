use std::path::PathBuf;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// How the accentable icons are chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
	/// An explicit, ordered list of icon ids.
	Icons(Vec<String>),
	/// Every icon id starting with the prefix, in manifest order.
	Prefix(String),
}

/// Application-ready configuration derived from user input, config files and
/// defaults. Every path is absolute.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub icons_root: PathBuf,
	pub themes_root: PathBuf,
	pub base_theme: PathBuf,
	pub palette: PathBuf,
	pub selection: Selection,
	pub write_manifests: bool,
	pub accents: Option<Vec<String>>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
