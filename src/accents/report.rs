use std::path::PathBuf;

use serde::Serialize;

/// Outcome of generating every accent in a palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
	pub accents: Vec<AccentSummary>,
}

impl GenerationReport {
	/// Total number of icon files written across all accents.
	pub fn icons_written(&self) -> usize {
		self.accents.iter().map(|accent| accent.written.len()).sum()
	}
}

/// What happened for a single accent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccentSummary {
	pub accent: String,
	pub token: String,
	pub manifest: PathBuf,
	pub persisted: bool,
	pub written: Vec<PathBuf>,
	pub missing: Vec<String>,
}
