use std::io;
use std::path::PathBuf;

use icon_theme::ThemeError;
use thiserror::Error;

/// Failures that abort an accent generation run.
///
/// A missing or non-string icon definition is not represented here: it is a
/// recoverable miss that is recorded in the report instead.
#[derive(Debug, Error)]
pub enum AccentError {
	/// A source icon could not be read.
	#[error("failed to read icon {}", path.display())]
	ReadIcon {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// An accent icon could not be written.
	#[error("failed to write icon {}", path.display())]
	WriteIcon {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The themes directory could not be created.
	#[error("failed to create themes directory {}", path.display())]
	CreateThemesDir {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// An icon was requested for an accent that has no configured colour.
	#[error("no colour configured for accent '{accent}'")]
	UnknownAccent { accent: String },

	/// Loading or persisting an icon theme failed.
	#[error(transparent)]
	Theme(#[from] ThemeError),
}
