use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading or narrowing an accent palette.
#[derive(Debug, Error)]
pub enum PaletteError {
	#[error("failed to read accent palette {}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to parse accent palette {}", path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("accent '{accent}' has invalid colour '{colour}': expected six hex digits")]
	InvalidColour { accent: String, colour: String },

	#[error("accent '{accent}' is not defined in the palette")]
	UnknownAccent { accent: String },
}

#[derive(Debug, Deserialize)]
struct PaletteFile {
	#[serde(default)]
	accents: IndexMap<String, String>,
}

/// Ordered mapping of accent names to hex colours.
///
/// Iteration order is the order in which accents appear in the source file
/// and is the order in which variants are generated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccentPalette {
	accents: IndexMap<String, String>,
}

impl AccentPalette {
	/// Build a palette from `(name, colour)` pairs, validating each colour.
	///
	/// # Errors
	///
	/// Returns [`PaletteError::InvalidColour`] for the first colour that is
	/// not six hex digits with an optional leading `#`.
	pub fn new<I, K, V>(accents: I) -> Result<Self, PaletteError>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let accents: IndexMap<String, String> = accents
			.into_iter()
			.map(|(name, colour)| (name.into(), colour.into()))
			.collect();
		for (accent, colour) in &accents {
			if !is_hex_colour(colour) {
				return Err(PaletteError::InvalidColour {
					accent: accent.clone(),
					colour: colour.clone(),
				});
			}
		}
		Ok(Self { accents })
	}

	/// Parse the `accents` table of a defaults document.
	pub fn from_json_str(text: &str, origin: &Path) -> Result<Self, PaletteError> {
		let file: PaletteFile =
			serde_json::from_str(text).map_err(|source| PaletteError::Parse {
				path: origin.to_path_buf(),
				source,
			})?;
		Self::new(file.accents)
	}

	/// Read the defaults document at `path`.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read, is not JSON, or holds an
	/// invalid colour.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
		let path = path.as_ref();
		let text = fs::read_to_string(path).map_err(|source| PaletteError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_json_str(&text, path)
	}

	/// Keep only the named accents, preserving palette order.
	///
	/// # Errors
	///
	/// Returns [`PaletteError::UnknownAccent`] if a name is not in the palette.
	pub fn restrict_to(self, names: &[String]) -> Result<Self, PaletteError> {
		if let Some(unknown) = names.iter().find(|name| !self.accents.contains_key(*name)) {
			return Err(PaletteError::UnknownAccent {
				accent: unknown.clone(),
			});
		}
		let accents = self
			.accents
			.into_iter()
			.filter(|(name, _)| names.contains(name))
			.collect();
		Ok(Self { accents })
	}

	pub fn colour(&self, accent: &str) -> Option<&str> {
		self.accents.get(accent).map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.accents
			.iter()
			.map(|(name, colour)| (name.as_str(), colour.as_str()))
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.accents.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.accents.len()
	}

	pub fn is_empty(&self) -> bool {
		self.accents.is_empty()
	}
}

/// Six hex digits, optionally prefixed with `#`.
pub fn is_hex_colour(value: &str) -> bool {
	let digits = value.strip_prefix('#').unwrap_or(value);
	digits.len() == 6 && digits.chars().all(|ch| ch.is_ascii_hexdigit())
}
