use std::fs;
use std::path::PathBuf;

use log::info;

use super::colour::replace_svg_colour;
use super::error::AccentError;
use super::palette::AccentPalette;
use super::paths::IconsRoot;

/// Writes recoloured copies of icons below an [`IconsRoot`].
#[derive(Debug, Clone, Copy)]
pub struct IconWriter<'a> {
	root: &'a IconsRoot,
	palette: &'a AccentPalette,
}

impl<'a> IconWriter<'a> {
	pub fn new(root: &'a IconsRoot, palette: &'a AccentPalette) -> Self {
		Self { root, palette }
	}

	/// Recolour `source` with the colour of `accent` and write it to
	/// `destination`, overwriting any existing file. Both paths are relative
	/// to the icons root. Returns the absolute path that was written.
	///
	/// # Errors
	///
	/// Fails if the source cannot be read, the accent has no colour, or the
	/// destination cannot be written.
	pub fn write(&self, source: &str, destination: &str, accent: &str) -> Result<PathBuf, AccentError> {
		let source_path = self.root.resolve(source);
		let svg = fs::read_to_string(&source_path).map_err(|source| AccentError::ReadIcon {
			path: source_path.clone(),
			source,
		})?;

		let colour = self
			.palette
			.colour(accent)
			.ok_or_else(|| AccentError::UnknownAccent {
				accent: accent.to_string(),
			})?;
		let recoloured = replace_svg_colour(&svg, colour);

		let destination_path = self.root.resolve(destination);
		fs::write(&destination_path, recoloured).map_err(|source| AccentError::WriteIcon {
			path: destination_path.clone(),
			source,
		})?;
		info!("created {}", destination_path.display());

		Ok(destination_path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::tempdir;

	fn palette() -> AccentPalette {
		AccentPalette::new([("blue", "#0000ff")]).unwrap()
	}

	#[test]
	fn writes_recoloured_copy() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("folder.svg"), ".st0{fill:#90a4ae}").unwrap();
		let root = IconsRoot::new(dir.path());
		let palette = palette();

		let written = IconWriter::new(&root, &palette)
			.write("folder.svg", "folder.accent.blue.svg", "blue")
			.unwrap();

		assert_eq!(written, dir.path().join("folder.accent.blue.svg"));
		assert_eq!(fs::read_to_string(written).unwrap(), ".st0{fill:#0000ff}");
	}

	#[test]
	fn overwrites_existing_destination() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("folder.svg"), r##"<path fill="#90a4ae"/>"##).unwrap();
		fs::write(dir.path().join("folder.accent.blue.svg"), "stale").unwrap();
		let root = IconsRoot::new(dir.path());
		let palette = palette();

		IconWriter::new(&root, &palette)
			.write("folder.svg", "folder.accent.blue.svg", "blue")
			.unwrap();

		assert_eq!(
			fs::read_to_string(dir.path().join("folder.accent.blue.svg")).unwrap(),
			r##"<path fill="#0000ff"/>"##
		);
	}

	#[test]
	fn missing_source_is_a_read_error() {
		let dir = tempdir().unwrap();
		let root = IconsRoot::new(dir.path());
		let palette = palette();

		let err = IconWriter::new(&root, &palette)
			.write("folder.svg", "folder.accent.blue.svg", "blue")
			.unwrap_err();

		assert!(matches!(err, AccentError::ReadIcon { .. }));
		assert!(!dir.path().join("folder.accent.blue.svg").exists());
	}

	#[test]
	fn unknown_accent_is_rejected() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("folder.svg"), ".st0{fill:#90a4ae}").unwrap();
		let root = IconsRoot::new(dir.path());
		let palette = palette();

		let err = IconWriter::new(&root, &palette)
			.write("folder.svg", "folder.accent.red.svg", "red")
			.unwrap_err();

		assert!(matches!(err, AccentError::UnknownAccent { .. }));
	}
}
