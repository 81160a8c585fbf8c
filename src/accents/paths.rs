use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Root directory against which icon paths from the manifest are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconsRoot {
	root: PathBuf,
}

impl IconsRoot {
	/// Use `root` as is. Relative roots resolve against whatever the working
	/// directory is when a path is written.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	/// Anchor a working-directory-relative root to the current directory.
	///
	/// # Errors
	///
	/// Returns an error if the current directory cannot be determined.
	pub fn from_cwd(root: impl AsRef<Path>) -> io::Result<Self> {
		let root = root.as_ref();
		if root.is_absolute() {
			return Ok(Self::new(root));
		}
		Ok(Self::new(env::current_dir()?.join(root)))
	}

	pub fn path(&self) -> &Path {
		&self.root
	}

	/// Join a manifest-relative icon path onto the root. No existence check
	/// is performed.
	pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
		self.root.join(relative)
	}
}
