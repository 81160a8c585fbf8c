use std::fs;
use std::path::{Path, PathBuf};

use icon_theme::{AccentableIcons, IconTheme};
use log::{info, warn};

use super::error::AccentError;
use super::naming::{accent_file_name, sanitize_accent_name, theme_file_name};
use super::palette::AccentPalette;
use super::paths::IconsRoot;
use super::report::{AccentSummary, GenerationReport};
use super::writer::IconWriter;

/// Where generated manifests go and whether they are written at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeTargets {
	/// Path of the base manifest; its file name seeds the accent manifest names.
	pub base_manifest: PathBuf,
	pub themes_root: PathBuf,
	pub write_manifests: bool,
}

impl ThemeTargets {
	/// Path of the manifest generated for the accent `token`.
	pub fn manifest_path(&self, token: &str) -> PathBuf {
		self.themes_root
			.join(theme_file_name(&self.base_manifest, token))
	}
}

/// A populated theme copy together with what was done to produce it.
#[derive(Debug, Clone)]
pub struct AccentVariant {
	pub theme: IconTheme,
	pub summary: AccentSummary,
}

/// Derives one accented theme copy per palette entry from a base manifest.
pub struct ThemeGenerator<'a> {
	base: &'a IconTheme,
	palette: &'a AccentPalette,
	icons: &'a IconsRoot,
	targets: &'a ThemeTargets,
}

impl<'a> ThemeGenerator<'a> {
	pub fn new(
		base: &'a IconTheme,
		palette: &'a AccentPalette,
		icons: &'a IconsRoot,
		targets: &'a ThemeTargets,
	) -> Self {
		Self {
			base,
			palette,
			icons,
			targets,
		}
	}

	/// Generate every accent in palette order.
	///
	/// The selector is consulted once; its answer is reused for each accent.
	/// Each theme copy is dropped as soon as its accent is done.
	///
	/// # Errors
	///
	/// The first I/O failure aborts the remaining accents.
	pub fn generate<S>(&self, selector: &S) -> Result<GenerationReport, AccentError>
	where
		S: AccentableIcons + ?Sized,
	{
		let ids = selector.accentable_icons(self.base);
		let mut report = GenerationReport::default();
		for (accent, _) in self.palette.iter() {
			let variant = self.generate_accent(accent, &ids)?;
			report.accents.push(variant.summary);
		}
		Ok(report)
	}

	/// Build the theme copy for a single accent and write its icons.
	///
	/// Identifiers that are missing from the manifest, or whose `iconPath` is
	/// not a string, are logged and listed in the summary.
	///
	/// # Errors
	///
	/// Fails when an icon cannot be read or written, or when persisting the
	/// manifest fails.
	pub fn generate_accent(&self, accent: &str, ids: &[String]) -> Result<AccentVariant, AccentError> {
		let token = sanitize_accent_name(accent);
		let manifest = self.targets.manifest_path(&token);
		let writer = IconWriter::new(self.icons, self.palette);

		let mut theme = self.base.clone();
		let mut written = Vec::new();
		let mut missing = Vec::new();

		for id in ids {
			info!("preparing {id} for accent {accent}");
			let base_path = self.base.icon_path(id);
			let copy = theme
				.definition_mut(id)
				.filter(|definition| definition.icon_path().is_some());

			let (Some(base_path), Some(copy)) = (base_path, copy) else {
				warn!("icon {id} not found");
				missing.push(id.clone());
				continue;
			};

			let accented = accent_file_name(base_path, &token);
			copy.set_icon_path(accented.clone());
			written.push(writer.write(base_path, &accented, accent)?);
		}

		let persisted = if self.targets.write_manifests {
			persist(&theme, &self.targets.themes_root, &manifest)?;
			true
		} else {
			false
		};

		info!("generated {}", manifest.display());

		Ok(AccentVariant {
			theme,
			summary: AccentSummary {
				accent: accent.to_string(),
				token,
				manifest,
				persisted,
				written,
				missing,
			},
		})
	}
}

fn persist(theme: &IconTheme, themes_root: &Path, manifest: &Path) -> Result<(), AccentError> {
	fs::create_dir_all(themes_root).map_err(|source| AccentError::CreateThemesDir {
		path: themes_root.to_path_buf(),
		source,
	})?;
	theme.save(manifest)?;
	Ok(())
}
