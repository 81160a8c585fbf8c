use std::path::Path;

use anyhow::{Context, Result};
use icon_accents::{
	AccentPalette, AccentTask, AccentableIcons, GenerationReport, IconList, IconsRoot,
	PrefixSelector, ThemeTargets,
};

use crate::settings::{ResolvedConfig, Selection};

/// Coordinates turning resolved settings into a generation run.
pub(crate) struct AccentWorkflow {
	palette: AccentPalette,
	task: AccentTask,
}

impl AccentWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			icons_root,
			themes_root,
			base_theme,
			palette,
			selection,
			write_manifests,
			accents,
		} = config;

		let palette = load_palette(&palette, accents.as_deref())?;
		let targets = ThemeTargets {
			base_manifest: base_theme,
			themes_root,
			write_manifests,
		};
		let icons = IconsRoot::from_cwd(&icons_root)
			.with_context(|| format!("failed to resolve icons root {}", icons_root.display()))?;
		let task = AccentTask::new(
			icons,
			targets,
			palette.clone(),
			selector_for(selection),
		);

		Ok(Self { palette, task })
	}

	pub(crate) fn palette(&self) -> &AccentPalette {
		&self.palette
	}

	pub(crate) fn run(self) -> Result<GenerationReport> {
		self.task
			.run(|result| result.context("failed to generate accent icons"))
	}
}

fn load_palette(path: &Path, accents: Option<&[String]>) -> Result<AccentPalette> {
	let palette = AccentPalette::load(path)?;
	match accents {
		Some(names) => Ok(palette.restrict_to(names)?),
		None => Ok(palette),
	}
}

fn selector_for(selection: Selection) -> Box<dyn AccentableIcons> {
	match selection {
		Selection::Icons(icons) => Box::new(IconList::new(icons)),
		Selection::Prefix(prefix) => Box::new(PrefixSelector::new(prefix)),
	}
}
