use icon_theme::{AccentableIcons, IconTheme};
use log::{error, info};

use crate::accents::{AccentError, AccentPalette, GenerationReport, IconsRoot, ThemeGenerator, ThemeTargets};

/// Logged once when a run fails; the error itself goes to the caller.
pub const ERROR_BANNER: &str = "accent icon generation failed";

/// A single accent generation run with everything it needs resolved.
pub struct AccentTask {
	icons: IconsRoot,
	targets: ThemeTargets,
	palette: AccentPalette,
	selector: Box<dyn AccentableIcons>,
}

impl AccentTask {
	pub fn new(
		icons: IconsRoot,
		targets: ThemeTargets,
		palette: AccentPalette,
		selector: Box<dyn AccentableIcons>,
	) -> Self {
		Self {
			icons,
			targets,
			palette,
			selector,
		}
	}

	/// Load the base manifest and generate every accent.
	///
	/// # Errors
	///
	/// Returns the first fatal error; per-icon misses are part of the report.
	pub fn execute(&self) -> Result<GenerationReport, AccentError> {
		let base = IconTheme::load(&self.targets.base_manifest)?;
		info!(
			"loaded {} icon definitions from {}",
			base.icon_definitions.len(),
			self.targets.base_manifest.display()
		);

		ThemeGenerator::new(&base, &self.palette, &self.icons, &self.targets)
			.generate(self.selector.as_ref())
	}

	/// Run the task and report completion through `done`.
	///
	/// A failure is logged with [`ERROR_BANNER`] before being passed on.
	pub fn run<F, T>(self, done: F) -> T
	where
		F: FnOnce(Result<GenerationReport, AccentError>) -> T,
	{
		let result = self.execute();
		if result.is_err() {
			error!("{ERROR_BANNER}");
		}
		done(result)
	}
}
