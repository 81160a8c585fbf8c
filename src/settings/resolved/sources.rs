use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
	Default(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
			Self::Default(key) => write!(f, "default for `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) icons_root: Option<SettingSource>,
	pub(crate) icons: Option<SettingSource>,
	pub(crate) prefix: Option<SettingSource>,
	pub(crate) accents: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_icons_root(&self) -> SettingSource {
		self.icons_root
			.clone()
			.unwrap_or(SettingSource::Default("paths.icons_root"))
	}

	pub(crate) fn source_for_icons(&self) -> SettingSource {
		self.icons
			.clone()
			.unwrap_or(SettingSource::ConfigKey("selection.icons"))
	}

	pub(crate) fn source_for_prefix(&self) -> SettingSource {
		self.prefix
			.clone()
			.unwrap_or(SettingSource::ConfigKey("selection.prefix"))
	}

	pub(crate) fn source_for_accents(&self) -> SettingSource {
		self.accents
			.clone()
			.unwrap_or(SettingSource::ConfigKey("output.accents"))
	}
}
