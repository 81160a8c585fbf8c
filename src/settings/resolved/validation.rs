use super::{ConfigError, ConfigSources, ResolvedConfig, Selection};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if !config.icons_root.is_dir() {
		return Err(ConfigError::invalid(
			"paths.icons_root",
			config.icons_root.display().to_string(),
			sources.source_for_icons_root(),
			"must be an existing directory",
		));
	}

	match &config.selection {
		Selection::Icons(icons) if icons.is_empty() => {
			return Err(ConfigError::invalid(
				"selection.icons",
				"[]",
				sources.source_for_icons(),
				"must name at least one icon",
			));
		}
		Selection::Prefix(prefix) if prefix.is_empty() => {
			return Err(ConfigError::invalid(
				"selection.prefix",
				"",
				sources.source_for_prefix(),
				"must not be empty",
			));
		}
		_ => {}
	}

	if let Some(accents) = &config.accents
		&& accents.is_empty()
	{
		return Err(ConfigError::invalid(
			"output.accents",
			"[]",
			sources.source_for_accents(),
			"must name at least one accent",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use tempfile::tempdir;

	use super::super::SettingSource;
	use super::*;

	fn config(icons_root: PathBuf, selection: Selection) -> ResolvedConfig {
		ResolvedConfig {
			icons_root,
			themes_root: PathBuf::from("/pkg/dist"),
			base_theme: PathBuf::from("/pkg/dist/material-icons.json"),
			palette: PathBuf::from("/pkg/defaults.json"),
			selection,
			write_manifests: false,
			accents: None,
		}
	}

	#[test]
	fn validation_accepts_existing_root() {
		let dir = tempdir().unwrap();
		let config = config(dir.path().to_path_buf(), Selection::Prefix("_folder".into()));
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_missing_root() {
		let dir = tempdir().unwrap();
		let config = config(dir.path().join("nope"), Selection::Prefix("_folder".into()));

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "paths.icons_root"));
		assert!(err.to_string().contains("default for `paths.icons_root`"));
	}

	#[test]
	fn validation_rejects_empty_icon_list() {
		let dir = tempdir().unwrap();
		let config = config(dir.path().to_path_buf(), Selection::Icons(Vec::new()));
		let sources = ConfigSources {
			icons: Some(SettingSource::Environment("ICON_ACCENTS__SELECTION__ICONS")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "selection.icons"));
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn validation_rejects_empty_prefix() {
		let dir = tempdir().unwrap();
		let config = config(dir.path().to_path_buf(), Selection::Prefix(String::new()));
		let sources = ConfigSources {
			prefix: Some(SettingSource::CliFlag("--prefix")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(err.to_string().contains("CLI flag `--prefix`"));
	}

	#[test]
	fn validation_rejects_empty_accent_filter() {
		let dir = tempdir().unwrap();
		let mut config = config(dir.path().to_path_buf(), Selection::Prefix("_folder".into()));
		config.accents = Some(Vec::new());

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "output.accents"));
	}
}
