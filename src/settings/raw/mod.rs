use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod output;
mod paths;
mod selection;

use output::OutputSection;
use paths::PathsSection;
use selection::SelectionSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    paths: PathsSection,
    selection: SelectionSection,
    output: OutputSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.paths.apply_cli_overrides(cli);
        self.selection.apply_cli_overrides(cli);
        self.output.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            icons_root: detect_source(
                cli.icons_root.is_some(),
                self.paths.icons_root.is_some(),
                "ICON_ACCENTS__PATHS__ICONS_ROOT",
                "--icons-root",
                "paths.icons_root",
            ),
            icons: detect_source(
                cli.icons.is_some(),
                self.selection.icons.is_some(),
                "ICON_ACCENTS__SELECTION__ICONS",
                "--icon",
                "selection.icons",
            ),
            prefix: detect_source(
                cli.prefix.is_some(),
                self.selection.prefix.is_some(),
                "ICON_ACCENTS__SELECTION__PREFIX",
                "--prefix",
                "selection.prefix",
            ),
            accents: detect_source(
                cli.accents.is_some(),
                self.output.accents.is_some(),
                "ICON_ACCENTS__OUTPUT__ACCENTS",
                "--accent",
                "output.accents",
            ),
        };

        let paths = self.paths.resolve()?;
        let selection = self.selection.resolve();
        let output = self.output.resolve();

        let config = ResolvedConfig {
            icons_root: paths.icons_root,
            themes_root: paths.themes_root,
            base_theme: paths.base_theme,
            palette: paths.palette,
            selection,
            write_manifests: output.write_manifests,
            accents: output.accents,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}
