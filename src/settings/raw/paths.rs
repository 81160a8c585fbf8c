use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::super::util::absolutize;

const DEFAULT_ICONS_ROOT: &str = "icons";
const DEFAULT_THEMES_ROOT: &str = "dist";
const DEFAULT_BASE_THEME: &str = "material-icons.json";
const DEFAULT_PALETTE: &str = "defaults.json";

/// Filesystem locations as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PathsSection {
    pub(super) icons_root: Option<PathBuf>,
    pub(super) themes_root: Option<PathBuf>,
    pub(super) base_theme: Option<PathBuf>,
    pub(super) palette: Option<PathBuf>,
}

pub(super) struct ResolvedPaths {
    pub(super) icons_root: PathBuf,
    pub(super) themes_root: PathBuf,
    pub(super) base_theme: PathBuf,
    pub(super) palette: PathBuf,
}

impl PathsSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(path) = cli.icons_root.clone() {
            self.icons_root = Some(path);
        }
        if let Some(path) = cli.themes_root.clone() {
            self.themes_root = Some(path);
        }
        if let Some(path) = cli.base_theme.clone() {
            self.base_theme = Some(path);
        }
        if let Some(path) = cli.palette.clone() {
            self.palette = Some(path);
        }
    }

    /// Fill defaults and anchor every path to the working directory.
    pub(super) fn resolve(self) -> Result<ResolvedPaths> {
        let icons_root = self
            .icons_root
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ICONS_ROOT));
        let themes_root = self
            .themes_root
            .unwrap_or_else(|| PathBuf::from(DEFAULT_THEMES_ROOT));
        let base_theme = self
            .base_theme
            .unwrap_or_else(|| themes_root.join(DEFAULT_BASE_THEME));
        let palette = self
            .palette
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PALETTE));

        Ok(ResolvedPaths {
            icons_root: absolutize(&icons_root)?,
            themes_root: absolutize(&themes_root)?,
            base_theme: absolutize(&base_theme)?,
            palette: absolutize(&palette)?,
        })
    }
}
