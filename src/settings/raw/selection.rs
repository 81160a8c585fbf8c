use icon_theme::DEFAULT_PREFIX;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::super::resolved::Selection;
use super::super::util::sanitize_names;

/// Which icon definitions receive accent variants.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SelectionSection {
    pub(super) icons: Option<Vec<String>>,
    pub(super) prefix: Option<String>,
}

impl SelectionSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(icons) = &cli.icons {
            self.icons = Some(icons.clone());
        }
        if let Some(prefix) = cli.prefix.clone() {
            self.prefix = Some(prefix);
        }
    }

    /// An explicit list wins over a prefix.
    pub(super) fn resolve(self) -> Selection {
        match self.icons {
            Some(icons) => Selection::Icons(sanitize_names(icons)),
            None => Selection::Prefix(
                self.prefix
                    .map(|prefix| prefix.trim().to_string())
                    .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            ),
        }
    }
}
