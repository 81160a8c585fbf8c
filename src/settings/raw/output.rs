use serde::Deserialize;

use crate::cli::CliArgs;

use super::super::util::drop_blank_names;

/// What a run produces besides the accent icons themselves.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct OutputSection {
    pub(super) write_manifests: Option<bool>,
    pub(super) accents: Option<Vec<String>>,
}

pub(super) struct ResolvedOutput {
    pub(super) write_manifests: bool,
    pub(super) accents: Option<Vec<String>>,
}

impl OutputSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(value) = cli.write_manifests {
            self.write_manifests = Some(value);
        }
        if let Some(accents) = &cli.accents {
            self.accents = Some(accents.clone());
        }
    }

    pub(super) fn resolve(self) -> ResolvedOutput {
        ResolvedOutput {
            write_manifests: self.write_manifests.unwrap_or(false),
            accents: self.accents.map(drop_blank_names),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_filter_is_not_trimmed() {
        let section = OutputSection {
            write_manifests: None,
            accents: Some(vec![" blue ".into(), "".into()]),
        };

        let output = section.resolve();

        assert!(!output.write_manifests);
        assert_eq!(output.accents, Some(vec![" blue ".to_string()]));
    }
}
