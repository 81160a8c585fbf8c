use log::debug;

use crate::manifest::IconTheme;

/// Prefix shared by the folder icon definitions of material-style themes.
pub const DEFAULT_PREFIX: &str = "_folder";

/// Source of the icon identifiers that may receive accent variants.
///
/// The returned order is the order in which icons are processed. An
/// implementation may return identifiers that are absent from `theme`; the
/// generator treats those as recoverable misses.
pub trait AccentableIcons {
    fn accentable_icons(&self, theme: &IconTheme) -> Vec<String>;
}

/// A fixed, ordered list of icon identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconList {
    ids: Vec<String>,
}

impl IconList {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

impl AccentableIcons for IconList {
    fn accentable_icons(&self, _theme: &IconTheme) -> Vec<String> {
        self.ids.clone()
    }
}

/// Selects every definition whose identifier starts with a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSelector {
    prefix: String,
}

impl PrefixSelector {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for PrefixSelector {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl AccentableIcons for PrefixSelector {
    fn accentable_icons(&self, theme: &IconTheme) -> Vec<String> {
        let ids: Vec<String> = theme
            .icon_ids()
            .filter(|id| id.starts_with(&self.prefix))
            .map(str::to_string)
            .collect();
        debug!("{} icons match prefix '{}'", ids.len(), self.prefix);
        ids
    }
}

impl<T: AccentableIcons + ?Sized> AccentableIcons for Box<T> {
    fn accentable_icons(&self, theme: &IconTheme) -> Vec<String> {
        (**self).accentable_icons(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::IconDefinition;

    fn theme() -> IconTheme {
        IconTheme::default()
            .with_definition("_folder_open", IconDefinition::new("folder-open.svg"))
            .with_definition("_file", IconDefinition::new("file.svg"))
            .with_definition("_folder", IconDefinition::new("folder.svg"))
    }

    #[test]
    fn icon_list_returns_ids_in_configured_order() {
        let list = IconList::new(["b", "a", "missing"]);
        assert_eq!(list.accentable_icons(&theme()), vec!["b", "a", "missing"]);
    }

    #[test]
    fn prefix_selector_follows_manifest_order() {
        let selector = PrefixSelector::default();
        assert_eq!(
            selector.accentable_icons(&theme()),
            vec!["_folder_open", "_folder"]
        );
    }

    #[test]
    fn boxed_selectors_delegate() {
        let selector: Box<dyn AccentableIcons> = Box::new(PrefixSelector::new("_file"));
        assert_eq!(selector.accentable_icons(&theme()), vec!["_file"]);
    }
}
