use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ThemeError;

/// An editor icon-theme manifest.
///
/// Only `iconDefinitions` is modelled; every other top-level field is kept in
/// [`IconTheme::extra`] so that it survives a load/save cycle. Cloning a theme
/// produces a fully independent deep copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IconTheme {
    #[serde(rename = "iconDefinitions", default)]
    pub icon_definitions: IndexMap<String, IconDefinition>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single entry of `iconDefinitions`.
///
/// `iconPath` is kept as a raw JSON value because manifests in the wild do
/// not always store a string there; only string paths are eligible for
/// accenting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IconDefinition {
    #[serde(rename = "iconPath", default, skip_serializing_if = "Option::is_none")]
    pub icon_path: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IconDefinition {
    /// Create a definition pointing at `path`.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            icon_path: Some(Value::String(path.into())),
            extra: Map::new(),
        }
    }

    /// Return the icon path when it is a string.
    pub fn icon_path(&self) -> Option<&str> {
        self.icon_path.as_ref().and_then(Value::as_str)
    }

    /// Point the definition at a different icon file.
    pub fn set_icon_path(&mut self, path: impl Into<String>) {
        self.icon_path = Some(Value::String(path.into()));
    }
}

impl IconTheme {
    /// Parse a manifest from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when the text is not a
    /// valid manifest.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Read and parse the manifest stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Read`] when the file cannot be read and
    /// [`ThemeError::Parse`] when its contents are not a manifest.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| ThemeError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Render the manifest as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Serialize`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ThemeError> {
        serde_json::to_string_pretty(self).map_err(ThemeError::Serialize)
    }

    /// Write the manifest to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Serialize`] or [`ThemeError::Write`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ThemeError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|source| ThemeError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Insert or replace a definition.
    #[must_use]
    pub fn with_definition(mut self, id: impl Into<String>, definition: IconDefinition) -> Self {
        self.icon_definitions.insert(id.into(), definition);
        self
    }

    pub fn definition(&self, id: &str) -> Option<&IconDefinition> {
        self.icon_definitions.get(id)
    }

    pub fn definition_mut(&mut self, id: &str) -> Option<&mut IconDefinition> {
        self.icon_definitions.get_mut(id)
    }

    /// Return the string icon path registered for `id`, if any.
    pub fn icon_path(&self, id: &str) -> Option<&str> {
        self.definition(id).and_then(IconDefinition::icon_path)
    }

    /// Iterate over icon identifiers in manifest order.
    pub fn icon_ids(&self) -> impl Iterator<Item = &str> {
        self.icon_definitions.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"{
        "iconDefinitions": {
            "_folder": { "iconPath": "./../icons/folder.svg" },
            "_file": { "iconPath": 42, "fontCharacter": "\\E001" }
        },
        "folder": "_folder",
        "hidesExplorerArrows": false
    }"#;

    #[test]
    fn opaque_fields_are_preserved() {
        let theme = IconTheme::from_json_str(MANIFEST).expect("parse");

        assert_eq!(theme.extra["folder"], json!("_folder"));
        assert_eq!(theme.extra["hidesExplorerArrows"], json!(false));
        let file = theme.definition("_file").expect("definition");
        assert_eq!(file.extra["fontCharacter"], json!("\\E001"));
    }

    #[test]
    fn non_string_icon_paths_are_not_exposed() {
        let theme = IconTheme::from_json_str(MANIFEST).expect("parse");

        assert_eq!(theme.icon_path("_folder"), Some("./../icons/folder.svg"));
        assert_eq!(theme.icon_path("_file"), None);
        assert_eq!(theme.icon_path("_missing"), None);
    }

    #[test]
    fn clones_are_independent() {
        let base = IconTheme::from_json_str(MANIFEST).expect("parse");
        let mut copy = base.clone();

        copy.definition_mut("_folder")
            .expect("definition")
            .set_icon_path("folder.accent.blue.svg");

        assert_eq!(base.icon_path("_folder"), Some("./../icons/folder.svg"));
        assert_eq!(copy.icon_path("_folder"), Some("folder.accent.blue.svg"));
    }

    #[test]
    fn ids_follow_manifest_order() {
        let theme = IconTheme::from_json_str(MANIFEST).expect("parse");
        let ids: Vec<&str> = theme.icon_ids().collect();
        assert_eq!(ids, vec!["_folder", "_file"]);
    }

    #[test]
    fn save_then_load_keeps_definitions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.json");
        let theme = IconTheme::from_json_str(MANIFEST).expect("parse");

        theme.save(&path).expect("save");
        let loaded = IconTheme::load(&path).expect("load");

        assert_eq!(loaded, theme);
    }

    #[test]
    fn load_reports_missing_files() {
        let dir = tempdir().unwrap();
        let err = IconTheme::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ThemeError::Read { .. }));
    }

    #[test]
    fn load_reports_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = IconTheme::load(&path).unwrap_err();
        assert!(matches!(err, ThemeError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
