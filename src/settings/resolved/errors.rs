use thiserror::Error;

use super::SettingSource;

/// A setting that was read successfully but holds an unusable value.
#[derive(Debug, Error)]
#[error("invalid {key} '{value}' from {origin}: {reason}")]
pub(crate) struct ConfigError {
    pub(crate) key: &'static str,
    pub(crate) value: String,
    pub(crate) origin: SettingSource,
    pub(crate) reason: &'static str,
}

impl ConfigError {
    pub(crate) fn invalid(
        key: &'static str,
        value: impl Into<String>,
        origin: SettingSource,
        reason: &'static str,
    ) -> Self {
        Self {
            key,
            value: value.into(),
            origin,
            reason,
        }
    }
}
