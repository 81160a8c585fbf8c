use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing icon-theme manifests.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The manifest file could not be read from disk.
    #[error("failed to read icon theme {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The manifest file is not a valid icon-theme document.
    #[error("failed to parse icon theme {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The manifest could not be serialized back to JSON.
    #[error("failed to serialize icon theme")]
    Serialize(#[source] serde_json::Error),

    /// The manifest could not be written to disk.
    #[error("failed to write icon theme {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
