//! Error types for the settings store.
//!
//! These never escape [`crate::config::Config`]: the config layer logs them and
//! falls back to defaults. They are public for callers that drive
//! [`crate::settings::Settings`] directly.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading or writing a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The file could not be read, written, or renamed into place.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not valid TOML.
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The in-memory document could not be serialized.
    #[error("could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl SettingsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SettingsError::Io {
            path: path.into(),
            source,
        }
    }
}
