//! Error types for the location provider.

use std::path::PathBuf;

/// Errors raised while opening or querying a country database.
///
/// The provider itself never surfaces these to callers: a failure
/// degrades to "no result". They exist so adapters can report what went
/// wrong and the provider can log it.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("failed to open country database {path:?}: {reason}")]
    Open { path: PathBuf, reason: String },

    #[error("country lookup failed: {0}")]
    Lookup(String),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LocationError>;
