//! Filesystem Flag Store
//!
//! Implements FlagStore over PNG icons laid out as `<root>/<WxH>/<code>.png`.

use crate::domain::ports::FlagStore;
use crate::domain::value_objects::{CountryCode, FlagSize};
use crate::error::LocationError;
use std::path::{Path, PathBuf};

/// Flag icons read from disk.
///
/// Icons under `<plugin_dir>/images` take precedence over the bundled icon
/// directory. Whether the override directory exists is checked once, when
/// the store is created.
#[derive(Debug, Clone)]
pub struct FsFlagStore {
    images_dir: Option<PathBuf>,
    bundled_dir: Option<PathBuf>,
}

impl FsFlagStore {
    /// Create a store for a plugin directory and an optional bundled icon set.
    pub fn new(plugin_dir: impl AsRef<Path>, bundled_dir: Option<PathBuf>) -> Self {
        let images = plugin_dir.as_ref().join("images");
        let images_dir = if images.is_dir() {
            Some(images)
        } else {
            tracing::debug!("no flag override directory at {:?}", images);
            None
        };

        Self {
            images_dir,
            bundled_dir,
        }
    }

    fn file_name(code: &CountryCode) -> String {
        format!("{}.png", code.to_lowercase())
    }

    /// Candidate icon paths, in lookup order.
    fn candidates(&self, code: &CountryCode, size: FlagSize) -> Vec<PathBuf> {
        let file = Self::file_name(code);
        [self.images_dir.as_ref(), self.bundled_dir.as_ref()]
            .into_iter()
            .flatten()
            .map(|root| root.join(size.dir_name()).join(&file))
            .collect()
    }

    /// First candidate that reads successfully, with its contents.
    ///
    /// A candidate that exists but cannot be read is logged and skipped.
    fn first_readable(&self, code: &CountryCode, size: FlagSize) -> Option<(PathBuf, Vec<u8>)> {
        for path in self.candidates(code, size) {
            if !path.is_file() {
                continue;
            }
            match std::fs::read(&path) {
                Ok(bytes) => return Some((path, bytes)),
                Err(source) => {
                    let err = LocationError::Io { path, source };
                    tracing::warn!("{}", err);
                }
            }
        }
        None
    }
}

impl FlagStore for FsFlagStore {
    fn flag_path(&self, code: &CountryCode, size: FlagSize) -> Option<PathBuf> {
        self.first_readable(code, size).map(|(path, _)| path)
    }

    fn read_flag(&self, code: &CountryCode, size: FlagSize) -> Option<Vec<u8>> {
        self.first_readable(code, size).map(|(_, bytes)| bytes)
    }
}
