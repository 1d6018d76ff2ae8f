//! Flag Store Port
//!
//! Defines where flag icons come from.

use crate::domain::value_objects::{CountryCode, FlagSize};
use std::path::PathBuf;

/// Source of country flag icons.
pub trait FlagStore: Send + Sync {
    /// Path of the icon for `code` at `size`, if one exists.
    fn flag_path(&self, code: &CountryCode, size: FlagSize) -> Option<PathBuf>;

    /// Icon bytes for `code` at `size`, if one can be read.
    fn read_flag(&self, code: &CountryCode, size: FlagSize) -> Option<Vec<u8>>;
}
