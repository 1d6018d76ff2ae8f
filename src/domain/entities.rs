//! Domain Entities - Core business objects
//!
//! These entities represent what a country lookup produces. They have no
//! external dependencies beyond serde.

use crate::domain::value_objects::CountryCode;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Country data read from a database record.
///
/// `names` maps a locale tag (`en`, `pt-BR`, `zh-CN`) to the country name
/// in that language, exactly as the database stores it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryRecord {
    /// ISO 3166-1 alpha-2 code, if the record carries a valid one
    pub iso_code: Option<CountryCode>,
    /// Localized names keyed by locale tag
    pub names: BTreeMap<String, String>,
}

impl CountryRecord {
    pub fn new(iso_code: Option<CountryCode>) -> Self {
        Self {
            iso_code,
            names: BTreeMap::new(),
        }
    }

    /// Builder-style helper to add a localized name.
    pub fn with_name(mut self, locale: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.insert(locale.into(), name.into());
        self
    }
}

/// Geographic information resolved from an IP address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeoInfo {
    /// Country code (ISO 3166-1 alpha-2)
    pub country_code: CountryCode,
    /// Display name in the requested locale
    pub country_name: Option<String>,
    /// Path to the flag icon, when one exists on disk
    pub flag_icon_path: Option<PathBuf>,
}

impl GeoInfo {
    pub fn new(country_code: CountryCode) -> Self {
        Self {
            country_code,
            country_name: None,
            flag_icon_path: None,
        }
    }
}
