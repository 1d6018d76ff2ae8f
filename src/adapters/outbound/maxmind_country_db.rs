//! MaxMind Country Database
//!
//! Implements the country database ports using MaxMind GeoLite2/GeoIP2
//! `.mmdb` files.

use crate::domain::entities::CountryRecord;
use crate::domain::ports::{CountryDatabase, DatabaseOpener};
use crate::domain::value_objects::CountryCode;
use crate::error::{LocationError, Result};
use maxminddb::{MaxMindDBError, Reader};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::net::IpAddr;
use std::path::Path;
use std::sync::Arc;

/// MaxMind country database.
///
/// Holds the whole `.mmdb` file in memory and decodes only the `country`
/// part of each record.
pub struct MaxMindCountryDatabase {
    reader: Reader<Vec<u8>>,
}

impl MaxMindCountryDatabase {
    /// Load a database from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = Reader::open_readfile(path).map_err(|e| LocationError::Open {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self { reader })
    }

    /// Load a database already read into memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let reader = Reader::from_source(bytes).map_err(|e| LocationError::Open {
            path: "<memory>".into(),
            reason: e.to_string(),
        })?;
        Ok(Self { reader })
    }

    /// Database type from the file metadata (`GeoLite2-Country`).
    pub fn database_type(&self) -> &str {
        &self.reader.metadata.database_type
    }

    /// Build time of the database, seconds since the Unix epoch.
    pub fn build_epoch(&self) -> u64 {
        self.reader.metadata.build_epoch
    }
}

impl CountryDatabase for MaxMindCountryDatabase {
    fn lookup_country(&self, ip: IpAddr) -> Result<Option<CountryRecord>> {
        #[derive(Debug, Deserialize)]
        struct Country {
            iso_code: Option<String>,
            names: Option<BTreeMap<String, String>>,
        }

        #[derive(Debug, Deserialize)]
        struct CountryResp {
            country: Option<Country>,
        }

        let resp = match self.reader.lookup::<CountryResp>(ip) {
            Ok(resp) => resp,
            Err(MaxMindDBError::AddressNotFoundError(_)) => return Ok(None),
            Err(e) => return Err(LocationError::Lookup(e.to_string())),
        };

        let Some(country) = resp.country else {
            return Ok(None);
        };

        Ok(Some(CountryRecord {
            iso_code: country.iso_code.as_deref().and_then(CountryCode::parse),
            names: country.names.unwrap_or_default(),
        }))
    }

    fn describe(&self) -> String {
        format!(
            "{} (built {})",
            self.database_type(),
            self.build_epoch()
        )
    }
}

/// Opens `.mmdb` files as [`MaxMindCountryDatabase`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxMindDatabaseOpener;

impl DatabaseOpener for MaxMindDatabaseOpener {
    fn open(&self, path: &Path) -> Result<Arc<dyn CountryDatabase>> {
        let db = MaxMindCountryDatabase::from_file(path)?;
        Ok(Arc::new(db))
    }
}
