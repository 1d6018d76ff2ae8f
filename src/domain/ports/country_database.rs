//! Country Database Ports
//!
//! Defines the interface for opening and querying a country database file.
//! Implementations may use MaxMind GeoLite2 or an in-memory table.

use crate::domain::entities::CountryRecord;
use crate::error::Result;
use std::net::IpAddr;
use std::path::Path;
use std::sync::Arc;

/// An opened, read-only country database.
pub trait CountryDatabase: Send + Sync {
    /// Look up the country record for an address.
    ///
    /// An address the database has no entry for is `Ok(None)`; an error
    /// means the record could not be decoded.
    fn lookup_country(&self, ip: IpAddr) -> Result<Option<CountryRecord>>;

    /// Short human-readable description used in log lines.
    fn describe(&self) -> String {
        "country database".to_string()
    }
}

/// Opens country database files.
///
/// Kept separate from [`CountryDatabase`] so the provider can defer
/// opening until the first lookup and retry other candidate files.
pub trait DatabaseOpener: Send + Sync {
    fn open(&self, path: &Path) -> Result<Arc<dyn CountryDatabase>>;
}
