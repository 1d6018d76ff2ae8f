//! Database Candidate Selection
//!
//! Decides which database files to try, in order.

use crate::domain::value_objects::PluginVersion;

/// File name of the default country database.
pub const DEFAULT_DATABASE: &str = "GeoLite2-Country.mmdb";

/// Versions above this ship a version-qualified database next to the default.
pub const VERSIONED_DATABASE_SINCE: &str = "0.1.1";

/// Name of the database file bundled with a specific plugin version.
pub fn versioned_database(version: &PluginVersion) -> String {
    format!("GeoLite2-Country_{}.mmdb", version.as_str())
}

/// Candidate database file names, most specific first.
///
/// The version-qualified file is only considered when the version is known
/// and strictly newer than [`VERSIONED_DATABASE_SINCE`]. The default file
/// is always the last candidate.
pub fn candidate_databases(version: &PluginVersion) -> Vec<String> {
    let mut candidates = Vec::with_capacity(2);

    if !version.is_empty() && *version > PluginVersion::new(VERSIONED_DATABASE_SINCE) {
        candidates.push(versioned_database(version));
    }

    candidates.push(DEFAULT_DATABASE.to_string());
    candidates
}
