//! locprov Library
//!
//! Resolves IP addresses to a country code, a localized country name and a
//! flag icon using a local MaxMind GeoLite2/GeoIP2 country database.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use adapters::outbound::{FsFlagStore, MaxMindCountryDatabase, MaxMindDatabaseOpener};
pub use application::LocationProvider;
pub use config::{load_config, Config};
pub use domain::entities::{CountryRecord, GeoInfo};
pub use domain::ports::{CountryDatabase, DatabaseOpener, FlagStore, GeoResolver};
pub use domain::value_objects::{Capabilities, CountryCode, FlagSize, PluginVersion};
pub use error::LocationError;
