//! Domain Layer
//!
//! Value objects, entities, ports and pure services. Nothing here touches
//! the filesystem or the database reader directly.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{CountryRecord, GeoInfo};
pub use value_objects::{Capabilities, CountryCode, FlagSize, PluginVersion};
