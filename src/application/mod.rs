//! Application Layer
//!
//! Use cases built on the domain ports.

mod location_provider;

pub use location_provider::LocationProvider;
