//! GeoIP Resolver Port
//!
//! Defines the single-call interface for resolving IP addresses to a country.

use crate::domain::entities::GeoInfo;
use std::net::IpAddr;

/// Resolver for IP address to country information.
///
/// This is the port consumers depend on. Implementations degrade
/// gracefully: a missing or unreadable database yields `None`, never an
/// error.
pub trait GeoResolver: Send + Sync {
    /// Resolve an IP address to country code, display name and flag icon.
    ///
    /// Returns None if the IP cannot be resolved to a country.
    fn resolve(&self, ip: IpAddr) -> Option<GeoInfo>;
}
