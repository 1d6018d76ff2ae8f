//! Adapters
//!
//! Inbound: the command line front-end. Outbound: MaxMind database files
//! and flag icons on disk.

pub mod inbound;
pub mod outbound;
