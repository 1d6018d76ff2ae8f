//! Domain Services - Pure logic with no I/O

mod country_names;
mod database_candidates;

pub use country_names::localized_name;
pub use database_candidates::{
    candidate_databases, versioned_database, DEFAULT_DATABASE, VERSIONED_DATABASE_SINCE,
};
