mod country_database;
mod flag_store;
mod geo_resolver;

pub use country_database::{CountryDatabase, DatabaseOpener};
pub use flag_store::FlagStore;
pub use geo_resolver::GeoResolver;
