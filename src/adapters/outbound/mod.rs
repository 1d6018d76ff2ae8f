mod fs_flag_store;
mod maxmind_country_db;

pub use fs_flag_store::FsFlagStore;
pub use maxmind_country_db::{MaxMindCountryDatabase, MaxMindDatabaseOpener};
