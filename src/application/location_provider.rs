//! Location Provider - Main application use case
//!
//! Resolves IP addresses to countries: picks and lazily opens the country
//! database, remembers database files that failed to load, localizes
//! country names and locates flag icons.

use crate::adapters::outbound::{FsFlagStore, MaxMindDatabaseOpener};
use crate::config::Config;
use crate::domain::entities::{CountryRecord, GeoInfo};
use crate::domain::ports::{CountryDatabase, DatabaseOpener, FlagStore, GeoResolver};
use crate::domain::services::{candidate_databases, localized_name};
use crate::domain::value_objects::{Capabilities, CountryCode, FlagSize, PluginVersion};
use dashmap::DashSet;
use parking_lot::RwLock;
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Location provider - main application use case.
///
/// The database is opened on the first lookup, not at construction. Each
/// candidate file that fails to open is remembered and never tried again
/// by this provider. Once [`destroy`](Self::destroy) has run, every lookup
/// returns `None`.
pub struct LocationProvider {
    app_name: String,
    plugin_dir: PathBuf,
    plugin_version: PluginVersion,
    default_locale: String,
    opener: Arc<dyn DatabaseOpener>,
    flags: Arc<dyn FlagStore>,
    /// Loaded database, if any
    reader: RwLock<Option<Arc<dyn CountryDatabase>>>,
    /// File names that failed to load
    failed_dbs: DashSet<String>,
    destroyed: AtomicBool,
}

impl LocationProvider {
    /// Create a new location provider.
    pub fn new(
        opener: Arc<dyn DatabaseOpener>,
        flags: Arc<dyn FlagStore>,
        plugin_dir: impl Into<PathBuf>,
        plugin_version: PluginVersion,
    ) -> Self {
        Self {
            app_name: "BiglyBT".to_string(),
            plugin_dir: plugin_dir.into(),
            plugin_version,
            default_locale: "en".to_string(),
            opener,
            flags,
            reader: RwLock::new(None),
            failed_dbs: DashSet::new(),
            destroyed: AtomicBool::new(false),
        }
    }

    /// Wire a provider backed by MaxMind databases and on-disk flags.
    pub fn from_config(cfg: &Config) -> Self {
        let flags = FsFlagStore::new(
            &cfg.plugin_dir,
            cfg.bundled_flags_dir.as_ref().map(PathBuf::from),
        );

        Self::new(
            Arc::new(MaxMindDatabaseOpener),
            Arc::new(flags),
            &cfg.plugin_dir,
            PluginVersion::new(cfg.plugin_version.as_str()),
        )
        .with_app_name(cfg.app_name.as_str())
        .with_default_locale(cfg.locale.as_str())
    }

    /// Set the host application name used in [`provider_name`](Self::provider_name).
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Set the locale used by [`GeoResolver::resolve`].
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    pub fn provider_name(&self) -> String {
        format!("{} Location Provider", self.app_name)
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::COUNTRY_BY_IP | Capabilities::FLAG_BY_IP | Capabilities::ISO3166_BY_IP
    }

    /// ISO 3166-1 alpha-2 code of the country an address belongs to.
    pub fn country_code_for_ip(&self, ip: IpAddr) -> Option<CountryCode> {
        self.country(ip)?.iso_code
    }

    /// Country name for an address, in `locale` when the database has it.
    ///
    /// Falls back to the English name. Returns None when the address does
    /// not resolve to a country code.
    pub fn country_name_for_ip(&self, ip: IpAddr, locale: &str) -> Option<String> {
        let record = self.country(ip)?;
        record.iso_code.as_ref()?;
        localized_name(&record.names, locale).map(str::to_string)
    }

    /// Supported flag sizes as `[width, height]`, in size-index order.
    pub fn flag_sizes(&self) -> [[u32; 2]; 2] {
        FlagSize::all().map(|s| s.dimensions())
    }

    /// Path of the flag icon for an address.
    ///
    /// `size_index` 0 selects 18x12 icons; any other index selects 25x15.
    pub fn flag_path_for_ip(&self, ip: IpAddr, size_index: usize) -> Option<PathBuf> {
        let code = self.country_code_for_ip(ip)?;
        self.flags.flag_path(&code, FlagSize::from_index(size_index))
    }

    /// Flag icon bytes for an address.
    pub fn flag_for_ip(&self, ip: IpAddr, size_index: usize) -> Option<Vec<u8>> {
        let code = self.country_code_for_ip(ip)?;
        self.flags.read_flag(&code, FlagSize::from_index(size_index))
    }

    /// Resolve an address with an explicit locale and flag size.
    pub fn resolve_with(&self, ip: IpAddr, locale: &str, size: FlagSize) -> Option<GeoInfo> {
        let record = self.country(ip)?;
        let code = record.iso_code.clone()?;

        let mut info = GeoInfo::new(code);
        info.country_name = localized_name(&record.names, locale).map(str::to_string);
        info.flag_icon_path = self.flags.flag_path(&info.country_code, size);
        Some(info)
    }

    /// Tear down the provider.
    ///
    /// Drops the open database. Only the first call has any effect.
    pub fn destroy(&self) {
        if self.destroyed.swap(true, Ordering::SeqCst) {
            return;
        }

        if let Some(db) = self.reader.write().take() {
            tracing::info!("closed {}", db.describe());
        }
        tracing::debug!("{} destroyed", self.provider_name());
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }

    /// Whether a database is currently open.
    pub fn is_loaded(&self) -> bool {
        self.reader.read().is_some()
    }

    /// Database file names that failed to load, sorted.
    pub fn failed_databases(&self) -> Vec<String> {
        let mut failed: Vec<String> = self.failed_dbs.iter().map(|e| e.key().clone()).collect();
        failed.sort();
        failed
    }

    fn country(&self, ip: IpAddr) -> Option<CountryRecord> {
        let db = self.database()?;

        match db.lookup_country(ip) {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!("lookup of {} failed: {}", ip, e);
                None
            }
        }
    }

    /// Current database, opening one on first use.
    fn database(&self) -> Option<Arc<dyn CountryDatabase>> {
        if self.is_destroyed() {
            return None;
        }

        if let Some(db) = self.reader.read().as_ref() {
            return Some(db.clone());
        }

        let mut slot = self.reader.write();

        // another lookup may have loaded it while we waited
        if let Some(db) = slot.as_ref() {
            return Some(db.clone());
        }

        for name in candidate_databases(&self.plugin_version) {
            if let Some(db) = self.open_database(&name) {
                *slot = Some(db.clone());
                return Some(db);
            }
        }

        None
    }

    fn open_database(&self, name: &str) -> Option<Arc<dyn CountryDatabase>> {
        if self.failed_dbs.contains(name) {
            return None;
        }

        if self.is_destroyed() {
            return None;
        }

        let path = self.plugin_dir.join(name);

        match self.opener.open(&path) {
            Ok(db) => {
                tracing::info!("loaded {} from {:?}", db.describe(), path);
                Some(db)
            }
            Err(e) => {
                tracing::warn!("failed to load country database from {:?}: {}", path, e);
                self.failed_dbs.insert(name.to_string());
                None
            }
        }
    }
}

impl GeoResolver for LocationProvider {
    fn resolve(&self, ip: IpAddr) -> Option<GeoInfo> {
        self.resolve_with(ip, &self.default_locale, FlagSize::Small)
    }
}
