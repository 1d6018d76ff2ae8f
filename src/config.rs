use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the database files and the `images` override dir
    pub plugin_dir: String,
    /// Plugin version; selects the version-qualified database
    pub plugin_version: String,
    /// Host application name, used in the provider name
    pub app_name: String,
    /// Default locale for country names
    pub locale: String,
    /// Bundled flag icons, laid out as `<dir>/18x12/us.png`
    pub bundled_flags_dir: Option<String>,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plugin_dir: ".".to_string(),
            plugin_version: String::new(),
            app_name: "BiglyBT".to_string(),
            locale: "en".to_string(),
            bundled_flags_dir: None,
            debug: false,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let plugin_dir = std::env::var("LOCPROV_PLUGIN_DIR")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| ".".to_string());

    let plugin_version = std::env::var("LOCPROV_PLUGIN_VERSION")
        .map(|v| v.trim().to_string())
        .unwrap_or_default();

    let app_name = std::env::var("LOCPROV_APP_NAME")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "BiglyBT".to_string());

    let locale = std::env::var("LOCPROV_LOCALE")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "en".to_string());

    let bundled_flags_dir = std::env::var("LOCPROV_FLAGS_DIR")
        .ok()
        .filter(|v| !v.trim().is_empty());

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        plugin_dir,
        plugin_version,
        app_name,
        locale,
        bundled_flags_dir,
        debug,
    })
}
