//! Browser-side settings: the dashboard config override kept in localStorage

use contracts::shared::config::{load_config, DashboardConfig};

/// localStorage key holding a TOML config override
pub const CONFIG_STORAGE_KEY: &str = "asset_registry_config";

fn read_local_storage(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

/// Dashboard config: the stored override when valid, else the built-in default
pub fn load_dashboard_config() -> DashboardConfig {
    let override_toml = read_local_storage(CONFIG_STORAGE_KEY);
    match load_config(override_toml.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load dashboard config: {}", e);
            DashboardConfig::default()
        }
    }
}

/// Current time from the browser clock
pub fn now() -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::from_timestamp_millis(js_sys::Date::now() as i64)
        .unwrap_or_default()
}

pub fn today() -> chrono::NaiveDate {
    now().date_naive()
}
