use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub list: ListConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    /// Rows per page in the table view
    pub table_page_size: usize,
    /// Cards per page in the grid view
    pub grid_page_size: usize,
    /// Column key used when no sort plan is configured
    pub default_sort_column: String,
    /// "asc" or "desc"
    pub default_sort_direction: String,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[list]
table_page_size = 10
grid_page_size = 12
default_sort_column = "name"
default_sort_direction = "asc"
"#;

static DEFAULT: Lazy<DashboardConfig> = Lazy::new(|| {
    toml::from_str(DEFAULT_CONFIG).unwrap_or(DashboardConfig {
        list: ListConfig {
            table_page_size: 10,
            grid_page_size: 12,
            default_sort_column: "name".to_string(),
            default_sort_direction: "asc".to_string(),
        },
    })
});

impl Default for DashboardConfig {
    fn default() -> Self {
        DEFAULT.clone()
    }
}

/// Parse and validate a TOML configuration
pub fn parse_config(contents: &str) -> anyhow::Result<DashboardConfig> {
    let config: DashboardConfig = toml::from_str(contents)?;
    if config.list.table_page_size == 0 || config.list.grid_page_size == 0 {
        anyhow::bail!("page sizes must be greater than zero");
    }
    Ok(config)
}

/// Load configuration
///
/// Uses the override when given and valid, otherwise falls back to the
/// embedded default.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<DashboardConfig> {
    if let Some(contents) = override_toml {
        match parse_config(contents) {
            Ok(config) => {
                log::info!("Loaded dashboard config override");
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring invalid config override: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}
