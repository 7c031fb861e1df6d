use contracts::domain::a001_asset::{Asset, AssetListController};
use contracts::shared::config::DashboardConfig;
use leptos::prelude::*;

/// Assets shown on first load
const SEED_ASSETS: &str = include_str!("seed.json");

fn seed_assets() -> Vec<Asset> {
    match serde_json::from_str(SEED_ASSETS) {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("Failed to parse seed assets: {}", e);
            Vec::new()
        }
    }
}

/// List state shared through context: one controller for the whole session
pub type AssetListState = RwSignal<AssetListController>;

pub fn create_state(config: &DashboardConfig) -> AssetListState {
    RwSignal::new(AssetListController::new(seed_assets(), config))
}

pub fn use_asset_list_state() -> AssetListState {
    use_context::<AssetListState>().unwrap_or_else(|| {
        log::warn!("Asset list state missing from context, using defaults");
        RwSignal::new(AssetListController::default())
    })
}
