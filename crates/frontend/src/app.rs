use crate::domain::a001_asset::ui::list::AssetList;
use crate::domain::a001_asset::ui::stats::AssetStatsPanel;
use crate::shared::storage::load_dashboard_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Config is read once per session; the list state lives for the whole app.
    let config = load_dashboard_config();
    let state = crate::domain::a001_asset::ui::list::state::create_state(&config);
    provide_context(state);

    view! {
        <main class="app">
            <AssetStatsPanel />
            <AssetList />
        </main>
    }
}
