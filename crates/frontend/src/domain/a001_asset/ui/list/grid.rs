use super::state::use_asset_list_state;
use crate::shared::components::ui::AssetStatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::storage::now;
use contracts::domain::a001_asset::Asset;
use contracts::shared::date_utils::format_relative_long;
use leptos::prelude::*;

/// Card layout of the current page
#[component]
pub fn AssetGrid() -> impl IntoView {
    let state = use_asset_list_state();

    view! {
        <div class="asset-grid">
            <For
                each=move || state.with(|s| s.paginated_revisions())
                // A replaced record gets a new key and is rebuilt
                key=|(revision, asset)| (asset.id.clone(), *revision)
                children=move |(_, asset)| view! { <AssetCard asset=asset /> }
            />
        </div>
    }
}

#[component]
fn AssetCard(asset: Asset) -> impl IntoView {
    let state = use_asset_list_state();
    let id = asset.id.clone();
    let id_for_check = asset.id.clone();
    let id_for_toggle = asset.id.clone();
    let name = asset.name.clone();
    let verified = format_relative_long(asset.last_verified, now());

    view! {
        <div
            class="asset-card"
            class:asset-card--selected=move || state.with(|s| s.is_selected(&id))
        >
            <div class="asset-card__header">
                <input
                    type="checkbox"
                    class="table__checkbox"
                    prop:checked=move || state.with(|s| s.is_selected(&id_for_check))
                    on:change=move |_| state.update(|s| s.toggle_selection(id_for_toggle.clone()))
                />
                <AssetStatusBadge status=asset.status />
            </div>
            <div class="asset-card__title">
                {move || state.with(|s| highlight_matches(&name, s.search_term()))}
            </div>
            <div class="asset-card__meta">
                <span class="table__mono">{asset.id.to_string()}</span>
                " • "
                {asset.asset_type.label()}
            </div>
            <div class="asset-card__row">
                <span class="avatar">{asset.assigned_user.initials.clone()}</span>
                {asset.assigned_user.name.clone()}
            </div>
            <div class="asset-card__row">
                {icon("map-pin")}
                {asset.location.clone()}
            </div>
            <div class="asset-card__footer">{verified}</div>
        </div>
    }
}
