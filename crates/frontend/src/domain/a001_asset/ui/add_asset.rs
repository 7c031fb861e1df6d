use super::list::state::use_asset_list_state;
use super::list::Notice;
use crate::shared::modal::Modal;
use crate::shared::storage::today;
use chrono::NaiveDate;
use contracts::domain::a001_asset::{AssetStatus, AssetType, NewAssetForm};
use leptos::prelude::*;
use thaw::*;

/// Form for adding an asset by hand
#[component]
pub fn AddAssetDialog(on_close: Callback<()>, notice: RwSignal<Option<Notice>>) -> impl IntoView {
    let state = use_asset_list_state();

    let name = RwSignal::new(String::new());
    let asset_type = RwSignal::new(AssetType::Hardware);
    let status = RwSignal::new(AssetStatus::Active);
    let owner = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let last_verified = RwSignal::new(today().format("%Y-%m-%d").to_string());
    let error = RwSignal::new(None::<String>);

    let submit = move |_| {
        let date = last_verified.get_untracked();
        let Ok(verified_on) = NaiveDate::parse_from_str(&date, "%Y-%m-%d") else {
            error.set(Some(format!("Invalid date: {}", date)));
            return;
        };
        let form = NewAssetForm {
            name: name.get_untracked(),
            asset_type: asset_type.get_untracked(),
            status: status.get_untracked(),
            owner: owner.get_untracked(),
            location: location.get_untracked(),
            last_verified: verified_on,
        };
        match state.try_update(|s| s.add_asset(form, today())) {
            Some(Ok(asset)) => {
                notice.set(Some(Notice::Info(format!("Added {} ({})", asset.name, asset.id))));
                on_close.run(());
            }
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => log::warn!("Asset list disposed before the asset was added"),
        }
    };

    view! {
        <Modal title="Add Asset" on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form">
                <label class="form__field">
                    <span class="form__label">"Asset Name"</span>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"Type"</span>
                    <select
                        class="form__input"
                        on:change=move |ev| {
                            if let Some(t) = AssetType::from_label(&event_target_value(&ev)) {
                                asset_type.set(t);
                            }
                        }
                    >
                        {AssetType::ALL.into_iter().map(|t| view! {
                            <option value={t.label()} selected={t == asset_type.get_untracked()}>
                                {t.label()}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
                <label class="form__field">
                    <span class="form__label">"Status"</span>
                    <select
                        class="form__input"
                        on:change=move |ev| {
                            if let Some(s) = AssetStatus::from_label(&event_target_value(&ev)) {
                                status.set(s);
                            }
                        }
                    >
                        {AssetStatus::ALL.into_iter().map(|s| view! {
                            <option value={s.label()} selected={s == status.get_untracked()}>
                                {s.label()}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
                <label class="form__field">
                    <span class="form__label">"Assigned User"</span>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || owner.get()
                        on:input=move |ev| owner.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"Location"</span>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"Last Verified"</span>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || last_verified.get()
                        on:input=move |ev| last_verified.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    "Add Asset"
                </Button>
            </div>
        </Modal>
    }
}
