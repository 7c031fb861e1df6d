use super::state::use_asset_list_state;
use super::Notice;
use crate::shared::export::BrowserDownload;
use crate::shared::icons::icon;
use crate::shared::storage::today;
use contracts::domain::a001_asset::exchange::ExchangeFormat;
use contracts::domain::a001_asset::BulkAction;
use leptos::prelude::*;
use thaw::*;

fn action_icon(action: BulkAction) -> &'static str {
    match action {
        BulkAction::Transfer => "transfer",
        BulkAction::ScheduleAudit => "calendar",
        BulkAction::Export => "download",
        BulkAction::Delete => "delete",
    }
}

/// Ask for confirmation of an irreversible action via window.confirm
fn confirm_action(action: BulkAction, count: usize) -> bool {
    let message = format!("{} {} selected assets?", action.label(), count);
    web_sys::window()
        .and_then(|w| w.confirm_with_message(&message).ok())
        .unwrap_or(false)
}

/// Bar shown while anything is selected: count, bulk actions, clear
#[component]
pub fn BulkActionsBar(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    let state = use_asset_list_state();
    let selected_count = Signal::derive(move || state.with(|s| s.selected_count()));

    let run = move |action: BulkAction| {
        let count = selected_count.get_untracked();
        if action.is_destructive() && !confirm_action(action, count) {
            return;
        }
        let result = state.with_untracked(|s| {
            s.run_bulk_action(action, ExchangeFormat::Csv, today(), &mut BrowserDownload)
        });
        match result {
            Ok(message) => notice.set(Some(Notice::Info(message))),
            Err(e) => {
                log::error!("Bulk {} failed: {}", action.label(), e);
                notice.set(Some(Notice::Error(e.to_string())));
            }
        }
    };

    view! {
        <Show when=move || { selected_count.get() > 0 }>
            <div class="bulk-actions">
                <span class="bulk-actions__count">
                    {move || format!("{} selected", selected_count.get())}
                </span>
                <div class="bulk-actions__buttons">
                    {BulkAction::ALL.into_iter().map(|action| {
                        let appearance = if action.is_destructive() {
                            ButtonAppearance::Subtle
                        } else {
                            ButtonAppearance::Secondary
                        };
                        view! {
                            <Button appearance=appearance on_click=move |_| run(action)>
                                {icon(action_icon(action))}
                                {format!(" {}", action.label())}
                            </Button>
                        }
                    }).collect_view()}
                </div>
                <button
                    class="link-button"
                    on:click=move |_| state.update(|s| s.clear_selection())
                >
                    "Clear selection"
                </button>
            </div>
        </Show>
    }
}
