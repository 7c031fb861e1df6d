use super::state::use_asset_list_state;
use super::Notice;
use crate::shared::excel_importer::{read_excel_rows, read_file_text};
use crate::shared::export::BrowserDownload;
use crate::shared::icons::icon;
use crate::shared::storage::{now, today};
use contracts::domain::a001_asset::exchange::ExchangeFormat;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Import/export dropdown; imports go through a hidden file input
#[component]
pub fn ImportExportMenu(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    let state = use_asset_list_state();
    let (is_open, set_is_open) = signal(false);
    let (is_importing, set_is_importing) = signal(false);
    let import_format = RwSignal::new(ExchangeFormat::Csv);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let pick_file = move |format: ExchangeFormat| {
        import_format.set(format);
        set_is_open.set(false);
        if let Some(input) = file_input.get_untracked() {
            input.set_accept(format.accept());
            input.set_value("");
            input.click();
        }
    };

    let on_file_selected = move |_| {
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let format = import_format.get_untracked();
        log::info!("Importing {} as {}", file.name(), format.label());
        set_is_importing.set(true);

        spawn_local(async move {
            let outcome = match format {
                ExchangeFormat::Excel => match read_excel_rows(file).await {
                    Ok(rows) => state
                        .try_update(|s| s.import_rows(rows, now()))
                        .map(|r| r.map_err(|e| e.to_string())),
                    Err(e) => Some(Err(e)),
                },
                _ => match read_file_text(file).await {
                    Ok(content) => state
                        .try_update(|s| s.import_text(format, &content, now()))
                        .map(|r| r.map_err(|e| e.to_string())),
                    Err(e) => Some(Err(e)),
                },
            };

            match outcome {
                Some(Ok(outcome)) if outcome.accepted() == 0 => {
                    notice.set(Some(Notice::Error(outcome.summary())));
                }
                Some(Ok(outcome)) => notice.set(Some(Notice::Info(outcome.summary()))),
                Some(Err(e)) => {
                    log::error!("Import failed: {}", e);
                    notice.set(Some(Notice::Error(e)));
                }
                None => log::warn!("Asset list disposed before the import finished"),
            }
            set_is_importing.set(false);
        });
    };

    let export = move |format: ExchangeFormat| {
        set_is_open.set(false);
        let result = state.with_untracked(|s| s.export(format, today(), &mut BrowserDownload));
        match result {
            Ok(count) => notice.set(Some(Notice::Info(format!(
                "Exported {} assets as {}",
                count,
                format.label()
            )))),
            Err(e) => {
                log::error!("Export failed: {}", e);
                notice.set(Some(Notice::Error(e.to_string())));
            }
        }
    };

    view! {
        <div class="menu">
            <input
                node_ref=file_input
                type="file"
                style="display: none;"
                on:change=on_file_selected
            />
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=Signal::derive(move || is_importing.get())
                on_click=move |_| set_is_open.update(|o| *o = !*o)
            >
                {icon("upload")}
                {move || if is_importing.get() { " Importing..." } else { " Import / Export" }}
            </Button>

            <Show when=move || is_open.get()>
                <div class="menu__dropdown">
                    <div class="menu__section">
                        <span class="menu__label">"Import"</span>
                        {ExchangeFormat::ALL.into_iter().filter(|f| f.can_import()).map(|format| view! {
                            <button class="menu__item" on:click=move |_| pick_file(format)>
                                {icon("upload")}
                                {format!(" Import {}", format.label())}
                            </button>
                        }).collect_view()}
                    </div>
                    <div class="menu__section">
                        <span class="menu__label">
                            {move || {
                                let selected = state.with(|s| s.selected_count());
                                if selected > 0 {
                                    format!("Export ({} selected)", selected)
                                } else {
                                    "Export".to_string()
                                }
                            }}
                        </span>
                        {ExchangeFormat::ALL.into_iter().map(|format| view! {
                            <button class="menu__item" on:click=move |_| export(format)>
                                {icon("download")}
                                {format!(" Export {}", format.label())}
                            </button>
                        }).collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}
