mod bulk_actions;
mod filter_menu;
mod grid;
mod import_export_menu;
mod sort_menu;
pub mod state;

use self::bulk_actions::BulkActionsBar;
use self::filter_menu::FilterMenu;
use self::grid::AssetGrid;
use self::import_export_menu::ImportExportMenu;
use self::sort_menu::SortMenu;
use self::state::use_asset_list_state;
use super::add_asset::AddAssetDialog;
use crate::shared::components::filter_tag::FilterTag;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::table_header_checkbox::CheckboxState;
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::ui::{AssetStatusBadge, Badge};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, highlight_matches, SearchInput};
use crate::shared::storage::now;
use contracts::domain::a001_asset::{Asset, AssetColumn, ViewMode};
use contracts::shared::date_utils::format_relative_short;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Number of page buttons between the first and last page
const MAX_VISIBLE_PAGES: usize = 5;

/// Info notices hide themselves after this delay; errors stay until closed
const NOTICE_TIMEOUT_MS: u32 = 5_000;

/// Message shown above the list after an import, export or bulk action
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Info(String),
    Error(String),
}

#[component]
pub fn AssetList() -> impl IntoView {
    let state = use_asset_list_state();
    let notice = RwSignal::new(None::<Notice>);
    let show_add_dialog = RwSignal::new(false);

    let total_count = Signal::derive(move || state.with(|s| s.store().len()));
    let filtered_count = Signal::derive(move || state.with(|s| s.filtered_assets().len()));
    let search_term = Signal::derive(move || state.with(|s| s.search_term().to_string()));
    let view_mode = Signal::derive(move || state.with(|s| s.view_mode()));

    Effect::new(move |_| {
        if let Some(shown @ Notice::Info(_)) = notice.get() {
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                if notice.get_untracked().as_ref() == Some(&shown) {
                    notice.set(None);
                }
            });
        }
    });

    let on_search = Callback::new(move |term: String| state.update(|s| s.set_search_term(term)));

    let chips = move || {
        state.with(|s| s.filter_chips()).into_iter().map(|chip| {
            let (label, value, marker) = (chip.label.clone(), chip.value.clone(), chip.icon.clone());
            view! {
                <FilterTag
                    label=label
                    value=value
                    marker=marker
                    on_remove=Callback::new(move |_| state.update(|s| s.remove_filter(&chip)))
                />
            }
        }).collect_view()
    };

    view! {
        <section class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Assets"</h1>
                    <Badge variant="primary".to_string()>
                        {move || {
                            let (filtered, total) = (filtered_count.get(), total_count.get());
                            if filtered == total {
                                total.to_string()
                            } else {
                                format!("{} of {}", filtered, total)
                            }
                        }}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <ImportExportMenu notice=notice />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| show_add_dialog.set(true)
                    >
                        {icon("plus")}
                        " Add Asset"
                    </Button>
                </div>
            </div>

            <div class="toolbar">
                <SearchInput value=search_term on_change=on_search />
                <FilterMenu />
                <SortMenu />
                <div class="view-toggle">
                    {[ViewMode::Table, ViewMode::Grid].into_iter().map(|mode| view! {
                        <button
                            class="view-toggle__button"
                            class:view-toggle__button--active=move || view_mode.get() == mode
                            title={mode.label()}
                            on:click=move |_| state.update(|s| s.set_view_mode(mode))
                        >
                            {icon(match mode {
                                ViewMode::Table => "table",
                                ViewMode::Grid => "grid",
                            })}
                        </button>
                    }).collect_view()}
                </div>
            </div>

            <div class="filter-panel__tags">{chips}</div>

            {move || notice.get().map(|n| {
                let (class, text) = match n {
                    Notice::Info(text) => ("alert alert--info", text),
                    Notice::Error(text) => ("alert alert--error", text),
                };
                view! {
                    <div class=class>
                        <span class="alert__text">{text}</span>
                        <button class="alert__close" on:click=move |_| notice.set(None)>
                            {icon("x")}
                        </button>
                    </div>
                }
            })}

            <BulkActionsBar notice=notice />

            <Show
                when=move || { filtered_count.get() > 0 }
                fallback=move || view! {
                    <div class="empty-state">
                        <p class="empty-state__title">"No assets found"</p>
                        <p class="empty-state__hint">"Try adjusting the search or filters."</p>
                    </div>
                }
            >
                {move || match view_mode.get() {
                    ViewMode::Table => view! { <AssetTable /> }.into_any(),
                    ViewMode::Grid => view! { <AssetGrid /> }.into_any(),
                }}
            </Show>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.current_page()))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                has_previous=Signal::derive(move || state.with(|s| s.has_previous_page()))
                has_next=Signal::derive(move || state.with(|s| s.has_next_page()))
                page_items=Signal::derive(move || state.with(|s| s.page_items(MAX_VISIBLE_PAGES)))
                range_label=Signal::derive(move || state.with(|s| s.range_label()))
                on_page_change=Callback::new(move |page| state.update(|s| s.set_current_page(page)))
            />

            <Show when=move || show_add_dialog.get()>
                <AddAssetDialog
                    on_close=Callback::new(move |_| show_add_dialog.set(false))
                    notice=notice
                />
            </Show>
        </section>
    }
}

/// Sortable header cell; a click toggles the column as the only sort key
#[component]
fn SortableHeader(column: AssetColumn) -> impl IntoView {
    let state = use_asset_list_state();
    let direction = move || state.with(|s| s.sort().indicator(column));

    view! {
        <TableHeaderCell resizable=false class="resizable">
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| state.update(|s| s.sort_by(column, None))
            >
                {column.label()}
                <span class=move || get_sort_class(direction())>
                    {move || get_sort_indicator(direction())}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[component]
fn AssetTable() -> impl IntoView {
    let state = use_asset_list_state();

    let header_state = Signal::derive(move || {
        state.with(|s| {
            let visible = s.paginated_assets();
            let selected = visible.iter().filter(|a| s.is_selected(&a.id)).count();
            CheckboxState::from_counts(selected, visible.len())
        })
    });

    let on_header_change = Callback::new(move |check_all: bool| {
        state.update(|s| {
            if check_all {
                s.select_all_visible();
            } else {
                s.toggle_select_all_visible();
            }
        });
    });

    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%; min-width: 960px;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCheckbox state=header_state on_change=on_header_change />
                        {AssetColumn::ALL.into_iter().map(|column| view! {
                            <SortableHeader column=column />
                        }).collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || state.with(|s| s.paginated_revisions())
                        // A replaced record gets a new key and is rebuilt
                        key=|(revision, asset)| (asset.id.clone(), *revision)
                        children=move |(_, asset)| view! { <AssetRow asset=asset /> }
                    />
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
fn AssetRow(asset: Asset) -> impl IntoView {
    let state = use_asset_list_state();
    let id = asset.id.clone();
    let id_for_change = asset.id.clone();
    let last_verified = format_relative_short(asset.last_verified, now());

    // Re-rendered when the search term changes
    let highlighted = move |text: String| {
        move || state.with(|s| highlight_matches(&text, s.search_term()))
    };

    view! {
        <TableRow>
            <TableCellCheckbox
                checked=Signal::derive(move || state.with(|s| s.is_selected(&id)))
                on_change=Callback::new(move |checked| {
                    state.update(|s| s.set_selected(id_for_change.clone(), checked))
                })
            />
            <TableCell>
                <TableCellLayout truncate=true>
                    {highlighted(asset.name.clone())}
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <span class="table__mono">{highlighted(asset.id.to_string())}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{asset.asset_type.label()}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <AssetStatusBadge status=asset.status />
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    <span class="avatar">{asset.assigned_user.initials.clone()}</span>
                    {highlighted(asset.assigned_user.name.clone())}
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    {icon("map-pin")}
                    {highlighted(asset.location.clone())}
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{last_verified}</TableCellLayout>
            </TableCell>
        </TableRow>
    }
}
