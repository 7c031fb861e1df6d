use super::state::use_asset_list_state;
use crate::shared::icons::icon;
use contracts::domain::a001_asset::{AssetColumn, AssetSortCriterion};
use contracts::shared::list::sort::push_unused_column;
use contracts::shared::list::SortDirection;
use leptos::prelude::*;
use thaw::*;

/// Single-column sort shortcuts and a multi-column plan editor
#[component]
pub fn SortMenu() -> impl IntoView {
    let state = use_asset_list_state();
    let (is_open, set_is_open) = signal(false);
    let (show_multi, set_show_multi) = signal(false);

    // Plan being edited; applied only on "Apply"
    let draft = RwSignal::new(Vec::<AssetSortCriterion>::new());

    let open_menu = move |_| {
        let opening = !is_open.get_untracked();
        if opening {
            draft.set(state.with_untracked(|s| s.sort().plan.clone()));
        }
        set_is_open.set(opening);
    };

    let sort_single = move |column: AssetColumn, direction: SortDirection| {
        state.update(|s| s.sort_by(column, Some(direction)));
        set_is_open.set(false);
    };

    let apply_plan = move |_| {
        let plan = draft.get_untracked();
        state.update(|s| s.set_sort_plan(plan));
        set_is_open.set(false);
    };

    let button_label = Signal::derive(move || state.with(|s| s.sort().label()));

    view! {
        <div class="menu">
            <Button appearance=ButtonAppearance::Secondary on_click=open_menu>
                {icon("sort")}
                {move || format!(" Sort: {}", button_label.get())}
            </Button>

            <Show when=move || is_open.get()>
                <div class="menu__dropdown">
                    <div class="menu__tabs">
                        <button
                            class="menu__tab"
                            class:menu__tab--active=move || !show_multi.get()
                            on:click=move |_| set_show_multi.set(false)
                        >
                            "Single Sort"
                        </button>
                        <button
                            class="menu__tab"
                            class:menu__tab--active=move || show_multi.get()
                            on:click=move |_| set_show_multi.set(true)
                        >
                            "Multi Sort"
                        </button>
                    </div>

                    <Show
                        when=move || show_multi.get()
                        fallback=move || view! {
                            <div class="menu__section">
                                {AssetColumn::ALL.into_iter().map(|column| {
                                    let is_current = move |direction: SortDirection| state.with(|s| {
                                        s.sort().plan.len() <= 1
                                            && s.sort().indicator(column) == Some(direction)
                                    });
                                    view! {
                                        <div class="sort-option">
                                            <span class="sort-option__label">{column.label()}</span>
                                            <button
                                                class="sort-option__dir"
                                                class:sort-option__dir--active=move || is_current(SortDirection::Asc)
                                                on:click=move |_| sort_single(column, SortDirection::Asc)
                                            >
                                                "A→Z"
                                            </button>
                                            <button
                                                class="sort-option__dir"
                                                class:sort-option__dir--active=move || is_current(SortDirection::Desc)
                                                on:click=move |_| sort_single(column, SortDirection::Desc)
                                            >
                                                "Z→A"
                                            </button>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        }
                    >
                        <SortPlanEditor draft=draft />
                        <div class="menu__footer">
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| draft.set(Vec::new())
                            >
                                "Clear"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=apply_plan>
                                "Apply"
                            </Button>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

/// Editable rows of the draft plan: column, direction, remove
#[component]
fn SortPlanEditor(draft: RwSignal<Vec<AssetSortCriterion>>) -> impl IntoView {
    let add_criterion = move |_| {
        draft.update(|plan| {
            if !push_unused_column(plan, &AssetColumn::ALL) {
                log::debug!("Every column is already in the sort plan");
            }
        });
    };

    view! {
        <div class="menu__section">
            {move || {
                let plan = draft.get();
                if plan.is_empty() {
                    return view! {
                        <p class="menu__hint">"No sort criteria. Add one to sort by several columns."</p>
                    }.into_any();
                }
                plan.into_iter().enumerate().map(|(index, criterion)| view! {
                    <div class="sort-criterion">
                        <span class="sort-criterion__index">{index + 1}</span>
                        <select
                            class="sort-criterion__column"
                            on:change=move |ev| {
                                if let Some(column) = AssetColumn::from_key(&event_target_value(&ev)) {
                                    draft.update(|plan| {
                                        if let Some(c) = plan.get_mut(index) {
                                            c.column = column;
                                        }
                                    });
                                }
                            }
                        >
                            {AssetColumn::ALL.into_iter().map(|column| view! {
                                <option value={column.key()} selected={column == criterion.column}>
                                    {column.label()}
                                </option>
                            }).collect_view()}
                        </select>
                        <button
                            class="sort-criterion__direction"
                            on:click=move |_| draft.update(|plan| {
                                if let Some(c) = plan.get_mut(index) {
                                    c.direction = c.direction.toggled();
                                }
                            })
                        >
                            {match criterion.direction {
                                SortDirection::Asc => "A→Z",
                                SortDirection::Desc => "Z→A",
                            }}
                        </button>
                        <button
                            class="sort-criterion__remove"
                            title="Remove"
                            on:click=move |_| draft.update(|plan| {
                                if index < plan.len() {
                                    plan.remove(index);
                                }
                            })
                        >
                            {icon("x")}
                        </button>
                    </div>
                }).collect_view().into_any()
            }}
            <button
                class="link-button"
                disabled=move || draft.with(|plan| plan.len() >= AssetColumn::ALL.len())
                on:click=add_criterion
            >
                {icon("plus")}
                " Add sort criterion"
            </button>
        </div>
    }
}

