use super::state::use_asset_list_state;
use crate::shared::icons::icon;
use contracts::domain::a001_asset::filters::search_facets;
use contracts::domain::a001_asset::{FilterDimension, QUICK_FILTERS};
use leptos::prelude::*;
use thaw::*;

/// Dropdown with one section per filter dimension plus quick filters
#[component]
pub fn FilterMenu() -> impl IntoView {
    let state = use_asset_list_state();
    let (is_open, set_is_open) = signal(false);
    let expanded = RwSignal::new(None::<FilterDimension>);

    let active_count = Signal::derive(move || state.with(|s| s.filters().active_count()));
    let summary = Signal::derive(move || state.with(|s| s.filters().summary()));

    view! {
        <div class="menu">
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| set_is_open.update(|o| *o = !*o)
            >
                {icon("filter")}
                " Filters"
                {move || {
                    let count = active_count.get();
                    (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                }}
            </Button>

            <Show when=move || is_open.get()>
                <div class="menu__dropdown menu__dropdown--wide">
                    <div class="menu__header">
                        <span class="menu__title">"Filter Assets"</span>
                        <span class="menu__subtitle">{move || summary.get()}</span>
                    </div>

                    <div class="menu__section">
                        <span class="menu__label">"Quick Filters"</span>
                        <div class="quick-filters">
                            {QUICK_FILTERS.iter().map(|quick| {
                                let quick = *quick;
                                view! {
                                    <button
                                        class="quick-filter"
                                        class:quick-filter--active=move || state.with(|s| {
                                            s.filters().values(quick.dimension) == [quick.value.to_string()]
                                        })
                                        on:click=move |_| state.update(|s| s.apply_quick_filter(&quick))
                                    >
                                        {quick.label}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    </div>

                    {FilterDimension::ALL.into_iter().map(|dimension| view! {
                        <FilterSection dimension=dimension expanded=expanded />
                    }).collect_view()}

                    <div class="menu__footer">
                        <Button
                            appearance=ButtonAppearance::Subtle
                            disabled=Signal::derive(move || active_count.get() == 0)
                            on_click=move |_| state.update(|s| s.clear_filters())
                        >
                            "Clear All"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| set_is_open.set(false)
                        >
                            "Done"
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Collapsible list of one dimension's values with counts and a value search
#[component]
fn FilterSection(dimension: FilterDimension, expanded: RwSignal<Option<FilterDimension>>) -> impl IntoView {
    let state = use_asset_list_state();
    let value_search = RwSignal::new(String::new());

    let is_expanded = move || expanded.get() == Some(dimension);
    let selected_count = move || state.with(|s| s.filters().values(dimension).len());

    // Values matching the section search, with their counts over all assets
    let visible_facets = Signal::derive(move || {
        let facets = state.with(|s| s.facets(dimension));
        let term = value_search.get();
        search_facets(&facets, &term).into_iter().cloned().collect::<Vec<_>>()
    });

    let select_all = move |_| {
        let values: Vec<String> = visible_facets
            .get_untracked()
            .into_iter()
            .map(|f| f.value)
            .collect();
        state.update(|s| s.set_filter(dimension, values));
    };

    view! {
        <div class="filter-section">
            <div
                class="filter-section__header"
                on:click=move |_| expanded.update(|e| {
                    *e = if *e == Some(dimension) { None } else { Some(dimension) };
                })
            >
                <span>{dimension.icon()}" "{dimension.label()}</span>
                {move || {
                    let count = selected_count();
                    (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                }}
            </div>

            <Show when=is_expanded>
                <div class="filter-section__body">
                    <input
                        type="text"
                        class="filter-section__search"
                        placeholder={format!("Search {}...", dimension.label().to_lowercase())}
                        prop:value=move || value_search.get()
                        on:input=move |ev| value_search.set(event_target_value(&ev))
                    />
                    <div class="filter-section__actions">
                        <button class="link-button" on:click=select_all>"Select All"</button>
                        <button
                            class="link-button"
                            on:click=move |_| state.update(|s| s.clear_dimension(dimension))
                        >
                            "Clear"
                        </button>
                    </div>
                    <div class="filter-section__values">
                        {move || visible_facets.get().into_iter().map(|facet| {
                            let value = facet.value.clone();
                            let value_for_toggle = facet.value.clone();
                            view! {
                                <label class="filter-option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || state.with(|s| s.filters().contains(dimension, &value))
                                        on:change=move |_| state.update(|s| s.toggle_filter_value(dimension, &value_for_toggle))
                                    />
                                    <span class="filter-option__label">{facet.value}</span>
                                    <span class="filter-option__count">{facet.count}</span>
                                </label>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}
