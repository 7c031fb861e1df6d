use crate::shared::icons::icon;
use contracts::shared::list::PageItem;
use leptos::prelude::*;

/// PaginationControls component - page buttons with a result range label.
///
/// Pages are 1-based.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    #[prop(into)]
    has_previous: Signal<bool>,

    #[prop(into)]
    has_next: Signal<bool>,

    /// Numbered buttons with gaps, e.g. 1 … 4 5 6 7 8 … 20
    #[prop(into)]
    page_items: Signal<Vec<PageItem>>,

    /// "Showing 11 to 20 of 25 results"
    #[prop(into)]
    range_label: Signal<String>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || range_label.get()}
                " • "
                {move || format!("Page {} of {}", current_page.get(), total_pages.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if has_previous.get() {
                        on_page_change.run(current_page.get() - 1);
                    }
                }
                disabled=move || !has_previous.get()
                title="Previous page"
            >
                {icon("chevron-left")}
                <span>"Previous"</span>
            </button>
            {move || page_items.get().into_iter().map(|item| match item {
                PageItem::Page(page) => view! {
                    <button
                        class="pagination-btn pagination-btn--page"
                        class:pagination-btn--active=move || current_page.get() == page
                        on:click=move |_| on_page_change.run(page)
                    >
                        {page.to_string()}
                    </button>
                }.into_any(),
                PageItem::Gap => view! { <span class="pagination-gap">"…"</span> }.into_any(),
            }).collect_view()}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if has_next.get() {
                        on_page_change.run(current_page.get() + 1);
                    }
                }
                disabled=move || !has_next.get()
                title="Next page"
            >
                <span>"Next"</span>
                {icon("chevron-right")}
            </button>
        </div>
    }
}
