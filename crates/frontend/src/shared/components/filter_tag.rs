use crate::shared::icons::icon;
use leptos::prelude::*;

/// Removable chip for one active filter value: "🏷️ Type: Hardware ×"
#[component]
pub fn FilterTag(
    /// Dimension name, shown before the value
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: String,
    /// Emoji marker of the dimension
    #[prop(optional, into)]
    marker: String,
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag" title={format!("{}: {}", label, value)}>
            {(!marker.is_empty()).then(|| view! { <span class="filter-tag__marker">{marker}</span> })}
            <span class="filter-tag__label">{format!("{}:", label)}</span>
            <span class="filter-tag__value">{value.clone()}</span>
            <button
                class="filter-tag__remove"
                title="Remove filter"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </button>
        </div>
    }
}
