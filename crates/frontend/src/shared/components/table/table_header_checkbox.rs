//! Header checkbox selecting every row on the page

use leptos::prelude::*;
use thaw::*;

/// Header checkbox state for the rows currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckboxState {
    /// `selected` of `total` visible rows are selected
    pub fn from_counts(selected: usize, total: usize) -> Self {
        if total == 0 || selected == 0 {
            CheckboxState::Unchecked
        } else if selected == total {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    }
}

/// Table header checkbox component
///
/// Shows unchecked, checked or indeterminate; a click reports the new
/// checked value to `on_change`.
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    state: Signal<CheckboxState>,

    /// Callback on change (true = select all, false = clear all)
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate is a DOM property only
    Effect::new(move |_| {
        let is_indeterminate = matches!(state.get(), CheckboxState::Indeterminate);
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(is_indeterminate);
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(state.get(), CheckboxState::Checked)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
