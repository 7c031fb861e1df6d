use contracts::domain::a001_asset::AssetStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

fn status_variant(status: AssetStatus) -> &'static str {
    match status {
        AssetStatus::Active => "success",
        AssetStatus::NeedsAudit => "warning",
        AssetStatus::Maintenance => "primary",
        AssetStatus::Inactive => "neutral",
    }
}

/// Colored badge with the asset status label
#[component]
pub fn AssetStatusBadge(status: AssetStatus) -> impl IntoView {
    view! {
        <Badge variant=status_variant(status).to_string()>
            {status.label()}
        </Badge>
    }
}
