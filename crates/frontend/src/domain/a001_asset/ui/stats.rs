use super::list::state::use_asset_list_state;
use crate::shared::components::stat_card::{StatCard, StatTone};
use contracts::domain::a001_asset::stats::GroupCount;
use contracts::domain::a001_asset::{AssetStats, AssetStatus};
use leptos::prelude::*;

/// Locations listed in the breakdown; the rest are summed up
const TOP_LOCATIONS: usize = 5;

/// Summary cards and breakdowns over the whole registry
#[component]
pub fn AssetStatsPanel() -> impl IntoView {
    let state = use_asset_list_state();
    let stats = Memo::new(move |_| state.with(|s| s.stats()));

    let count = move |f: fn(&AssetStats) -> usize| Signal::derive(move || stats.with(f));

    view! {
        <section class="stats-panel">
            <div class="stats-panel__cards">
                <StatCard
                    label="Total Assets"
                    icon_name="table"
                    value=count(|s| s.total)
                    subtitle=Signal::derive(move || {
                        Some(format!("{:.1}% assigned", stats.with(|s| s.assigned_share)))
                    })
                />
                <StatCard
                    label="Active"
                    icon_name="grid"
                    value=count(|s| s.status_count(AssetStatus::Active))
                    tone=StatTone::Good
                />
                <StatCard
                    label="Needs Audit"
                    icon_name="calendar"
                    value=count(|s| s.status_count(AssetStatus::NeedsAudit))
                    tone=Signal::derive(move || {
                        if stats.with(|s| s.status_count(AssetStatus::NeedsAudit)) > 0 {
                            StatTone::Warning
                        } else {
                            StatTone::Neutral
                        }
                    })
                />
                <StatCard
                    label="Audit Overdue"
                    icon_name="delete"
                    value=count(|s| s.audit_overdue)
                    tone=Signal::derive(move || {
                        if stats.with(|s| s.audit_overdue) > 0 { StatTone::Bad } else { StatTone::Good }
                    })
                    subtitle=Signal::derive(move || {
                        Some(format!("{} pending", stats.with(|s| s.audit_pending)))
                    })
                />
            </div>
            <div class="stats-panel__breakdowns">
                <Breakdown title="By Status" groups=Signal::derive(move || stats.with(|s| s.by_status.clone())) />
                <Breakdown title="By Type" groups=Signal::derive(move || stats.with(|s| s.by_type.clone())) />
                <Breakdown
                    title="By Location"
                    groups=Signal::derive(move || stats.with(|s| top_groups(&s.by_location, TOP_LOCATIONS)))
                />
            </div>
        </section>
    }
}

/// First `limit` groups plus an "Other" row holding the rest
fn top_groups(groups: &[GroupCount], limit: usize) -> Vec<GroupCount> {
    if groups.len() <= limit {
        return groups.to_vec();
    }
    let mut top = groups[..limit].to_vec();
    let rest = &groups[limit..];
    let max = top.first().map_or(0, |g| g.count);
    let count: usize = rest.iter().map(|g| g.count).sum();
    top.push(GroupCount {
        label: "Other".to_string(),
        count,
        share: rest.iter().map(|g| g.share).sum::<f64>(),
        bar: if max == 0 { 0.0 } else { (count as f64 / max as f64 * 100.0).min(100.0) },
    });
    top
}

#[component]
fn Breakdown(#[prop(into)] title: String, groups: Signal<Vec<GroupCount>>) -> impl IntoView {
    view! {
        <div class="breakdown">
            <h3 class="breakdown__title">{title}</h3>
            {move || groups.get().into_iter().map(|group| view! {
                <div class="breakdown__row">
                    <span class="breakdown__label">{group.label}</span>
                    <div class="breakdown__bar">
                        <div class="breakdown__fill" style={format!("width: {}%;", group.bar)}></div>
                    </div>
                    <span class="breakdown__count">{format!("{} ({:.1}%)", group.count, group.share)}</span>
                </div>
            }).collect_view()}
        </div>
    }
}
