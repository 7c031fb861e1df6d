use super::aggregate::{Asset, AssetStatus, AssetType, AuditStatus};
use serde::Serialize;
use std::collections::HashMap;

/// Count of one group with its share of the total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupCount {
    pub label: String,
    pub count: usize,
    /// Percent of all assets, one decimal
    pub share: f64,
    /// Percent of the largest group, for bar widths
    pub bar: f64,
}

/// Summary figures for the dashboard and reports pages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetStats {
    pub total: usize,
    pub by_status: Vec<GroupCount>,
    pub by_type: Vec<GroupCount>,
    /// Descending by count, ties by location name
    pub by_location: Vec<GroupCount>,
    pub audit_overdue: usize,
    pub audit_pending: usize,
    /// Percent of assets with an owner, one decimal
    pub assigned_share: f64,
}

impl AssetStats {
    pub fn compute(assets: &[Asset]) -> Self {
        let total = assets.len();

        let by_status = groups(
            total,
            AssetStatus::ALL
                .iter()
                .map(|s| (s.label(), assets.iter().filter(|a| a.status == *s).count())),
        );
        let by_type = groups(
            total,
            AssetType::ALL
                .iter()
                .map(|t| (t.label(), assets.iter().filter(|a| a.asset_type == *t).count())),
        );

        let mut locations: HashMap<&str, usize> = HashMap::new();
        for asset in assets {
            *locations.entry(asset.location.as_str()).or_default() += 1;
        }
        let mut locations: Vec<(&str, usize)> = locations.into_iter().collect();
        locations.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        let by_location = groups(total, locations.into_iter());

        let audit_overdue = assets
            .iter()
            .filter(|a| a.audit_status == AuditStatus::Overdue)
            .count();
        let audit_pending = assets
            .iter()
            .filter(|a| a.audit_status == AuditStatus::Pending)
            .count();
        let assigned = assets
            .iter()
            .filter(|a| !a.assigned_user.name.trim().is_empty())
            .count();

        Self {
            total,
            by_status,
            by_type,
            by_location,
            audit_overdue,
            audit_pending,
            assigned_share: percent(assigned, total),
        }
    }

    pub fn status_count(&self, status: AssetStatus) -> usize {
        self.by_status
            .iter()
            .find(|g| g.label == status.label())
            .map_or(0, |g| g.count)
    }
}

fn groups<'a>(total: usize, counts: impl Iterator<Item = (&'a str, usize)>) -> Vec<GroupCount> {
    let counts: Vec<(&str, usize)> = counts.collect();
    let max = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    counts
        .into_iter()
        .map(|(label, count)| GroupCount {
            label: label.to_string(),
            count,
            share: percent(count, total),
            bar: percent(count, max),
        })
        .collect()
}

/// Percentage rounded to one decimal; 0 when the base is empty
fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 * 1000.0 / whole as f64).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_asset::test_support::asset;

    fn assets() -> Vec<Asset> {
        let mut overdue = asset("AST-004", "Canon Printer", "Hardware", "Needs Audit", "Emma Wilson", "Remote", "2024-01-12");
        overdue.audit_status = AuditStatus::Overdue;
        vec![
            asset("AST-001", "MacBook Pro", "Hardware", "Active", "Sarah Johnson", "Tokyo Office", "2024-01-15"),
            asset("AST-002", "Adobe Suite", "Software", "Active", "Michael Chen", "Remote", "2024-01-10"),
            asset("AST-003", "Honda Civic", "Vehicle", "Maintenance", "", "San Francisco", "2023-11-20"),
            overdue,
        ]
    }

    #[test]
    fn test_counts_and_shares() {
        let stats = AssetStats::compute(&assets());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.status_count(AssetStatus::Active), 2);
        assert_eq!(stats.status_count(AssetStatus::Inactive), 0);

        let hardware = &stats.by_type[0];
        assert_eq!(hardware.label, "Hardware");
        assert_eq!(hardware.count, 2);
        assert_eq!(hardware.share, 50.0);
        assert_eq!(hardware.bar, 100.0);
        assert_eq!(stats.by_type[1].bar, 50.0);

        assert_eq!(stats.audit_overdue, 1);
        assert_eq!(stats.audit_pending, 0);
        assert_eq!(stats.assigned_share, 75.0);
    }

    #[test]
    fn test_locations_descending() {
        let stats = AssetStats::compute(&assets());
        let labels: Vec<&str> = stats.by_location.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Remote", "San Francisco", "Tokyo Office"]);
        assert_eq!(stats.by_location[0].share, 50.0);
    }

    #[test]
    fn test_empty() {
        let stats = AssetStats::compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.assigned_share, 0.0);
        assert!(stats.by_location.is_empty());
        assert!(stats.by_type.iter().all(|g| g.share == 0.0 && g.bar == 0.0));
    }
}
