//! Typed columns and filter dimensions of the asset list.
//!
//! Outside inputs name columns with string keys ("assignedUser", "lastVerified");
//! `from_key` is the only place those keys are interpreted.

use super::aggregate::Asset;
use crate::shared::list::{Searchable, Sortable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Projected value of a column, compared within one column only
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColumnValue<'a> {
    Text(&'a str),
    Timestamp(i64),
}

/// Sortable column of the asset list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetColumn {
    Name,
    Id,
    Type,
    Status,
    AssignedUser,
    Location,
    LastVerified,
}

impl AssetColumn {
    pub const ALL: [AssetColumn; 7] = [
        AssetColumn::Name,
        AssetColumn::Id,
        AssetColumn::Type,
        AssetColumn::Status,
        AssetColumn::AssignedUser,
        AssetColumn::Location,
        AssetColumn::LastVerified,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AssetColumn::Name => "name",
            AssetColumn::Id => "id",
            AssetColumn::Type => "type",
            AssetColumn::Status => "status",
            AssetColumn::AssignedUser => "assignedUser",
            AssetColumn::Location => "location",
            AssetColumn::LastVerified => "lastVerified",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetColumn::Name => "Asset Name",
            AssetColumn::Id => "Asset ID",
            AssetColumn::Type => "Type",
            AssetColumn::Status => "Status",
            AssetColumn::AssignedUser => "Assigned User",
            AssetColumn::Location => "Location",
            AssetColumn::LastVerified => "Last Verified",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Value the column sorts by: owner name for the owner, epoch millis for
    /// the verification date, the raw field otherwise
    pub fn project<'a>(&self, asset: &'a Asset) -> ColumnValue<'a> {
        match self {
            AssetColumn::Name => ColumnValue::Text(&asset.name),
            AssetColumn::Id => ColumnValue::Text(asset.id.as_str()),
            AssetColumn::Type => ColumnValue::Text(asset.asset_type.label()),
            AssetColumn::Status => ColumnValue::Text(asset.status.label()),
            AssetColumn::AssignedUser => ColumnValue::Text(&asset.assigned_user.name),
            AssetColumn::Location => ColumnValue::Text(&asset.location),
            AssetColumn::LastVerified => ColumnValue::Timestamp(asset.last_verified_millis()),
        }
    }
}

/// Categorical dimension of the filter menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterDimension {
    Type,
    Status,
    Location,
    AssignedUser,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 4] = [
        FilterDimension::Type,
        FilterDimension::Status,
        FilterDimension::Location,
        FilterDimension::AssignedUser,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FilterDimension::Type => "type",
            FilterDimension::Status => "status",
            FilterDimension::Location => "location",
            FilterDimension::AssignedUser => "assignedUser",
        }
    }

    /// Tab title in the filter menu
    pub fn label(&self) -> &'static str {
        match self {
            FilterDimension::Type => "Type",
            FilterDimension::Status => "Status",
            FilterDimension::Location => "Location",
            FilterDimension::AssignedUser => "Users",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FilterDimension::Type => "🔧",
            FilterDimension::Status => "🔍",
            FilterDimension::Location => "📍",
            FilterDimension::AssignedUser => "👤",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }

    /// Field value the dimension filters on
    pub fn value_of<'a>(&self, asset: &'a Asset) -> &'a str {
        match self {
            FilterDimension::Type => asset.asset_type.label(),
            FilterDimension::Status => asset.status.label(),
            FilterDimension::Location => &asset.location,
            FilterDimension::AssignedUser => &asset.assigned_user.name,
        }
    }
}

impl Sortable<AssetColumn> for Asset {
    fn compare_by_column(&self, other: &Self, column: &AssetColumn) -> Ordering {
        column.project(self).cmp(&column.project(other))
    }
}

impl Searchable for Asset {
    /// Name, id, type, location and owner name
    fn matches_search(&self, needle_lower: &str) -> bool {
        use crate::shared::list::contains_ignore_case as hit;
        hit(&self.name, needle_lower)
            || hit(self.id.as_str(), needle_lower)
            || hit(self.asset_type.label(), needle_lower)
            || hit(&self.location, needle_lower)
            || hit(&self.assigned_user.name, needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_asset::test_support::asset;

    #[test]
    fn test_column_keys_round_trip() {
        for column in AssetColumn::ALL {
            assert_eq!(AssetColumn::from_key(column.key()), Some(column));
        }
        assert_eq!(AssetColumn::from_key("category"), None);
    }

    #[test]
    fn test_dimension_keys_round_trip() {
        for dim in FilterDimension::ALL {
            assert_eq!(FilterDimension::from_key(dim.key()), Some(dim));
        }
        assert_eq!(FilterDimension::from_key("auditStatus"), None);
    }

    #[test]
    fn test_projection() {
        let a = asset("AST-001", "Dell Laptop", "Hardware", "Active", "Emma Wilson", "Remote", "2024-01-15");
        assert_eq!(AssetColumn::AssignedUser.project(&a), ColumnValue::Text("Emma Wilson"));
        assert_eq!(AssetColumn::Status.project(&a), ColumnValue::Text("Active"));
        assert_eq!(
            AssetColumn::LastVerified.project(&a),
            ColumnValue::Timestamp(1_705_276_800_000)
        );
        assert_eq!(FilterDimension::AssignedUser.value_of(&a), "Emma Wilson");
    }

    #[test]
    fn test_date_column_compares_numerically() {
        let older = asset("AST-002", "B", "Hardware", "Active", "X", "Remote", "2023-11-20");
        let newer = asset("AST-001", "A", "Hardware", "Active", "X", "Remote", "2024-01-15");
        assert_eq!(
            older.compare_by_column(&newer, &AssetColumn::LastVerified),
            Ordering::Less
        );
    }

    #[test]
    fn test_search_fields() {
        let a = asset("AST-007", "Dell Laptop", "Hardware", "Active", "Sarah Johnson", "Tokyo Office", "2024-01-15");
        assert!(a.matches_search("dell"));
        assert!(a.matches_search("ast-007"));
        assert!(a.matches_search("hardware"));
        assert!(a.matches_search("tokyo"));
        assert!(a.matches_search("johnson"));
        assert!(!a.matches_search("xyz"));
        assert!(!a.matches_search("active"));
    }
}
