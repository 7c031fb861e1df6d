use super::aggregate::Asset;
use super::columns::FilterDimension;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Accepted values per filter dimension.
///
/// Dimensions are ANDed, values within a dimension are ORed. A dimension
/// with no values is not stored and does not constrain anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilters {
    by_dimension: BTreeMap<FilterDimension, Vec<String>>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from string-keyed input; keys that name no dimension are skipped
    pub fn from_raw<I, K, V>(raw: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<V>)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filters = Self::new();
        for (key, values) in raw {
            match FilterDimension::from_key(key.as_ref()) {
                Some(dimension) => filters.set(dimension, values),
                None => log::warn!("Ignoring unknown filter dimension '{}'", key.as_ref()),
            }
        }
        filters
    }

    /// Replace the values of one dimension (duplicates dropped, order kept)
    pub fn set<V: Into<String>>(&mut self, dimension: FilterDimension, values: Vec<V>) {
        let mut unique: Vec<String> = Vec::with_capacity(values.len());
        for value in values.into_iter().map(Into::into) {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        if unique.is_empty() {
            self.by_dimension.remove(&dimension);
        } else {
            self.by_dimension.insert(dimension, unique);
        }
    }

    pub fn values(&self, dimension: FilterDimension) -> &[String] {
        self.by_dimension
            .get(&dimension)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, dimension: FilterDimension, value: &str) -> bool {
        self.values(dimension).iter().any(|v| v == value)
    }

    /// Values of a dimension with one value added or removed
    pub fn toggled(&self, dimension: FilterDimension, value: &str) -> Vec<String> {
        let mut values = self.values(dimension).to_vec();
        match values.iter().position(|v| v == value) {
            Some(i) => {
                values.remove(i);
            }
            None => values.push(value.to_string()),
        }
        values
    }

    /// Values of a dimension with one value removed
    pub fn without(&self, dimension: FilterDimension, value: &str) -> Vec<String> {
        self.values(dimension)
            .iter()
            .filter(|v| v.as_str() != value)
            .cloned()
            .collect()
    }

    pub fn clear(&mut self) {
        self.by_dimension.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.by_dimension.is_empty()
    }

    /// Total number of accepted values across dimensions
    pub fn active_count(&self) -> usize {
        self.by_dimension.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterDimension, &[String])> {
        self.by_dimension.iter().map(|(d, v)| (*d, v.as_slice()))
    }

    pub fn matches(&self, asset: &Asset) -> bool {
        self.by_dimension.iter().all(|(dimension, values)| {
            let field = dimension.value_of(asset);
            values.iter().any(|v| v == field)
        })
    }

    /// One chip per (dimension, value), dimension then value order
    pub fn chips(&self) -> Vec<FilterChip> {
        self.iter()
            .flat_map(|(dimension, values)| {
                values.iter().map(move |value| FilterChip::new(dimension, value))
            })
            .collect()
    }

    /// "No filters applied" or e.g. "3 filters (type: 2, status: 1)"
    pub fn summary(&self) -> String {
        let count = self.active_count();
        if count == 0 {
            return "No filters applied".to_string();
        }
        let parts: Vec<String> = self
            .iter()
            .map(|(dimension, values)| format!("{}: {}", dimension.key(), values.len()))
            .collect();
        format!("{} filters ({})", count, parts.join(", "))
    }
}

/// Display form of one active (dimension, value) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChip {
    /// Stable "{dimension}:{value}" key
    pub id: String,
    pub dimension: FilterDimension,
    pub label: String,
    pub value: String,
    pub icon: String,
}

impl FilterChip {
    pub fn new(dimension: FilterDimension, value: &str) -> Self {
        Self {
            id: format!("{}:{}", dimension.key(), value),
            dimension,
            label: dimension.label().to_string(),
            value: value.to_string(),
            icon: dimension.icon().to_string(),
        }
    }
}

/// One selectable value of a dimension with its number of assets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetValue {
    pub value: String,
    pub count: usize,
}

/// Distinct values of a dimension across the assets, sorted, with counts
pub fn facet_values(assets: &[Asset], dimension: FilterDimension) -> Vec<FacetValue> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for asset in assets {
        *counts.entry(dimension.value_of(asset)).or_default() += 1;
    }
    let mut facets: Vec<FacetValue> = counts
        .into_iter()
        .map(|(value, count)| FacetValue {
            value: value.to_string(),
            count,
        })
        .collect();
    facets.sort_by(|a, b| a.value.cmp(&b.value));
    facets
}

/// Facet values containing the search term (case-insensitive)
pub fn search_facets<'a>(facets: &'a [FacetValue], term: &str) -> Vec<&'a FacetValue> {
    let needle = term.to_lowercase();
    facets
        .iter()
        .filter(|f| f.value.to_lowercase().contains(&needle))
        .collect()
}

/// One-click filter replacing a whole dimension with a single value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickFilter {
    pub label: &'static str,
    pub dimension: FilterDimension,
    pub value: &'static str,
}

pub const QUICK_FILTERS: [QuickFilter; 4] = [
    QuickFilter {
        label: "🟢 Active Only",
        dimension: FilterDimension::Status,
        value: "Active",
    },
    QuickFilter {
        label: "🔴 Needs Audit",
        dimension: FilterDimension::Status,
        value: "Needs Audit",
    },
    QuickFilter {
        label: "🔧 Hardware",
        dimension: FilterDimension::Type,
        value: "Hardware",
    },
    QuickFilter {
        label: "💻 Software",
        dimension: FilterDimension::Type,
        value: "Software",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_asset::test_support::asset;

    fn assets() -> Vec<Asset> {
        vec![
            asset("AST-001", "MacBook", "Hardware", "Active", "Sarah Johnson", "Tokyo Office", "2024-01-15"),
            asset("AST-002", "Adobe CC", "Software", "Active", "Michael Chen", "Remote", "2024-01-10"),
            asset("AST-003", "Civic", "Vehicle", "Needs Audit", "Alex Rodriguez", "San Francisco", "2023-11-20"),
            asset("AST-004", "Monitor", "Hardware", "Needs Audit", "Emma Wilson", "Tokyo Office", "2024-01-12"),
        ]
    }

    #[test]
    fn test_dimensions_and_values_or() {
        let mut f = ActiveFilters::new();
        f.set(FilterDimension::Type, vec!["Hardware", "Software"]);
        f.set(FilterDimension::Status, vec!["Active"]);
        let all = assets();
        let ids: Vec<&str> = all
            .iter()
            .filter(|a| f.matches(a))
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["AST-001", "AST-002"]);
    }

    #[test]
    fn test_owner_dimension_uses_name() {
        let mut f = ActiveFilters::new();
        f.set(FilterDimension::AssignedUser, vec!["Emma Wilson"]);
        let matched: Vec<Asset> = assets().into_iter().filter(|a| f.matches(a)).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id.as_str(), "AST-004");
    }

    #[test]
    fn test_empty_values_remove_dimension() {
        let mut f = ActiveFilters::new();
        f.set(FilterDimension::Location, vec!["Remote"]);
        f.set::<String>(FilterDimension::Location, vec![]);
        assert!(f.is_empty());
        assert!(assets().iter().all(|a| f.matches(a)));
    }

    #[test]
    fn test_unknown_raw_keys_are_ignored() {
        let f = ActiveFilters::from_raw(vec![
            ("status", vec!["Active"]),
            ("category", vec!["Hardware"]),
        ]);
        assert_eq!(f.active_count(), 1);
        assert_eq!(f.values(FilterDimension::Status), &["Active".to_string()]);
    }

    #[test]
    fn test_chips_are_stable() {
        let mut f = ActiveFilters::new();
        f.set(FilterDimension::Status, vec!["Active", "Inactive"]);
        f.set(FilterDimension::Type, vec!["Hardware", "Software", "Vehicle"]);
        let ids: Vec<String> = f.chips().into_iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "type:Hardware",
                "type:Software",
                "type:Vehicle",
                "status:Active",
                "status:Inactive"
            ]
        );

        let vehicle_before = f.chips().into_iter().find(|c| c.value == "Vehicle").unwrap();
        let values = f.without(FilterDimension::Type, "Software");
        f.set(FilterDimension::Type, values);
        let vehicle_after = f.chips().into_iter().find(|c| c.value == "Vehicle").unwrap();
        assert_eq!(vehicle_before, vehicle_after);
    }

    #[test]
    fn test_toggle_and_duplicates() {
        let mut f = ActiveFilters::new();
        f.set(FilterDimension::Type, vec!["Hardware", "Hardware"]);
        assert_eq!(f.values(FilterDimension::Type).len(), 1);
        assert_eq!(f.toggled(FilterDimension::Type, "Hardware"), Vec::<String>::new());
        assert_eq!(
            f.toggled(FilterDimension::Type, "Vehicle"),
            vec!["Hardware".to_string(), "Vehicle".to_string()]
        );
    }

    #[test]
    fn test_summary() {
        let mut f = ActiveFilters::new();
        assert_eq!(f.summary(), "No filters applied");
        f.set(FilterDimension::Type, vec!["Hardware", "Software"]);
        f.set(FilterDimension::Status, vec!["Active"]);
        assert_eq!(f.summary(), "3 filters (type: 2, status: 1)");
    }

    #[test]
    fn test_facets() {
        let facets = facet_values(&assets(), FilterDimension::Location);
        assert_eq!(
            facets,
            vec![
                FacetValue { value: "Remote".into(), count: 1 },
                FacetValue { value: "San Francisco".into(), count: 1 },
                FacetValue { value: "Tokyo Office".into(), count: 2 },
            ]
        );
        let found = search_facets(&facets, "OFF");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value, "Tokyo Office");
    }
}
