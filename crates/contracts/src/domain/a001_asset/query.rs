use super::aggregate::Asset;
use super::columns::AssetColumn;
use super::filters::ActiveFilters;
use crate::shared::list::{filter_by_search, sort_by_plan, SortCriterion, SortDirection};

pub type AssetSortCriterion = SortCriterion<AssetColumn>;

/// Sort settings of the asset list.
///
/// A non-empty `plan` wins; otherwise the single (column, direction) pair applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column: AssetColumn,
    pub direction: SortDirection,
    pub plan: Vec<AssetSortCriterion>,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: AssetColumn::Name,
            direction: SortDirection::Asc,
            plan: Vec::new(),
        }
    }
}

impl SortState {
    pub fn new(column: AssetColumn, direction: SortDirection) -> Self {
        Self {
            column,
            direction,
            plan: Vec::new(),
        }
    }

    /// Criteria actually applied
    pub fn effective_plan(&self) -> Vec<AssetSortCriterion> {
        if self.plan.is_empty() {
            vec![SortCriterion::new(self.column, self.direction)]
        } else {
            self.plan.clone()
        }
    }

    /// Single-column sort from a header click or the sort menu.
    ///
    /// An explicit direction is taken as is. Without one, clicking the current
    /// column flips its direction and clicking another column sorts it ascending.
    /// Either way the multi-column plan is dropped.
    pub fn sort_by(&mut self, column: AssetColumn, direction: Option<SortDirection>) {
        match direction {
            Some(direction) => {
                self.column = column;
                self.direction = direction;
            }
            None if self.column == column => self.direction = self.direction.toggled(),
            None => {
                self.column = column;
                self.direction = SortDirection::Asc;
            }
        }
        self.plan.clear();
    }

    /// Store a multi-column plan; its first criterion becomes the primary sort
    pub fn set_plan(&mut self, plan: Vec<AssetSortCriterion>) {
        if let Some(first) = plan.first() {
            self.column = first.column;
            self.direction = first.direction;
        }
        self.plan = plan;
    }

    /// Direction shown in a header, if the column is the primary sort
    pub fn indicator(&self, column: AssetColumn) -> Option<SortDirection> {
        (self.column == column).then_some(self.direction)
    }

    /// "3 criteria" for multi-column plans, the column label otherwise
    pub fn label(&self) -> String {
        if self.plan.len() > 1 {
            format!("{} criteria", self.plan.len())
        } else {
            self.column.label().to_string()
        }
    }
}

/// Search, filter and sort inputs of the asset list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetQuery {
    pub search_term: String,
    pub filters: ActiveFilters,
    pub sort: SortState,
}

impl AssetQuery {
    /// Filtered and ordered view over the assets.
    ///
    /// Pure: the output depends only on the inputs, and the sort is stable.
    pub fn apply(&self, assets: &[Asset]) -> Vec<Asset> {
        let searched = filter_by_search(assets.to_vec(), &self.search_term);
        let mut result: Vec<Asset> = searched
            .into_iter()
            .filter(|asset| self.filters.matches(asset))
            .collect();
        sort_by_plan(&mut result, &self.sort.effective_plan());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_asset::columns::FilterDimension;
    use crate::domain::a001_asset::test_support::asset;

    fn assets() -> Vec<Asset> {
        vec![
            asset("AST-007", "Dell Laptop", "Hardware", "Active", "Sarah Johnson", "Tokyo Office", "2024-01-15"),
            asset("AST-002", "Adobe Suite", "Software", "Active", "Michael Chen", "Remote", "2024-01-10"),
            asset("AST-003", "Honda Civic", "Vehicle", "Needs Audit", "Alex Rodriguez", "San Francisco", "2023-11-20"),
            asset("AST-004", "Canon Printer", "Hardware", "Needs Audit", "Emma Wilson", "Remote", "2024-01-12"),
            asset("AST-005", "Zoom License", "Software", "Needs Audit", "Emma Wilson", "Remote", "2024-01-08"),
        ]
    }

    fn ids(view: &[Asset]) -> Vec<&str> {
        view.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_search_matches_any_field() {
        for term in ["dell", "AST-007", "ast-007"] {
            let query = AssetQuery {
                search_term: term.to_string(),
                ..Default::default()
            };
            assert_eq!(ids(&query.apply(&assets())), vec!["AST-007"], "term {term}");
        }
        let query = AssetQuery {
            search_term: "xyz".to_string(),
            ..Default::default()
        };
        assert!(query.apply(&assets()).is_empty());
    }

    #[test]
    fn test_filters_and_across_dimensions() {
        let mut query = AssetQuery::default();
        query.filters.set(FilterDimension::Type, vec!["Hardware", "Software"]);
        query.filters.set(FilterDimension::Status, vec!["Active"]);
        assert_eq!(ids(&query.apply(&assets())), vec!["AST-002", "AST-007"]);
    }

    #[test]
    fn test_search_and_filters_combine() {
        let mut query = AssetQuery {
            search_term: "remote".to_string(),
            ..Default::default()
        };
        query.filters.set(FilterDimension::Status, vec!["Needs Audit"]);
        assert_eq!(ids(&query.apply(&assets())), vec!["AST-004", "AST-005"]);
    }

    #[test]
    fn test_default_sort_is_name_ascending() {
        let view = AssetQuery::default().apply(&assets());
        assert_eq!(
            ids(&view),
            vec!["AST-002", "AST-004", "AST-007", "AST-003", "AST-005"]
        );
    }

    #[test]
    fn test_multi_sort_tie_break() {
        let mut query = AssetQuery::default();
        query.filters.set(FilterDimension::Status, vec!["Needs Audit"]);
        query.sort.set_plan(vec![
            SortCriterion::asc(AssetColumn::Status),
            SortCriterion::asc(AssetColumn::Name),
        ]);
        assert_eq!(ids(&query.apply(&assets())), vec!["AST-004", "AST-003", "AST-005"]);

        query.sort.set_plan(vec![
            SortCriterion::asc(AssetColumn::Status),
            SortCriterion::desc(AssetColumn::Name),
        ]);
        assert_eq!(ids(&query.apply(&assets())), vec!["AST-005", "AST-003", "AST-004"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut query = AssetQuery::default();
        query.sort.sort_by(AssetColumn::AssignedUser, Some(SortDirection::Asc));
        let view = query.apply(&assets());
        let emma: Vec<&str> = view
            .iter()
            .filter(|a| a.assigned_user.name == "Emma Wilson")
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(emma, vec!["AST-004", "AST-005"]);
    }

    #[test]
    fn test_sort_by_last_verified_desc() {
        let mut query = AssetQuery::default();
        query.sort.sort_by(AssetColumn::LastVerified, Some(SortDirection::Desc));
        assert_eq!(
            ids(&query.apply(&assets())),
            vec!["AST-007", "AST-004", "AST-002", "AST-005", "AST-003"]
        );
    }

    #[test]
    fn test_header_click_toggles() {
        let mut sort = SortState::default();
        sort.sort_by(AssetColumn::Name, None);
        assert_eq!(sort.direction, SortDirection::Desc);
        sort.sort_by(AssetColumn::Location, None);
        assert_eq!(sort.column, AssetColumn::Location);
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_single_sort_clears_plan() {
        let mut sort = SortState::default();
        sort.set_plan(vec![
            SortCriterion::desc(AssetColumn::Type),
            SortCriterion::asc(AssetColumn::Name),
        ]);
        assert_eq!(sort.column, AssetColumn::Type);
        assert_eq!(sort.direction, SortDirection::Desc);
        assert_eq!(sort.label(), "2 criteria");

        sort.sort_by(AssetColumn::Id, Some(SortDirection::Desc));
        assert!(sort.plan.is_empty());
        assert_eq!(sort.label(), "Asset ID");
        assert_eq!(sort.effective_plan(), vec![SortCriterion::desc(AssetColumn::Id)]);
    }

    #[test]
    fn test_empty_plan_keeps_single_column() {
        let mut sort = SortState::new(AssetColumn::Location, SortDirection::Desc);
        sort.set_plan(Vec::new());
        assert_eq!(sort.column, AssetColumn::Location);
        assert_eq!(sort.effective_plan(), vec![SortCriterion::desc(AssetColumn::Location)]);
    }
}
