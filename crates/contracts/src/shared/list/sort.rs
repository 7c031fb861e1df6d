use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn key(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Applies the direction to an ascending comparison result
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// One (column, direction) step of a sort plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriterion<C> {
    pub column: C,
    pub direction: SortDirection,
}

impl<C> SortCriterion<C> {
    pub fn new(column: C, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    pub fn asc(column: C) -> Self {
        Self::new(column, SortDirection::Asc)
    }

    pub fn desc(column: C) -> Self {
        Self::new(column, SortDirection::Desc)
    }
}

/// Types comparable column by column
pub trait Sortable<C> {
    /// Ascending comparison of two items by one column
    fn compare_by_column(&self, other: &Self, column: &C) -> Ordering;
}

/// Compares two items by walking the plan until a criterion breaks the tie
pub fn compare_by_plan<T: Sortable<C>, C>(a: &T, b: &T, plan: &[SortCriterion<C>]) -> Ordering {
    for criterion in plan {
        let ordering = criterion
            .direction
            .apply(a.compare_by_column(b, &criterion.column));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Sorts in place by a multi-column plan.
///
/// `sort_by` is stable, so items equal under every criterion keep their input order.
pub fn sort_by_plan<T: Sortable<C>, C>(items: &mut [T], plan: &[SortCriterion<C>]) {
    if plan.is_empty() {
        return;
    }
    items.sort_by(|a, b| compare_by_plan(a, b, plan));
}

/// Appends an ascending criterion for the first column not yet in the plan.
///
/// Returns false when every column is already used.
pub fn push_unused_column<C: Copy + PartialEq>(
    plan: &mut Vec<SortCriterion<C>>,
    columns: &[C],
) -> bool {
    let unused = columns
        .iter()
        .find(|column| !plan.iter().any(|c| c.column == **column));
    match unused {
        Some(column) => {
            plan.push(SortCriterion::asc(*column));
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Col {
        Group,
        Name,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        group: u8,
        name: &'static str,
        tag: usize,
    }

    impl Sortable<Col> for Row {
        fn compare_by_column(&self, other: &Self, column: &Col) -> Ordering {
            match column {
                Col::Group => self.group.cmp(&other.group),
                Col::Name => self.name.cmp(other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { group: 2, name: "b", tag: 0 },
            Row { group: 1, name: "c", tag: 1 },
            Row { group: 1, name: "a", tag: 2 },
            Row { group: 2, name: "a", tag: 3 },
        ]
    }

    #[test]
    fn test_tie_break_chain() {
        let mut items = rows();
        sort_by_plan(&mut items, &[SortCriterion::asc(Col::Group), SortCriterion::desc(Col::Name)]);
        let tags: Vec<usize> = items.iter().map(|r| r.tag).collect();
        assert_eq!(tags, vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_stable_for_equal_items() {
        let mut items = rows();
        sort_by_plan(&mut items, &[SortCriterion::asc(Col::Group)]);
        let tags: Vec<usize> = items.iter().map(|r| r.tag).collect();
        assert_eq!(tags, vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_empty_plan_keeps_order() {
        let mut items = rows();
        sort_by_plan::<Row, Col>(&mut items, &[]);
        assert_eq!(items, rows());
    }

    #[test]
    fn test_push_unused_column() {
        let mut plan = vec![SortCriterion::desc(Col::Group)];
        assert!(push_unused_column(&mut plan, &[Col::Group, Col::Name]));
        assert_eq!(plan[1], SortCriterion::asc(Col::Name));
        assert!(!push_unused_column(&mut plan, &[Col::Group, Col::Name]));
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_direction_keys() {
        assert_eq!(SortDirection::from_key("desc"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::from_key("up"), None);
        assert_eq!(SortDirection::Asc.toggled().key(), "desc");
    }
}
