use super::aggregate::{Asset, AssetId};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AssetError {
    #[error("Asset ID {0} already exists")]
    DuplicateId(AssetId),

    #[error("Invalid asset: {0}")]
    Validation(String),

    #[error("No free asset ID left for {0}")]
    IdsExhausted(i32),
}

/// Outcome of merging one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Added,
    Replaced,
}

/// Counts of a batch merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub added: usize,
    pub replaced: usize,
}

impl MergeSummary {
    pub fn accepted(&self) -> usize {
        self.added + self.replaced
    }
}

/// In-memory asset collection keyed by id.
///
/// Insertion order is kept; ids are unique at all times.
/// Every record carries a revision that grows each time it is replaced,
/// so views keyed by id can tell a changed record from an unchanged one.
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    assets: Vec<Asset>,
    revisions: Vec<u64>,
    index: HashMap<AssetId, usize>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a seed; a later record with a repeated id replaces the earlier one
    pub fn from_assets(assets: Vec<Asset>) -> Self {
        let mut store = Self::new();
        store.merge(assets);
        store
    }

    pub fn all(&self) -> &[Asset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn get(&self, id: &AssetId) -> Option<&Asset> {
        self.index.get(id).map(|&i| &self.assets[i])
    }

    pub fn contains(&self, id: &AssetId) -> bool {
        self.index.contains_key(id)
    }

    /// Times the record was replaced since it was added; 0 for unknown ids
    pub fn revision(&self, id: &AssetId) -> u64 {
        self.index.get(id).map_or(0, |&i| self.revisions[i])
    }

    fn push(&mut self, asset: Asset) {
        self.index.insert(asset.id.clone(), self.assets.len());
        self.assets.push(asset);
        self.revisions.push(0);
    }

    /// Append a new record; fails if the id is taken
    pub fn add(&mut self, asset: Asset) -> Result<(), AssetError> {
        if self.contains(&asset.id) {
            return Err(AssetError::DuplicateId(asset.id));
        }
        self.push(asset);
        Ok(())
    }

    /// Replace the record with the same id wholesale, or append it
    pub fn upsert(&mut self, asset: Asset) -> Upsert {
        match self.index.get(&asset.id) {
            Some(&i) => {
                self.assets[i] = asset;
                self.revisions[i] = self.revisions[i].wrapping_add(1);
                Upsert::Replaced
            }
            None => {
                self.push(asset);
                Upsert::Added
            }
        }
    }

    pub fn merge(&mut self, assets: Vec<Asset>) -> MergeSummary {
        let mut summary = MergeSummary::default();
        for asset in assets {
            match self.upsert(asset) {
                Upsert::Added => summary.added += 1,
                Upsert::Replaced => summary.replaced += 1,
            }
        }
        summary
    }

    /// Next free id of the form "AST-{year}-{NNNN}"
    ///
    /// Counts up from the highest number in use for the year. Once that
    /// number is `u32::MAX` the lowest free number is taken instead.
    pub fn next_id(&self, year: i32) -> Result<AssetId, AssetError> {
        let prefix = format!("AST-{}-", year);
        let highest = self
            .assets
            .iter()
            .filter_map(|a| a.id.as_str().strip_prefix(&prefix))
            .filter_map(|rest| rest.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        let start = highest.checked_add(1).unwrap_or(1);
        (start..=u32::MAX)
            .chain(1..start)
            .map(|n| AssetId::new(format!("{}{:04}", prefix, n)))
            .find(|candidate| !self.contains(candidate))
            .ok_or(AssetError::IdsExhausted(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_asset::test_support::asset;

    fn sample(id: &str, name: &str) -> Asset {
        asset(id, name, "Hardware", "Active", "Emma Wilson", "Remote", "2024-01-15")
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut store = AssetStore::new();
        store.add(sample("AST-001", "Laptop")).unwrap();
        let err = store.add(sample("AST-001", "Monitor")).unwrap_err();
        assert_eq!(err, AssetError::DuplicateId(AssetId::from("AST-001")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut store = AssetStore::from_assets(vec![sample("AST-001", "Laptop"), sample("AST-002", "Desk")]);
        assert_eq!(store.upsert(sample("AST-001", "Laptop v2")), Upsert::Replaced);
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].name, "Laptop v2");
        assert_eq!(store.upsert(sample("AST-003", "Chair")), Upsert::Added);
        assert_eq!(store.all()[2].id, AssetId::from("AST-003"));
    }

    #[test]
    fn test_merge_summary() {
        let mut store = AssetStore::from_assets(vec![sample("AST-001", "Laptop")]);
        let summary = store.merge(vec![sample("AST-001", "Laptop"), sample("AST-009", "Van")]);
        assert_eq!(summary, MergeSummary { added: 1, replaced: 1 });
        assert_eq!(summary.accepted(), 2);
        assert_eq!(store.get(&AssetId::from("AST-009")).map(|a| a.name.as_str()), Some("Van"));
    }

    #[test]
    fn test_next_id() {
        let mut store = AssetStore::new();
        assert_eq!(store.next_id(2024), Ok(AssetId::from("AST-2024-0001")));
        store.add(sample("AST-2024-0007", "Laptop")).unwrap();
        store.add(sample("AST-2023-0042", "Desk")).unwrap();
        assert_eq!(store.next_id(2024), Ok(AssetId::from("AST-2024-0008")));
        assert_eq!(store.next_id(2023), Ok(AssetId::from("AST-2023-0043")));
    }

    #[test]
    fn test_next_id_after_highest_number() {
        let mut store = AssetStore::from_assets(vec![sample("AST-2024-4294967295", "Imported")]);
        assert_eq!(store.next_id(2024), Ok(AssetId::from("AST-2024-0001")));
        store.add(sample("AST-2024-0001", "Laptop")).unwrap();
        store.add(sample("AST-2024-0002", "Desk")).unwrap();
        assert_eq!(store.next_id(2024), Ok(AssetId::from("AST-2024-0003")));
    }

    #[test]
    fn test_revision_grows_on_replace_only() {
        let mut store = AssetStore::from_assets(vec![sample("AST-001", "Laptop"), sample("AST-002", "Desk")]);
        let laptop = AssetId::from("AST-001");
        let desk = AssetId::from("AST-002");
        assert_eq!(store.revision(&laptop), 0);

        store.upsert(sample("AST-001", "Laptop v2"));
        assert_eq!(store.revision(&laptop), 1);
        assert_eq!(store.revision(&desk), 0);

        store.merge(vec![sample("AST-001", "Laptop v3"), sample("AST-003", "Chair")]);
        assert_eq!(store.revision(&laptop), 2);
        assert_eq!(store.revision(&AssetId::from("AST-003")), 0);
        assert_eq!(store.revision(&AssetId::from("AST-404")), 0);
    }
}
