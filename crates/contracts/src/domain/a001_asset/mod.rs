pub mod aggregate;
pub mod columns;
pub mod exchange;
pub mod filters;
pub mod query;
pub mod stats;
pub mod store;
pub mod view_controller;

pub use aggregate::{
    Asset, AssetId, AssetStatus, AssetType, AssignedUser, AuditStatus, NewAssetForm,
};
pub use columns::{AssetColumn, FilterDimension};
pub use filters::{ActiveFilters, FacetValue, FilterChip, QuickFilter, QUICK_FILTERS};
pub use query::{AssetQuery, AssetSortCriterion, SortState};
pub use stats::AssetStats;
pub use store::{AssetError, AssetStore, MergeSummary};
pub use view_controller::{AssetListController, BulkAction, ImportOutcome, ViewMode};
