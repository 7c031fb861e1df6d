//! State of the asset registry list.
//!
//! `AssetListController` owns the store together with search, filters, sort,
//! selection and page state, and keeps the derived view in sync after every
//! change. The UI holds one instance and reads everything it renders from it.

use super::aggregate::{Asset, AssetId, NewAssetForm};
use super::columns::{AssetColumn, FilterDimension};
use super::exchange::import::dtos_from_rows;
use super::exchange::{
    parse_import, validate_asset_data, AssetDto, ExchangeFormat, ExportError, ExportSink,
    ImportError, ImportReport,
};
use super::filters::{facet_values, ActiveFilters, FacetValue, FilterChip, QuickFilter};
use super::query::{AssetQuery, AssetSortCriterion, SortState};
use super::stats::AssetStats;
use super::store::{AssetError, AssetStore, MergeSummary};
use crate::shared::config::{DashboardConfig, ListConfig};
use crate::shared::list::{PageItem, Paginator, SelectionTracker, SortDirection};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// View mode
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Table => "Table",
            ViewMode::Grid => "Grid",
        }
    }

    pub fn page_size(&self, config: &ListConfig) -> usize {
        match self {
            ViewMode::Table => config.table_page_size,
            ViewMode::Grid => config.grid_page_size,
        }
    }
}

// ============================================================================
// Bulk actions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Transfer,
    ScheduleAudit,
    Export,
    Delete,
}

impl BulkAction {
    pub const ALL: [BulkAction; 4] = [
        BulkAction::Transfer,
        BulkAction::ScheduleAudit,
        BulkAction::Export,
        BulkAction::Delete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BulkAction::Transfer => "Transfer",
            BulkAction::ScheduleAudit => "Schedule Audit",
            BulkAction::Export => "Export",
            BulkAction::Delete => "Delete",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, BulkAction::Delete)
    }
}

/// Result of one import attempt: validation report plus what the merge did
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub report: ImportReport,
    pub merge: MergeSummary,
}

impl ImportOutcome {
    pub fn accepted(&self) -> usize {
        self.merge.accepted()
    }

    pub fn rejected(&self) -> usize {
        self.report.errors.len()
    }

    /// Human readable result for the user, counted by what the merge did
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        if self.merge.accepted() > 0 {
            lines.push(format!(
                "Imported: {} added, {} replaced",
                self.merge.added, self.merge.replaced
            ));
        }
        if !self.report.errors.is_empty() {
            lines.push(format!(
                "Import completed with errors:\n{}",
                self.report.errors.join("\n")
            ));
        }
        if lines.is_empty() {
            lines.push("No assets found in file".to_string());
        }
        lines.join("\n")
    }
}

// ============================================================================
// Controller
// ============================================================================

#[derive(Debug, Clone)]
pub struct AssetListController {
    store: AssetStore,
    query: AssetQuery,
    selection: SelectionTracker<AssetId>,
    paginator: Paginator,
    view_mode: ViewMode,
    list_config: ListConfig,
    filtered: Vec<Asset>,
}

impl AssetListController {
    pub fn new(assets: Vec<Asset>, config: &DashboardConfig) -> Self {
        let list_config = config.list.clone();
        let sort = default_sort(&list_config);
        let view_mode = ViewMode::default();
        let mut controller = Self {
            store: AssetStore::from_assets(assets),
            query: AssetQuery {
                sort,
                ..Default::default()
            },
            selection: SelectionTracker::new(),
            paginator: Paginator::new(view_mode.page_size(&list_config)),
            view_mode,
            list_config,
            filtered: Vec::new(),
        };
        controller.refresh();
        controller
    }

    /// Recompute the filtered view and keep the page inside the valid range
    fn refresh(&mut self) {
        self.filtered = self.query.apply(self.store.all());
        let total = self.filtered.len();
        if self.paginator.clamp(total) {
            log::debug!(
                "Page clamped to {} ({} matching assets)",
                self.paginator.current_page(),
                total
            );
        }
    }

    /// Query inputs changed: back to the first page, then recompute
    fn requery(&mut self) {
        self.paginator.reset();
        self.refresh();
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    pub fn search_term(&self) -> &str {
        &self.query.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.query.search_term {
            return;
        }
        self.query.search_term = term;
        self.requery();
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    pub fn filters(&self) -> &ActiveFilters {
        &self.query.filters
    }

    /// Replace the accepted values of one dimension; an empty list clears it
    pub fn set_filter<V: Into<String>>(&mut self, dimension: FilterDimension, values: Vec<V>) {
        self.query.filters.set(dimension, values);
        log::debug!("Filters: {}", self.query.filters.summary());
        self.requery();
    }

    pub fn set_filters(&mut self, filters: ActiveFilters) {
        self.query.filters = filters;
        self.requery();
    }

    /// String-keyed filter map; unknown dimension keys are skipped
    pub fn set_filters_from_raw<I, K, V>(&mut self, raw: I)
    where
        I: IntoIterator<Item = (K, Vec<V>)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.set_filters(ActiveFilters::from_raw(raw));
    }

    pub fn toggle_filter_value(&mut self, dimension: FilterDimension, value: &str) {
        let values = self.query.filters.toggled(dimension, value);
        self.set_filter(dimension, values);
    }

    pub fn clear_dimension(&mut self, dimension: FilterDimension) {
        self.set_filter(dimension, Vec::<String>::new());
    }

    pub fn apply_quick_filter(&mut self, quick: &QuickFilter) {
        self.set_filter(quick.dimension, vec![quick.value]);
    }

    /// Drop the value a chip stands for
    pub fn remove_filter(&mut self, chip: &FilterChip) {
        let values = self.query.filters.without(chip.dimension, &chip.value);
        self.set_filter(chip.dimension, values);
    }

    pub fn clear_filters(&mut self) {
        self.set_filters(ActiveFilters::new());
    }

    pub fn filter_chips(&self) -> Vec<FilterChip> {
        self.query.filters.chips()
    }

    /// Values offered for a dimension, counted over the whole store
    pub fn facets(&self, dimension: FilterDimension) -> Vec<FacetValue> {
        facet_values(self.store.all(), dimension)
    }

    // ------------------------------------------------------------------
    // Sort
    // ------------------------------------------------------------------

    pub fn sort(&self) -> &SortState {
        &self.query.sort
    }

    pub fn sort_by(&mut self, column: AssetColumn, direction: Option<SortDirection>) {
        self.query.sort.sort_by(column, direction);
        self.requery();
    }

    pub fn set_sort_plan(&mut self, plan: Vec<AssetSortCriterion>) {
        self.query.sort.set_plan(plan);
        self.requery();
    }

    // ------------------------------------------------------------------
    // Pages and view mode
    // ------------------------------------------------------------------

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.paginator.page_size()
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.filtered.len())
    }

    pub fn set_current_page(&mut self, page: usize) {
        self.paginator.set_page(page, self.filtered.len());
    }

    pub fn has_previous_page(&self) -> bool {
        self.paginator.has_previous()
    }

    pub fn has_next_page(&self) -> bool {
        self.paginator.has_next(self.filtered.len())
    }

    pub fn page_items(&self, max_visible: usize) -> Vec<PageItem> {
        self.paginator.page_items(self.filtered.len(), max_visible)
    }

    pub fn range_label(&self) -> String {
        self.paginator.range_label(self.filtered.len())
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.paginator
            .set_page_size(mode.page_size(&self.list_config), self.filtered.len());
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn selection(&self) -> &SelectionTracker<AssetId> {
        &self.selection
    }

    pub fn is_selected(&self, id: &AssetId) -> bool {
        self.selection.is_selected(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn toggle_selection(&mut self, id: AssetId) {
        self.selection.toggle(id);
    }

    pub fn set_selected(&mut self, id: AssetId, checked: bool) {
        self.selection.set(id, checked);
    }

    /// Select exactly the rows of the current page
    pub fn select_all_visible(&mut self) {
        let ids: Vec<AssetId> = self.paginated_assets().iter().map(|a| a.id.clone()).collect();
        self.selection.select_all(ids);
    }

    pub fn all_visible_selected(&self) -> bool {
        self.selection
            .contains_all(self.paginated_assets().iter().map(|a| &a.id))
    }

    /// Header checkbox: clears when the whole page is selected, else selects the page
    pub fn toggle_select_all_visible(&mut self) {
        if self.all_visible_selected() {
            self.selection.clear();
        } else {
            self.select_all_visible();
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ------------------------------------------------------------------
    // Derived view
    // ------------------------------------------------------------------

    pub fn store(&self) -> &AssetStore {
        &self.store
    }

    pub fn query(&self) -> &AssetQuery {
        &self.query
    }

    pub fn filtered_assets(&self) -> &[Asset] {
        &self.filtered
    }

    pub fn paginated_assets(&self) -> &[Asset] {
        self.paginator.slice(&self.filtered)
    }

    /// Current page with each record's store revision; `(id, revision)`
    /// changes whenever an import replaces the record
    pub fn paginated_revisions(&self) -> Vec<(u64, Asset)> {
        self.paginated_assets()
            .iter()
            .map(|a| (self.store.revision(&a.id), a.clone()))
            .collect()
    }

    pub fn stats(&self) -> AssetStats {
        AssetStats::compute(self.store.all())
    }

    // ------------------------------------------------------------------
    // Adding and importing
    // ------------------------------------------------------------------

    /// Add one asset from the manual form; the id is generated
    pub fn add_asset(&mut self, form: NewAssetForm, today: NaiveDate) -> Result<Asset, AssetError> {
        form.validate().map_err(AssetError::Validation)?;
        let id = self.store.next_id(today.year())?;
        let asset = form.into_asset(id);
        self.store.add(asset.clone())?;
        log::info!("Added asset {}", asset.id);
        self.refresh();
        Ok(asset)
    }

    /// Merge records into the store; a known id replaces the stored record
    pub fn add_assets(&mut self, assets: Vec<Asset>) -> MergeSummary {
        let summary = self.store.merge(assets);
        self.refresh();
        summary
    }

    /// Import file content read as text (CSV, JSON or delimited Excel export)
    pub fn import_text(
        &mut self,
        format: ExchangeFormat,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<ImportOutcome, ImportError> {
        let dtos = parse_import(format, content)?;
        Ok(self.import_dtos(dtos, now))
    }

    /// Import spreadsheet rows (first row holds the column titles)
    pub fn import_rows(
        &mut self,
        rows: Vec<Vec<String>>,
        now: DateTime<Utc>,
    ) -> Result<ImportOutcome, ImportError> {
        let dtos = dtos_from_rows(rows)?;
        Ok(self.import_dtos(dtos, now))
    }

    pub fn import_dtos(&mut self, dtos: Vec<AssetDto>, now: DateTime<Utc>) -> ImportOutcome {
        let report = validate_asset_data(dtos, now);
        let merge = self.add_assets(report.valid.clone());
        log::info!(
            "Import: {} added, {} replaced, {} rejected",
            merge.added,
            merge.replaced,
            report.errors.len()
        );
        for error in &report.errors {
            log::warn!("{}", error);
        }
        ImportOutcome { report, merge }
    }

    // ------------------------------------------------------------------
    // Export and bulk actions
    // ------------------------------------------------------------------

    /// Filtered view, narrowed to the selection when anything is selected
    pub fn export_scope(&self) -> Vec<Asset> {
        if self.selection.is_empty() {
            return self.filtered.clone();
        }
        self.filtered
            .iter()
            .filter(|a| self.selection.is_selected(&a.id))
            .cloned()
            .collect()
    }

    /// Hand the export scope to the sink; returns the number of records
    pub fn export(
        &self,
        format: ExchangeFormat,
        today: NaiveDate,
        sink: &mut dyn ExportSink,
    ) -> Result<usize, ExportError> {
        let scope = self.export_scope();
        if scope.is_empty() {
            return Err(ExportError::NothingToExport);
        }
        log::info!(
            "Exporting {} assets as {} (selection: {})",
            scope.len(),
            format.label(),
            self.selection.len()
        );
        sink.deliver(format, &scope, today)?;
        Ok(scope.len())
    }

    /// Run a bulk action over the selection and describe the result.
    ///
    /// Only Export has an effect; the other actions are announced.
    pub fn run_bulk_action(
        &self,
        action: BulkAction,
        format: ExchangeFormat,
        today: NaiveDate,
        sink: &mut dyn ExportSink,
    ) -> Result<String, ExportError> {
        let count = self.selection.len();
        match action {
            BulkAction::Export => {
                let exported = self.export(format, today, sink)?;
                Ok(format!("Exported {} assets", exported))
            }
            BulkAction::Delete => {
                log::warn!("Bulk delete requested for {} assets, not available", count);
                Ok("Delete is not available yet".to_string())
            }
            BulkAction::Transfer | BulkAction::ScheduleAudit => {
                log::info!("Bulk {} requested for {} assets", action.label(), count);
                Ok(format!("{} requested for {} assets", action.label(), count))
            }
        }
    }
}

impl Default for AssetListController {
    fn default() -> Self {
        Self::new(Vec::new(), &DashboardConfig::default())
    }
}

/// Sort configured for a fresh list; unknown keys fall back to name ascending
fn default_sort(config: &ListConfig) -> SortState {
    let column = AssetColumn::from_key(&config.default_sort_column).unwrap_or_else(|| {
        log::warn!(
            "Unknown default sort column '{}', using name",
            config.default_sort_column
        );
        AssetColumn::Name
    });
    let direction = SortDirection::from_key(&config.default_sort_direction).unwrap_or_else(|| {
        log::warn!(
            "Unknown default sort direction '{}', using asc",
            config.default_sort_direction
        );
        SortDirection::Asc
    });
    SortState::new(column, direction)
}
