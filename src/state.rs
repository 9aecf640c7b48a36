use std::collections::BTreeMap;

use crate::data::columns::default_visibility;
use crate::data::filter::{
    column_filters, filtered_indices, ActiveFilterState, ColumnFilterConfig, FilterState,
};
use crate::data::model::{CanonicalRecord, Field};

// ---------------------------------------------------------------------------
// Claims table state
// ---------------------------------------------------------------------------

/// The full table state, independent of rendering.
pub struct ClaimsState {
    /// Loaded claims, in export order.
    records: Vec<CanonicalRecord>,

    /// Filter catalog the dropdowns are built from.
    pub configs: Vec<ColumnFilterConfig>,

    /// Per-column filter selections.
    pub filters: FilterState,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Which columns are currently shown.
    pub column_visibility: BTreeMap<Field, bool>,
}

impl Default for ClaimsState {
    fn default() -> Self {
        let configs = column_filters();
        let filters = initial_filters(&configs);
        Self {
            records: Vec::new(),
            configs,
            filters,
            visible_indices: Vec::new(),
            column_visibility: default_visibility(),
        }
    }
}

/// One inert filter per configured column, carrying its defaults.
pub fn initial_filters(configs: &[ColumnFilterConfig]) -> FilterState {
    configs
        .iter()
        .map(|c| (c.field, c.initial_state()))
        .collect()
}

impl ClaimsState {
    /// Ingest newly loaded records; filter selections are kept.
    pub fn set_records(&mut self, records: Vec<CanonicalRecord>) {
        self.records = records;
        self.refilter();
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.records, &self.filters);
    }

    pub fn records(&self) -> &[CanonicalRecord] {
        &self.records
    }

    /// Stale indices (e.g. edited by hand without a refilter) are skipped.
    pub fn visible_records(&self) -> impl Iterator<Item = &CanonicalRecord> {
        self.visible_indices
            .iter()
            .filter_map(|&i| self.records.get(i))
    }

    fn config(&self, field: Field) -> Option<&ColumnFilterConfig> {
        self.configs.iter().find(|c| c.field == field)
    }

    /// Filter state of a configured column, created on first use.
    fn filter_mut(&mut self, field: Field) -> Option<&mut ActiveFilterState> {
        let initial = self.config(field)?.initial_state();
        Some(self.filters.entry(field).or_insert(initial))
    }

    /// Toggle a single value in a column's selection. Values outside the
    /// column's options and unconfigured columns are ignored.
    pub fn toggle_filter_value(&mut self, field: Field, value: &str) {
        let known = self
            .config(field)
            .is_some_and(|c| c.options.iter().any(|o| o.value == value));
        if !known {
            log::warn!("Ignoring unknown filter value {value:?} for {field}");
            return;
        }
        if let Some(filter) = self.filter_mut(field) {
            if !filter.selected.remove(value) {
                filter.selected.insert(value.to_string());
            }
        }
        self.refilter();
    }

    /// Flip equals / not-equals, if the column allows it.
    pub fn toggle_polarity(&mut self, field: Field) {
        if !self.config(field).is_some_and(|c| c.capabilities.polarity_toggle) {
            return;
        }
        if let Some(filter) = self.filter_mut(field) {
            filter.polarity = filter.polarity.toggled();
        }
        self.refilter();
    }

    /// Flip AND / OR, if the column allows it.
    pub fn toggle_mode(&mut self, field: Field) {
        if !self.config(field).is_some_and(|c| c.capabilities.mode_toggle) {
            return;
        }
        if let Some(filter) = self.filter_mut(field) {
            filter.mode = filter.mode.toggled();
        }
        self.refilter();
    }

    /// Deselect all values in a column.
    pub fn select_none(&mut self, field: Field) {
        if let Some(filter) = self.filter_mut(field) {
            filter.selected.clear();
        }
        self.refilter();
    }

    /// Reset every column to its configured defaults.
    pub fn reset_filters(&mut self) {
        self.filters = initial_filters(&self.configs);
        self.refilter();
    }

    /// Replace the filters with a snapshot, e.g. one restored by the UI.
    pub fn apply_snapshot(&mut self, filters: FilterState) {
        self.filters = filters;
        self.refilter();
    }

    pub fn toggle_column(&mut self, field: Field) {
        let shown = self.column_visibility.entry(field).or_insert(false);
        *shown = !*shown;
    }

    /// Shown columns, in display order.
    pub fn shown_columns(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.column_visibility.get(f).copied().unwrap_or(false))
            .collect()
    }
}
