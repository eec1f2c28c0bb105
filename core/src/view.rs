//! The dashboard view: one immutable roster, one piece of state.
//!
//! [`DashboardView`] owns the loaded records and the currently selected realm.
//! Every derived output is recomputed from scratch by [`DashboardView::snapshot`]
//! whenever the selection changes; nothing derived is cached or mutated in
//! place. Recomputation is O(records) and the roster is small, so there is no
//! incremental update path.

use armory_types::ClassSlice;

use crate::character::{CharacterRecord, CharacterRow};
use crate::realm::RealmFilter;
use crate::roster::{distinct_realms, sort_and_filter};
use crate::stats::{RealmStats, class_distribution_slices, realm_stats};

#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    records: Vec<CharacterRecord>,
    filter: RealmFilter,
}

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    /// Table rows: rank-sorted, realm-filtered, class ids resolved.
    pub rows: Vec<CharacterRow>,
    /// Class distribution over the filtered rows.
    pub class_distribution: Vec<ClassSlice>,
    /// Population and average-level statistics over the *whole* roster,
    /// independent of the filter.
    pub realm_stats: RealmStats,
    /// Raw realm names for the selector, first-seen order.
    pub realm_options: Vec<String>,
}

impl DashboardView {
    pub fn new(records: Vec<CharacterRecord>) -> Self {
        Self { records, filter: RealmFilter::All }
    }

    /// Apply a selector value (`"all"` or a raw realm name).
    pub fn select_realm(&mut self, selection: &str) {
        self.filter = RealmFilter::parse(selection);
    }

    pub fn filter(&self) -> &RealmFilter {
        &self.filter
    }

    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    /// Recompute every derived view for the current selection.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let filtered = sort_and_filter(&self.records, &self.filter);
        DashboardSnapshot {
            class_distribution: class_distribution_slices(&filtered),
            rows: filtered.iter().map(CharacterRow::from_record).collect(),
            realm_stats: realm_stats(&self.records),
            realm_options: distinct_realms(&self.records),
        }
    }
}
