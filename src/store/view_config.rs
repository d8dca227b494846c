use crate::config::{FilterConfig, MoveTypeFilter, SortConfig, SortOption};
use crate::pipeline::toggle_sort;

/// The sort and filter the user has picked for the results table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewConfigStore {
    sort: SortConfig,
    filter: FilterConfig,
}

impl ViewConfigStore {
    pub fn new(sort: SortConfig, filter: FilterConfig) -> Self {
        Self { sort, filter }
    }

    pub fn sort(&self) -> &SortConfig {
        &self.sort
    }

    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    /// Header-click semantics: same column flips, new column starts ascending.
    pub fn toggle_sort(&mut self, option: SortOption) {
        self.sort = toggle_sort(self.sort, option);
    }

    pub fn set_sort(&mut self, sort: SortConfig) {
        self.sort = sort;
    }

    pub fn set_guaranteed_only(&mut self, on: bool) {
        self.filter.guaranteed_only = on;
    }

    pub fn set_kill_moves_only(&mut self, on: bool) {
        self.filter.kill_moves_only = on;
    }

    pub fn set_move_type(&mut self, move_type: MoveTypeFilter) {
        self.filter.move_type = move_type;
    }

    /// Bounds are stored as given; `min > max` is not corrected.
    pub fn set_damage_range(&mut self, min: f64, max: f64) {
        self.filter.min_damage = min;
        self.filter.max_damage = max;
    }

    pub fn set_filter(&mut self, filter: FilterConfig) {
        self.filter = filter;
    }

    pub fn reset_filters(&mut self) {
        self.filter = FilterConfig::default();
    }
}
