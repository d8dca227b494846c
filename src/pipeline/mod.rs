pub mod cache;
pub mod filter;
pub mod flatten;
pub mod rank;

pub use self::cache::ViewCache;
pub use self::filter::apply_filters;
pub use self::flatten::{flatten, FlattenedResult};
pub use self::rank::{rank, toggle_sort};

use crate::config::{FilterConfig, SortConfig};
use crate::model::PunishResult;

/// What presentation renders: ranked rows plus the counts shown above them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView<'a> {
    pub rows: Vec<FlattenedResult<'a>>,
    /// Records before filtering.
    pub total_count: usize,
    /// Records after filtering.
    pub filtered_count: usize,
}

impl ResultView<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// flatten -> filter -> rank. Pure in its three inputs.
pub fn derive_view<'a>(
    results: &'a [PunishResult],
    filter: &FilterConfig,
    sort: &SortConfig,
) -> ResultView<'a> {
    let flat = flatten(results);
    let total_count = flat.len();

    let filtered = apply_filters(flat, filter);
    let filtered_count = filtered.len();

    ResultView {
        rows: rank(filtered, sort),
        total_count,
        filtered_count,
    }
}
