use crate::config::{FilterConfig, SortConfig};
use crate::model::PunishResult;
use crate::pipeline::{derive_view, FlattenedResult, ResultView};
use std::sync::Arc;
use tracing::debug;

struct CachedView {
    results: Arc<Vec<PunishResult>>,
    filter: FilterConfig,
    sort: SortConfig,
    order: Vec<(usize, usize)>,
    total_count: usize,
}

impl CachedView {
    fn matches(
        &self,
        results: &Arc<Vec<PunishResult>>,
        filter: &FilterConfig,
        sort: &SortConfig,
    ) -> bool {
        self.sort == *sort
            && self.filter == *filter
            && (Arc::ptr_eq(&self.results, results) || *self.results == **results)
    }
}

/// Remembers the ordering produced for the last set of inputs and replays it
/// while results, filter and sort are all unchanged.
#[derive(Default)]
pub struct ViewCache {
    last: Option<CachedView>,
    recomputations: usize,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(
        &mut self,
        results: &Arc<Vec<PunishResult>>,
        filter: &FilterConfig,
        sort: &SortConfig,
    ) -> ResultView<'_> {
        let fresh = match &self.last {
            Some(cached) => !cached.matches(results, filter, sort),
            None => true,
        };

        if fresh {
            let derived = derive_view(results, filter, sort);
            let order = derived.rows.iter().map(|row| row.origin).collect();
            let total_count = derived.total_count;

            self.recomputations += 1;
            debug!(
                "View recomputed: {} of {} records after filtering",
                derived.filtered_count, total_count
            );

            self.last = Some(CachedView {
                results: Arc::clone(results),
                filter: filter.clone(),
                sort: *sort,
                order,
                total_count,
            });
        } else {
            debug!("View cache hit");
        }

        match &self.last {
            Some(cached) => {
                let rows: Vec<_> = cached
                    .order
                    .iter()
                    .map(|&(r, m)| FlattenedResult::new(&cached.results[r], r, m))
                    .collect();
                ResultView {
                    filtered_count: rows.len(),
                    total_count: cached.total_count,
                    rows,
                }
            }
            None => ResultView {
                rows: Vec::new(),
                total_count: 0,
                filtered_count: 0,
            },
        }
    }

    /// How many times the pipeline actually ran.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}
