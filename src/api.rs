use crate::config::{CalculationOptions, CalculationOptionsPatch, SortOption};
use crate::error::{FfResult, FrameForgeError};
use crate::model::{Fighter, Move, PunishResult};
use crate::pipeline::{ResultView, ViewCache};
use crate::store::{
    CalculationStore, KeyValueStore, MemoryKv, Selection, SelectionStore, ViewConfigStore,
};
use tracing::{debug, info, warn};

/// The frame-data engine that turns a selection into punish results.
pub trait PunishCalculator {
    fn calculate(
        &self,
        options: &CalculationOptions,
        selection: &Selection,
    ) -> FfResult<Vec<PunishResult>>;
}

/// Everything one results screen needs, owned in one place and passed
/// around explicitly.
pub struct Session<K: KeyValueStore = MemoryKv> {
    selection: SelectionStore,
    calculation: CalculationStore<K>,
    view_config: ViewConfigStore,
    cache: ViewCache,
}

impl Default for Session<MemoryKv> {
    fn default() -> Self {
        Self::new(CalculationStore::in_memory(), ViewConfigStore::default())
    }
}

impl<K: KeyValueStore> Session<K> {
    pub fn new(calculation: CalculationStore<K>, view_config: ViewConfigStore) -> Self {
        Self {
            selection: SelectionStore::new(),
            calculation,
            view_config,
            cache: ViewCache::new(),
        }
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn calculation(&self) -> &CalculationStore<K> {
        &self.calculation
    }

    pub fn view_config(&self) -> &ViewConfigStore {
        &self.view_config
    }

    /// Filter and sort only shape the derived view, so they are open for
    /// direct edits.
    pub fn view_config_mut(&mut self) -> &mut ViewConfigStore {
        &mut self.view_config
    }

    pub fn select_attacker(&mut self, attacker: Option<Fighter>) {
        self.selection.set_attacker(attacker);
    }

    pub fn select_defender(&mut self, defender: Option<Fighter>) {
        self.selection.set_defender(defender);
    }

    pub fn focus_move(&mut self, focused: Option<Move>) {
        self.selection.set_focused_move(focused);
    }

    /// Clears the selection and every result derived from it.
    pub fn reset_selection(&mut self) {
        self.selection.reset();
        self.calculation.reset();
    }

    pub fn update_options(&mut self, patch: &CalculationOptionsPatch) {
        self.calculation.set_options(patch);
    }

    pub fn toggle_sort(&mut self, option: SortOption) {
        self.view_config.toggle_sort(option);
    }

    /// Runs the calculator for the current selection and options. Nothing
    /// happens until an attacker is chosen.
    pub fn recalculate<C: PunishCalculator + ?Sized>(&mut self, calculator: &C) {
        if self.selection.attacker().is_none() {
            debug!("No attacker selected, skipping calculation");
            return;
        }

        self.calculation.set_computing(true);
        match calculator.calculate(self.calculation.options(), self.selection.state()) {
            Ok(results) => {
                info!("Calculated punishes against {} defender(s)", results.len());
                self.calculation.set_results(results);
            }
            Err(e) => {
                warn!("Punish calculation failed: {}", e);
                self.calculation.set_error(error_message(e));
            }
        }
        self.calculation.set_computing(false);
    }

    /// Ranked rows for the current results, filter and sort.
    pub fn view(&mut self) -> ResultView<'_> {
        self.cache.view(
            self.calculation.results(),
            self.view_config.filter(),
            self.view_config.sort(),
        )
    }

    pub fn recomputations(&self) -> usize {
        self.cache.recomputations()
    }
}

/// Calculator messages are shown as-is; anything else keeps its context.
fn error_message(error: FrameForgeError) -> String {
    match error {
        FrameForgeError::Calculation(msg) => msg,
        other => other.to_string(),
    }
}
