use crate::config::{CalculationOptions, CalculationOptionsPatch};
use crate::error::FfResult;
use crate::model::PunishResult;
use crate::store::persist::{KeyValueStore, MemoryKv};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const OPTIONS_KEY: &str = "frameforge.calculation-options";

/// Calculator parameters plus the output of the last calculation.
///
/// Results are only trusted for the options that produced them: changing
/// options or reporting an error empties them. Only `options` ever reaches
/// the persistence collaborator.
pub struct CalculationStore<K: KeyValueStore = MemoryKv> {
    options: CalculationOptions,
    results: Arc<Vec<PunishResult>>,
    is_computing: bool,
    error: Option<String>,
    persistence: K,
}

impl CalculationStore<MemoryKv> {
    pub fn in_memory() -> Self {
        Self::new(MemoryKv::new())
    }
}

impl<K: KeyValueStore> CalculationStore<K> {
    /// Seeds options from `persistence`, falling back to defaults when
    /// nothing usable was saved.
    pub fn new(persistence: K) -> Self {
        let options = match load_options(&persistence) {
            Ok(Some(saved)) => {
                info!("Restored saved calculation options");
                saved
            }
            Ok(None) => CalculationOptions::default(),
            Err(e) => {
                warn!("Ignoring saved calculation options: {}", e);
                CalculationOptions::default()
            }
        };

        Self {
            options,
            results: Arc::new(Vec::new()),
            is_computing: false,
            error: None,
            persistence,
        }
    }

    pub fn options(&self) -> &CalculationOptions {
        &self.options
    }

    pub fn results(&self) -> &Arc<Vec<PunishResult>> {
        &self.results
    }

    pub fn is_computing(&self) -> bool {
        self.is_computing
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn persistence(&self) -> &K {
        &self.persistence
    }

    pub fn set_options(&mut self, patch: &CalculationOptionsPatch) {
        self.options.merge(patch);
        self.clear_results();
        debug!("Calculation options changed, results invalidated");

        if let Err(e) = save_options(&mut self.persistence, &self.options) {
            warn!("Could not persist calculation options: {}", e);
        }
    }

    pub fn set_results(&mut self, results: Vec<PunishResult>) {
        self.results = Arc::new(results);
        self.error = None;
    }

    pub fn set_computing(&mut self, computing: bool) {
        self.is_computing = computing;
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        self.clear_results();
    }

    /// Drops computation state but keeps the user's options.
    pub fn reset(&mut self) {
        self.clear_results();
        self.is_computing = false;
        self.error = None;
    }

    pub(crate) fn clear_results(&mut self) {
        if !self.results.is_empty() {
            self.results = Arc::new(Vec::new());
        }
    }
}

fn load_options<K: KeyValueStore>(store: &K) -> FfResult<Option<CalculationOptions>> {
    match store.get(OPTIONS_KEY)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

fn save_options<K: KeyValueStore>(store: &mut K, options: &CalculationOptions) -> FfResult<()> {
    let raw = serde_json::to_string(options)?;
    store.set(OPTIONS_KEY, raw)
}
