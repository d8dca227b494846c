pub mod calculation;
pub mod persist;
pub mod selection;
pub mod view_config;

pub use self::calculation::{CalculationStore, OPTIONS_KEY};
pub use self::persist::{JsonFileKv, KeyValueStore, MemoryKv};
pub use self::selection::{Selection, SelectionStore};
pub use self::view_config::ViewConfigStore;
