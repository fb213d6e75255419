//! Core domain logic for moodgrid.
//! This crate is the single source of truth for grid and record invariants.

pub mod db;
pub mod history;
pub mod logging;
pub mod model;
pub mod settings;
pub mod storage;
pub mod store;

pub use history::{energy_level, group_records_by_day, pleasure_level, DaySection, IntensityLevel};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::emotion::{in_grid, Emotion, GRID_SIZE};
pub use model::matrix::{DefaultGrid, EmotionMatrix, MatrixShapeError};
pub use model::record::{EmotionRecord, RecordId, RecordIdGenerator};
pub use settings::language::{load_language, save_language, Language};
pub use storage::{
    KeyValueStore, MemoryKeyValueStore, PersistQueue, SqliteKeyValueStore, StorageError,
    StorageKeys, StorageResult,
};
pub use store::{EmotionStore, StoreConfig, StoreNotReady, StoreSlot, StoreState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
