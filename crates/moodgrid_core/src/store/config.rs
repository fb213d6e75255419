//! Per-build store configuration.

use crate::model::matrix::DefaultGrid;
use crate::storage::StorageKeys;

/// Document keys plus the grid used for first start and reset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreConfig {
    pub keys: StorageKeys,
    pub default_grid: DefaultGrid,
}

impl StoreConfig {
    /// Browser build: web key names and the English grid.
    pub fn web() -> Self {
        Self {
            keys: StorageKeys::web(),
            default_grid: DefaultGrid::English,
        }
    }
}
