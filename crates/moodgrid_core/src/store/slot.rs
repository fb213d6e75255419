//! Shared store handle with an explicit readiness lifecycle.
//!
//! # Invariants
//! - The slot moves `Initializing -> Ready` exactly once and never back.
//! - No store operation runs before `Ready`; callers get `StoreNotReady`.

use crate::store::emotion_store::EmotionStore;
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, PoisonError};

/// Lifecycle of a `StoreSlot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Initializing,
    Ready,
}

impl StoreState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Ready => "ready",
        }
    }
}

/// Returned when the slot is used before initialization completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreNotReady;

impl Display for StoreNotReady {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "emotion store is still initializing")
    }
}

impl Error for StoreNotReady {}

/// Process-wide home for one `EmotionStore`.
#[derive(Default)]
pub struct StoreSlot {
    inner: OnceCell<Mutex<EmotionStore>>,
}

impl StoreSlot {
    pub const fn new() -> Self {
        Self {
            inner: OnceCell::new(),
        }
    }

    pub fn state(&self) -> StoreState {
        if self.inner.get().is_some() {
            StoreState::Ready
        } else {
            StoreState::Initializing
        }
    }

    /// Runs `open` and publishes its store, unless a store is already ready.
    ///
    /// Returns `true` when this call performed the initialization.
    pub fn initialize(&self, open: impl FnOnce() -> EmotionStore) -> bool {
        let mut initialized_here = false;
        self.inner.get_or_init(|| {
            initialized_here = true;
            Mutex::new(open())
        });
        initialized_here
    }

    /// Runs `f` against the ready store.
    pub fn with_store<T>(
        &self,
        f: impl FnOnce(&mut EmotionStore) -> T,
    ) -> Result<T, StoreNotReady> {
        let cell = self.inner.get().ok_or(StoreNotReady)?;
        // A panic inside an earlier closure leaves the snapshot intact.
        let mut store = cell.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&mut store))
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreNotReady, StoreSlot, StoreState};
    use crate::storage::MemoryKeyValueStore;
    use crate::store::{EmotionStore, StoreConfig};
    use std::sync::Arc;

    #[test]
    fn slot_rejects_calls_until_ready() {
        let slot = StoreSlot::new();
        assert_eq!(slot.state(), StoreState::Initializing);
        assert_eq!(
            slot.with_store(|store| store.records().len()),
            Err(StoreNotReady)
        );

        let opened = slot.initialize(|| {
            EmotionStore::open(Arc::new(MemoryKeyValueStore::new()), StoreConfig::default())
        });
        assert!(opened);
        assert_eq!(slot.state(), StoreState::Ready);
        assert_eq!(slot.with_store(|store| store.records().len()), Ok(0));
    }

    #[test]
    fn second_initialize_keeps_first_store() {
        let slot = StoreSlot::new();
        slot.initialize(|| {
            EmotionStore::open(Arc::new(MemoryKeyValueStore::new()), StoreConfig::default())
        });
        slot.with_store(|store| store.update_emotion(0, 0, "First", "#111111"))
            .unwrap();

        let reopened = slot.initialize(|| {
            EmotionStore::open(Arc::new(MemoryKeyValueStore::new()), StoreConfig::default())
        });
        assert!(!reopened);
        let label = slot
            .with_store(|store| store.emotion_at(0, 0).unwrap().label.clone())
            .unwrap();
        assert_eq!(label, "First");
    }
}
