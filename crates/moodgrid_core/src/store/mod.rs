//! Emotion matrix store: the single owner of grid and record state.
//!
//! # Responsibility
//! - Load grid and records once, falling back to defaults on any problem.
//! - Apply mutations to the in-memory snapshot, then queue persistence.
//! - Expose a shared slot with an explicit `Initializing -> Ready` lifecycle.
//!
//! # Invariants
//! - Snapshot reads observe a mutation as soon as the call returns.
//! - Persistence failures never roll back or reach the caller.

mod codec;
mod config;
mod emotion_store;
mod slot;

pub use codec::{decode_matrix, decode_records, encode_matrix, encode_records, DecodeError};
pub use config::StoreConfig;
pub use emotion_store::EmotionStore;
pub use slot::{StoreNotReady, StoreSlot, StoreState};
