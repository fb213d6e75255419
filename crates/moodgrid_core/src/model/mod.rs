//! Domain model for the emotion grid and the record log.
//!
//! # Responsibility
//! - Define the value types shared by the store, history projections and FFI.
//! - Own the built-in default grid.
//!
//! # Invariants
//! - A well-formed grid holds exactly one emotion per (x, y) in 0..=4.
//! - Records hold value copies of emotions, never references into the grid.

pub mod emotion;
pub mod matrix;
pub mod record;
