//! User settings persisted next to the emotion documents.

pub mod language;
