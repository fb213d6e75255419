//! Flutter bridge surface for moodgrid core.

pub mod api;
