//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `moodgrid_core` linkage without the Flutter runtime.
//! - With a database path argument, print the loaded grid and record count.

use moodgrid_core::{EmotionStore, SqliteKeyValueStore, StoreConfig};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    println!("moodgrid_core ping={}", moodgrid_core::ping());
    println!("moodgrid_core version={}", moodgrid_core::core_version());

    let Some(db_path) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    let adapter = match SqliteKeyValueStore::open(&db_path) {
        Ok(adapter) => Arc::new(adapter),
        Err(err) => {
            eprintln!("failed to open `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };
    let store = EmotionStore::open(adapter, StoreConfig::default());
    let matrix = store.matrix();

    println!("axes x={} y={}", matrix.x_axis, matrix.y_axis);
    for y in 0..moodgrid_core::GRID_SIZE {
        let row = (0..moodgrid_core::GRID_SIZE)
            .map(|x| {
                store
                    .emotion_at(x, y)
                    .map_or("-", |emotion| emotion.label.as_str())
            })
            .collect::<Vec<_>>()
            .join(" | ");
        println!("y={y}: {row}");
    }
    println!("records={}", store.records().len());

    ExitCode::SUCCESS
}
