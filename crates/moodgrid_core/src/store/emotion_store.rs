//! Owned emotion store over a key-value adapter.
//!
//! # Responsibility
//! - Build the initial snapshot from storage or built-in defaults.
//! - Provide the five mutation use-cases plus snapshot reads.
//!
//! # Invariants
//! - The grid always covers all 25 cells; only label/color ever change.
//! - Records are newest-first by insertion and are never edited in place.
//! - Every effective mutation queues exactly one full-document write.
//! - Store logs carry counts and coordinates only, never labels or notes.

use crate::model::emotion::Emotion;
use crate::model::matrix::{DefaultGrid, EmotionMatrix};
use crate::model::record::{EmotionRecord, RecordIdGenerator};
use crate::storage::{KeyValueStore, PersistQueue, StorageKeys};
use crate::store::config::StoreConfig;
use crate::store::codec::{decode_matrix, decode_records, encode_matrix, encode_records};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Instant;

/// Authoritative in-memory grid and record log with best-effort persistence.
pub struct EmotionStore {
    matrix: EmotionMatrix,
    records: Vec<EmotionRecord>,
    ids: RecordIdGenerator,
    config: StoreConfig,
    queue: PersistQueue,
}

impl EmotionStore {
    /// Loads persisted state and returns a ready store.
    ///
    /// Never fails: a missing, unreadable or malformed document is replaced
    /// by its default (the configured built-in grid, empty record list).
    pub fn open(adapter: Arc<dyn KeyValueStore>, config: StoreConfig) -> Self {
        let started_at = Instant::now();
        info!("event=store_init module=store status=start");

        let matrix = load_matrix(adapter.as_ref(), &config.keys.matrix, config.default_grid);
        let records = load_records(adapter.as_ref(), &config.keys.records);
        let ids = RecordIdGenerator::seeded_from(&records);
        let queue = PersistQueue::spawn(adapter);

        info!(
            "event=store_init module=store status=ok records={} duration_ms={}",
            records.len(),
            started_at.elapsed().as_millis()
        );

        Self {
            matrix,
            records,
            ids,
            config,
            queue,
        }
    }

    /// Current grid snapshot.
    pub fn matrix(&self) -> &EmotionMatrix {
        &self.matrix
    }

    /// Current record list, newest first.
    pub fn records(&self) -> &[EmotionRecord] {
        &self.records
    }

    pub fn emotion_at(&self, x: u8, y: u8) -> Option<&Emotion> {
        self.matrix.emotion_at(x, y)
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.config.keys
    }

    /// Replaces label and color of the cell at `(x, y)`.
    ///
    /// Returns `false` for coordinates outside the grid; nothing is written
    /// in that case. Labels are not validated.
    pub fn update_emotion(
        &mut self,
        x: u8,
        y: u8,
        label: impl Into<String>,
        color: impl Into<String>,
    ) -> bool {
        if !self.matrix.set_cell(x, y, label.into(), color.into()) {
            debug!("event=emotion_update module=store status=skipped x={x} y={y} reason=no_cell");
            return false;
        }

        info!("event=emotion_update module=store status=ok x={x} y={y}");
        self.persist_matrix();
        true
    }

    /// Records `emotion` with `notes` at the current instant.
    pub fn record_emotion(&mut self, emotion: &Emotion, notes: impl Into<String>) -> EmotionRecord {
        self.record_emotion_at(emotion, notes, Utc::now())
    }

    /// Records `emotion` with an explicit timestamp.
    ///
    /// The emotion is copied by value; later grid edits do not reach the
    /// returned record or its stored copy.
    pub fn record_emotion_at(
        &mut self,
        emotion: &Emotion,
        notes: impl Into<String>,
        now: DateTime<Utc>,
    ) -> EmotionRecord {
        let id = self.ids.next_id(now);
        let record = EmotionRecord::capture(id, now, emotion, notes);
        self.records.insert(0, record.clone());

        info!(
            "event=emotion_record module=store status=ok x={} y={} records={}",
            record.emotion.x,
            record.emotion.y,
            self.records.len()
        );
        self.persist_records();
        record
    }

    /// Removes the record with `id`; returns whether one was removed.
    pub fn delete_emotion_record(&mut self, id: &str) -> bool {
        let Some(index) = self.records.iter().position(|record| record.id == id) else {
            debug!("event=record_delete module=store status=skipped reason=not_found");
            return false;
        };

        self.records.remove(index);
        info!(
            "event=record_delete module=store status=ok records={}",
            self.records.len()
        );
        self.persist_records();
        true
    }

    /// Restores the configured built-in grid. Records are untouched.
    pub fn reset_emotion_matrix(&mut self) {
        self.matrix = EmotionMatrix::builtin(self.config.default_grid);
        info!("event=matrix_reset module=store status=ok");
        self.persist_matrix();
    }

    /// Drops every record. The grid is untouched.
    pub fn clear_emotion_records(&mut self) {
        let cleared = self.records.len();
        self.records.clear();
        info!("event=records_clear module=store status=ok cleared={cleared}");
        self.persist_records();
    }

    /// Blocks until all writes queued so far have reached the adapter.
    pub fn flush(&self) {
        self.queue.flush();
    }

    /// Number of persistence writes that failed since the store opened.
    pub fn failed_writes(&self) -> u64 {
        self.queue.failed_writes()
    }

    fn persist_matrix(&self) {
        match encode_matrix(&self.matrix) {
            Ok(raw) => self.queue.enqueue(&self.config.keys.matrix, raw),
            Err(err) => warn!(
                "event=persist_encode module=store status=error document=matrix error={}",
                err
            ),
        }
    }

    fn persist_records(&self) {
        match encode_records(&self.records) {
            Ok(raw) => self.queue.enqueue(&self.config.keys.records, raw),
            Err(err) => warn!(
                "event=persist_encode module=store status=error document=records error={}",
                err
            ),
        }
    }
}

fn load_matrix(adapter: &dyn KeyValueStore, key: &str, fallback: DefaultGrid) -> EmotionMatrix {
    match adapter.read(key) {
        Ok(Some(raw)) => match decode_matrix(&raw) {
            Ok(matrix) => {
                info!("event=matrix_load module=store status=ok source=storage");
                matrix
            }
            Err(err) => {
                warn!(
                    "event=matrix_load module=store status=fallback source=default error={}",
                    err
                );
                EmotionMatrix::builtin(fallback)
            }
        },
        Ok(None) => {
            info!("event=matrix_load module=store status=ok source=default");
            EmotionMatrix::builtin(fallback)
        }
        Err(err) => {
            warn!(
                "event=matrix_load module=store status=fallback source=default error_code=read_failed error={}",
                err
            );
            EmotionMatrix::builtin(fallback)
        }
    }
}

fn load_records(adapter: &dyn KeyValueStore, key: &str) -> Vec<EmotionRecord> {
    match adapter.read(key) {
        Ok(Some(raw)) => match decode_records(&raw) {
            Ok(records) => {
                info!(
                    "event=records_load module=store status=ok source=storage count={}",
                    records.len()
                );
                records
            }
            Err(err) => {
                warn!(
                    "event=records_load module=store status=fallback source=empty error={}",
                    err
                );
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(err) => {
            warn!(
                "event=records_load module=store status=fallback source=empty error_code=read_failed error={}",
                err
            );
            Vec::new()
        }
    }
}
