//! Emotion record model and id generation.
//!
//! # Invariants
//! - `emotion` is a value copy taken at record time; later grid edits never
//!   reach an existing record.
//! - Ids issued by one `RecordIdGenerator` strictly increase.

use crate::model::emotion::Emotion;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Stable record identifier.
///
/// Kept as a string so ids written by earlier app versions load unchanged.
pub type RecordId = String;

/// Timestamped observation of one emotion plus user notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionRecord {
    pub id: RecordId,
    /// UTC instant, millisecond precision, RFC 3339 on disk.
    pub timestamp: DateTime<Utc>,
    pub emotion: Emotion,
    pub notes: String,
}

impl EmotionRecord {
    /// Captures a record, copying `emotion` by value.
    pub fn capture(
        id: RecordId,
        timestamp: DateTime<Utc>,
        emotion: &Emotion,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id,
            timestamp: timestamp.trunc_subsecs(3),
            emotion: emotion.clone(),
            notes: notes.into(),
        }
    }
}

/// Issues millisecond-based ids that never repeat within a process.
///
/// When the clock has not advanced (or went backwards) the next id is the
/// previous one plus one.
#[derive(Debug, Clone, Default)]
pub struct RecordIdGenerator {
    last_issued: i64,
}

impl RecordIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the generator past every numeric id already present.
    pub fn seeded_from(records: &[EmotionRecord]) -> Self {
        let last_issued = records
            .iter()
            .filter_map(|record| record.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self { last_issued }
    }

    pub fn next_id(&mut self, now: DateTime<Utc>) -> RecordId {
        let next = now
            .timestamp_millis()
            .max(self.last_issued.saturating_add(1));
        self.last_issued = next;
        next.to_string()
    }
}
