use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use moodgrid_core::{
    energy_level, group_records_by_day, pleasure_level, EmotionStore, IntensityLevel,
    MemoryKeyValueStore, StoreConfig,
};
use std::sync::Arc;

#[test]
fn groups_newest_first_records_into_day_sections() {
    let mut store = EmotionStore::open(Arc::new(MemoryKeyValueStore::new()), StoreConfig::default());
    let calm = store.emotion_at(2, 4).unwrap().clone();
    let angry = store.emotion_at(1, 0).unwrap().clone();

    store.record_emotion_at(&calm, "morning", Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap());
    store.record_emotion_at(&angry, "traffic", Utc.with_ymd_and_hms(2024, 5, 1, 18, 30, 0).unwrap());
    store.record_emotion_at(&calm, "weekend", Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap());

    let sections = group_records_by_day(store.records(), &Utc);
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
    assert_eq!(sections[0].records.len(), 1);
    assert_eq!(sections[1].date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    let notes: Vec<&str> = sections[1].records.iter().map(|r| r.notes.as_str()).collect();
    assert_eq!(notes, vec!["traffic", "morning"]);
}

#[test]
fn back_dated_entry_does_not_push_its_day_above_newer_days() {
    let mut store = EmotionStore::open(Arc::new(MemoryKeyValueStore::new()), StoreConfig::default());
    let emotion = store.emotion_at(3, 2).unwrap().clone();

    store.record_emotion_at(&emotion, "today", Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap());
    store.record_emotion_at(&emotion, "yesterday", Utc.with_ymd_and_hms(2024, 5, 1, 21, 0, 0).unwrap());

    let sections = group_records_by_day(store.records(), &Utc);
    let dates: Vec<NaiveDate> = sections.iter().map(|section| section.date).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        ]
    );
    assert_eq!(sections[1].records[0].notes, "yesterday");
}

#[test]
fn local_offset_decides_the_day_of_late_entries() {
    let mut store = EmotionStore::open(Arc::new(MemoryKeyValueStore::new()), StoreConfig::default());
    let emotion = store.emotion_at(1, 3).unwrap().clone();
    store.record_emotion_at(&emotion, "late", Utc.with_ymd_and_hms(2024, 5, 1, 22, 15, 0).unwrap());

    let madrid_summer = FixedOffset::east_opt(2 * 3600).unwrap();
    let sections = group_records_by_day(store.records(), &madrid_summer);
    assert_eq!(sections[0].date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
}

#[test]
fn empty_history_has_no_sections() {
    assert!(group_records_by_day(&[], &Utc).is_empty());
}

#[test]
fn levels_follow_recorded_copy_not_live_grid() {
    let mut store = EmotionStore::open(Arc::new(MemoryKeyValueStore::new()), StoreConfig::default());
    let elated = store.emotion_at(4, 0).unwrap().clone();
    let record = store.record_emotion(&elated, "promotion");

    store.reset_emotion_matrix();

    assert_eq!(energy_level(&record.emotion), IntensityLevel::VeryHigh);
    assert_eq!(pleasure_level(&record.emotion), IntensityLevel::VeryHigh);
}
