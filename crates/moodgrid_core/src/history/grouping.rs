//! Day grouping for the history list.

use crate::model::record::EmotionRecord;
use chrono::{NaiveDate, TimeZone};

/// Records that share one calendar date in the caller's time zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySection {
    pub date: NaiveDate,
    pub records: Vec<EmotionRecord>,
}

/// Groups records by their calendar date in `tz`.
///
/// Timestamps are stored in UTC; the device's offset decides which day a
/// late-evening entry belongs to, so callers pass it (`&Utc` when no local
/// zone is known). Sections are ordered by date, newest first. Inside a
/// section records keep list order.
pub fn group_records_by_day<Tz: TimeZone>(records: &[EmotionRecord], tz: &Tz) -> Vec<DaySection> {
    let mut sections: Vec<DaySection> = Vec::new();
    for record in records {
        let date = record.timestamp.with_timezone(tz).date_naive();
        match sections.iter_mut().find(|section| section.date == date) {
            Some(section) => section.records.push(record.clone()),
            None => sections.push(DaySection {
                date,
                records: vec![record.clone()],
            }),
        }
    }
    sections.sort_by(|a, b| b.date.cmp(&a.date));
    sections
}

#[cfg(test)]
mod tests {
    use super::group_records_by_day;
    use crate::model::emotion::Emotion;
    use crate::model::record::EmotionRecord;
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

    fn record_at(id: &str, year: i32, month: u32, day: u32, hour: u32) -> EmotionRecord {
        let timestamp = Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap();
        let emotion = Emotion::new(2, 2, "Neutral", "#6b7280");
        EmotionRecord::capture(id.to_string(), timestamp, &emotion, "")
    }

    #[test]
    fn sections_sort_by_date_even_when_list_order_disagrees() {
        // Newest-first list whose head was back-dated: 05-01 sits above 05-02.
        let records = vec![
            record_at("3", 2024, 5, 1, 9),
            record_at("2", 2024, 5, 2, 12),
            record_at("1", 2024, 5, 1, 7),
        ];

        let sections = group_records_by_day(&records, &Utc);
        let dates: Vec<NaiveDate> = sections.iter().map(|section| section.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            ]
        );
        let ids: Vec<&str> = sections[1].records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn local_offset_moves_late_entries_to_the_next_day() {
        // 23:30 UTC on 05-01 is 01:30 on 05-02 in UTC+2.
        let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 23, 30, 0).unwrap();
        let emotion = Emotion::new(0, 0, "Estresado", "#e11d48");
        let records = vec![EmotionRecord::capture("1".to_string(), timestamp, &emotion, "")];

        let utc = group_records_by_day(&records, &Utc);
        assert_eq!(utc[0].date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());

        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = group_records_by_day(&records, &east);
        assert_eq!(local[0].date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());

        let west = FixedOffset::west_opt(5 * 3600).unwrap();
        let local = group_records_by_day(&records, &west);
        assert_eq!(local[0].date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }
}
