use std::collections::BTreeMap;

use indexmap::IndexMap;
use whatstats_parser::Event;

use crate::words::WordExtractor;

pub const HOURS_PER_DAY: usize = 24;
pub const DAYS_PER_WEEK: usize = 7;

/// The order-independent frequency tables, filled in one pass over the
/// event stream. The keyed maps remember first-appearance order, which the
/// report stage uses as the tie-break when ranking by count.
#[derive(Debug, Default)]
pub struct ActivityTables {
    pub hourly: [u64; HOURS_PER_DAY],
    pub daily: [u64; DAYS_PER_WEEK],
    pub monthly: BTreeMap<String, u64>,
    pub heatmap: [[u64; HOURS_PER_DAY]; DAYS_PER_WEEK],
    pub contributors: IndexMap<String, u64>,
    pub words: IndexMap<String, u64>,
}

impl ActivityTables {
    pub fn collect(events: &[Event], extractor: &WordExtractor) -> Self {
        let mut tables = Self::default();
        for event in events {
            let hour = event.hour as usize;
            let day = event.weekday as usize;

            tables.hourly[hour] += 1;
            tables.daily[day] += 1;
            tables.heatmap[day][hour] += 1;
            *tables.monthly.entry(event.year_month.clone()).or_insert(0) += 1;
            *tables
                .contributors
                .entry(event.sender.clone())
                .or_insert(0) += 1;
            for word in extractor.words(&event.text) {
                *tables.words.entry(word).or_insert(0) += 1;
            }
        }
        tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::config::LanguageProfile;

    fn event(day: u32, hour: u32, sender: &str, text: &str) -> Event {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        Event::new(
            date.and_hms_opt(hour, 0, 0).unwrap(),
            sender.to_string(),
            text.to_string(),
        )
    }

    #[test]
    fn one_pass_fills_every_table() {
        let events = vec![
            event(1, 12, "Alice", "futebol domingo"),
            event(1, 12, "Bob", "futebol"),
            event(2, 9, "Alice", ""),
        ];
        let tables = ActivityTables::collect(&events, &WordExtractor::new(&LanguageProfile::default()));

        assert_eq!(tables.hourly.iter().sum::<u64>(), 3);
        assert_eq!(tables.hourly[12], 2);
        // 2024-01-01 is a Monday, 2024-01-02 a Tuesday
        assert_eq!(tables.daily[0], 2);
        assert_eq!(tables.daily[1], 1);
        assert_eq!(tables.heatmap[0][12], 2);
        assert_eq!(tables.heatmap[1][9], 1);
        assert_eq!(tables.monthly.get("2024-01"), Some(&3));
        assert_eq!(tables.contributors.get("Alice"), Some(&2));
        assert_eq!(tables.words.get("futebol"), Some(&2));
        assert_eq!(tables.words.get("domingo"), Some(&1));
    }

    #[test]
    fn keyed_tables_remember_first_appearance_order() {
        let events = vec![
            event(1, 8, "Carla", "praia"),
            event(1, 9, "Bruno", "jantar"),
            event(1, 10, "Carla", "praia"),
        ];
        let tables = ActivityTables::collect(&events, &WordExtractor::new(&LanguageProfile::default()));

        let names: Vec<&String> = tables.contributors.keys().collect();
        assert_eq!(names, ["Carla", "Bruno"]);
        let words: Vec<&String> = tables.words.keys().collect();
        assert_eq!(words, ["praia", "jantar"]);
    }

    #[test]
    fn empty_stream_yields_zeroed_tables() {
        let tables = ActivityTables::collect(&[], &WordExtractor::new(&LanguageProfile::default()));
        assert_eq!(tables.hourly.iter().sum::<u64>(), 0);
        assert!(tables.monthly.is_empty());
        assert!(tables.contributors.is_empty());
    }
}
