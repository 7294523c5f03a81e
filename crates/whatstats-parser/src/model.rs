use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

/// Sender label substituted when the name column is empty after trimming.
pub const UNKNOWN_SENDER: &str = "Unknown";

/// One validated chat message. Every event carries a full timestamp; rows
/// without one never become events. The derived bucket keys (`hour`,
/// `weekday`, `year_month`) are fixed at construction so the aggregation
/// stage never re-derives them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub date: NaiveDate,
    pub timestamp: NaiveDateTime,
    /// Hour of day, 0-23.
    pub hour: u32,
    /// Weekday with Monday = 0 through Sunday = 6.
    pub weekday: u32,
    /// "YYYY-MM", lexicographically sortable month key.
    pub year_month: String,
    pub sender: String,
    pub text: String,
}

impl Event {
    pub fn new(timestamp: NaiveDateTime, sender: String, text: String) -> Self {
        let date = timestamp.date();
        Self {
            date,
            timestamp,
            hour: timestamp.hour(),
            weekday: date.weekday().num_days_from_monday(),
            year_month: date.format("%Y-%m").to_string(),
            sender,
            text,
        }
    }
}
