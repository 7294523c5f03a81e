use chrono::{NaiveDate, NaiveTime};
use csv::StringRecord;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ExportError, RowError};
use crate::model::{Event, UNKNOWN_SENDER};

pub const DATE_COLUMN: &str = "date (YYYY-MM-DD)";
pub const TIME_COLUMN: &str = "time (hh:mm)";
pub const SENDER_COLUMN: &str = "name";
pub const TEXT_COLUMN: &str = "text";

// Despite the header's label the exporter writes two-digit years.
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{2}-\d{2}$").expect("date pattern"));

const DATE_FORMAT: &str = "%y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Column indices of the four contract columns, resolved from the header row.
#[derive(Debug, Clone, Copy)]
pub struct ExportSchema {
    date: usize,
    time: usize,
    sender: usize,
    text: usize,
}

impl ExportSchema {
    pub fn from_header(header: &StringRecord) -> Result<Self, ExportError> {
        if header.is_empty() {
            return Err(ExportError::MissingHeader);
        }
        Ok(Self {
            date: require_column(header, DATE_COLUMN)?,
            time: require_column(header, TIME_COLUMN)?,
            sender: require_column(header, SENDER_COLUMN)?,
            text: require_column(header, TEXT_COLUMN)?,
        })
    }
}

fn require_column(header: &StringRecord, column: &'static str) -> Result<usize, ExportError> {
    header
        .iter()
        .position(|field| field == column)
        .ok_or(ExportError::MissingColumn { column })
}

#[derive(Debug)]
pub struct ParsedExport {
    pub events: Vec<Event>,
    /// Rows that failed validation and were dropped. Reported once in
    /// aggregate, never logged individually.
    pub dropped_rows: usize,
}

/// Parses a whole export. Malformed rows are dropped silently and the loop
/// continues; structural problems (unreadable CSV, missing contract columns,
/// zero valid messages) are fatal.
pub fn parse_export(content: &str) -> Result<ParsedExport, ExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let schema = ExportSchema::from_header(&reader.headers()?.clone())?;

    let mut events = Vec::new();
    let mut rows = 0usize;
    for record in reader.records() {
        let record = record?;
        rows += 1;
        if let Ok(event) = parse_row(&schema, &record) {
            events.push(event);
        }
    }

    if events.is_empty() {
        return Err(ExportError::Empty { rows });
    }

    let dropped_rows = rows - events.len();
    Ok(ParsedExport {
        events,
        dropped_rows,
    })
}

/// Validates one row into an `Event`. Pure function of the record; the
/// `Err` variant is the "invalid row" signal the export loop filters out.
pub fn parse_row(schema: &ExportSchema, record: &StringRecord) -> Result<Event, RowError> {
    let date_raw = record.get(schema.date).unwrap_or("").trim();
    if !DATE_SHAPE.is_match(date_raw) {
        return Err(RowError::InvalidDate);
    }
    let date =
        NaiveDate::parse_from_str(date_raw, DATE_FORMAT).map_err(|_| RowError::InvalidDate)?;

    let time_raw = record.get(schema.time).unwrap_or("").trim();
    let time =
        NaiveTime::parse_from_str(time_raw, TIME_FORMAT).map_err(|_| RowError::InvalidTime)?;

    let sender_raw = record.get(schema.sender).unwrap_or("").trim();
    let sender = if sender_raw.is_empty() {
        UNKNOWN_SENDER.to_string()
    } else {
        sender_raw.to_string()
    };

    let text = record.get(schema.text).unwrap_or("").to_string();

    Ok(Event::new(date.and_time(time), sender, text))
}
