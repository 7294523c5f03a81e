use std::collections::HashSet;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use whatstats_parser::Event;

use crate::aggregate::{ActivityTables, DAYS_PER_WEEK, HOURS_PER_DAY};
use crate::config::PipelineConfig;
use crate::interaction::count_interactions;
use crate::words::WordExtractor;

/// UTC, seconds precision, trailing Z. The dashboard shows this verbatim.
pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// The one document this pipeline produces. Field names are the contract
/// with the dashboard, hence the camelCase rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub generated_at: String,
    pub stats: SummaryStats,
    pub hourly: Vec<HourBucket>,
    pub daily: Vec<DayBucket>,
    pub monthly: Vec<MonthBucket>,
    pub heatmap: Vec<HeatmapCell>,
    pub contributors: Vec<Contributor>,
    pub wordfreq: Vec<WordCount>,
    pub interactions: Vec<InteractionEdge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_messages: u64,
    pub unique_participants: u64,
    pub days_span: i64,
    pub active_days: u64,
    pub avg_per_day: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourBucket {
    pub hour: u32,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    pub day: u32,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthBucket {
    pub month: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub day: u32,
    pub hour: u32,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionEdge {
    pub source: String,
    pub target: String,
    pub value: u64,
}

/// Assembles the full summary from the event stream. `generated_at` is
/// passed in rather than read from the clock so runs are reproducible
/// under test.
pub fn build_summary(
    events: &[Event],
    config: &PipelineConfig,
    generated_at: DateTime<Utc>,
) -> Summary {
    let extractor = WordExtractor::new(&config.language);
    let tables = ActivityTables::collect(events, &extractor);
    let interactions = count_interactions(
        events,
        config.reply_window_minutes,
        config.min_interaction_count,
    );

    let mut heatmap = Vec::with_capacity(DAYS_PER_WEEK * HOURS_PER_DAY);
    for day in 0..DAYS_PER_WEEK {
        for hour in 0..HOURS_PER_DAY {
            heatmap.push(HeatmapCell {
                day: day as u32,
                hour: hour as u32,
                count: tables.heatmap[day][hour],
            });
        }
    }

    Summary {
        generated_at: generated_at.format(GENERATED_AT_FORMAT).to_string(),
        stats: scalar_stats(events),
        hourly: tables
            .hourly
            .iter()
            .enumerate()
            .map(|(hour, &count)| HourBucket {
                hour: hour as u32,
                count,
            })
            .collect(),
        daily: tables
            .daily
            .iter()
            .enumerate()
            .map(|(day, &count)| DayBucket {
                day: day as u32,
                count,
            })
            .collect(),
        monthly: tables
            .monthly
            .into_iter()
            .map(|(month, count)| MonthBucket { month, count })
            .collect(),
        heatmap,
        contributors: ranked(tables.contributors)
            .into_iter()
            .map(|(name, count)| Contributor { name, count })
            .collect(),
        wordfreq: ranked(tables.words)
            .into_iter()
            .take(config.top_words)
            .map(|(word, count)| WordCount { word, count })
            .collect(),
        interactions: ranked(interactions)
            .into_iter()
            .map(|((source, target), value)| InteractionEdge {
                source,
                target,
                value,
            })
            .collect(),
    }
}

/// Scalars come from the raw events, not from the frequency tables.
fn scalar_stats(events: &[Event]) -> SummaryStats {
    let total_messages = events.len() as u64;

    let mut participants = HashSet::new();
    let mut active = HashSet::new();
    let mut min_date = None;
    let mut max_date = None;
    for event in events {
        participants.insert(event.sender.as_str());
        active.insert(event.date);
        if min_date.map_or(true, |d| event.date < d) {
            min_date = Some(event.date);
        }
        if max_date.map_or(true, |d| event.date > d) {
            max_date = Some(event.date);
        }
    }

    let days_span = match (min_date, max_date) {
        (Some(min), Some(max)) => (max - min).num_days(),
        _ => 0,
    };
    let active_days = active.len() as u64;
    let avg_per_day = if active_days == 0 {
        0.0
    } else {
        round1(total_messages as f64 / active_days as f64)
    };

    SummaryStats {
        total_messages,
        unique_participants: participants.len() as u64,
        days_span,
        active_days,
        avg_per_day,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Descending by count. The sort is stable, so equal counts keep the
/// map's first-appearance order.
fn ranked<K>(table: IndexMap<K, u64>) -> Vec<(K, u64)> {
    let mut entries: Vec<(K, u64)> = table.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}
