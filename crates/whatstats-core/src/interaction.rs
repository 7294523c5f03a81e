use chrono::Duration;
use indexmap::IndexMap;
use whatstats_parser::Event;

/// Unordered pair key. The two names are sorted so {A,B} and {B,A} land on
/// the same counter.
fn canonical_pair(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Counts reply adjacencies between distinct senders. Events are walked in
/// timestamp order (stable sort, so equal timestamps keep input order); a
/// consecutive pair counts when the senders differ and the gap is at most
/// `window_minutes`. Pairs totalling fewer than `min_count` replies are
/// dropped before returning.
pub fn count_interactions(
    events: &[Event],
    window_minutes: i64,
    min_count: u64,
) -> IndexMap<(String, String), u64> {
    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by_key(|event| event.timestamp);

    let window = Duration::minutes(window_minutes);
    let mut counts: IndexMap<(String, String), u64> = IndexMap::new();
    for pair in ordered.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if prev.sender == next.sender {
            continue;
        }
        if next.timestamp - prev.timestamp > window {
            continue;
        }
        *counts
            .entry(canonical_pair(&prev.sender, &next.sender))
            .or_insert(0) += 1;
    }

    counts.retain(|_, count| *count >= min_count);
    counts
}
