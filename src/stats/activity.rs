//! Weekday/month activity maps and the weekday × hour-bucket heatmap.
//!
//! The maps have a fixed shape regardless of input: exactly 7 weekday rows
//! (Monday..Sunday), exactly 12 month rows (January..December), and a 7 × 24
//! heatmap whose columns are the hour buckets ordered by starting hour. Days
//! and cells with no messages are zero-filled, never missing.

use chrono::{Datelike, Timelike};
use serde::Serialize;

use crate::record::{MONTH_NAMES, MessageRecord, WEEKDAY_NAMES, hour_bucket_label};

/// Weekday × hour-bucket message count matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityHeatmap {
    /// Row labels: the 7 weekday names, Monday first.
    pub weekdays: Vec<&'static str>,
    /// Column labels: the 24 hour-bucket labels ordered by starting hour,
    /// `"00-01"` through `"23-00"`.
    pub buckets: Vec<String>,
    /// `counts[row][column]` message counts; zero where no messages fall.
    pub counts: Vec<Vec<u64>>,
}

impl ActivityHeatmap {
    /// Sum of all cells.
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Returns `true` if no cell is non-zero.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Message counts per weekday, Monday..Sunday, zero-filled.
///
/// Always returns exactly 7 entries; the counts sum to the number of
/// records with a parsed date.
pub fn weekday_activity(records: &[MessageRecord]) -> Vec<(&'static str, u64)> {
    let mut counts = [0u64; 7];
    for record in records {
        if let Some(ts) = record.timestamp() {
            counts[ts.weekday().num_days_from_monday() as usize] += 1;
        }
    }
    WEEKDAY_NAMES.iter().copied().zip(counts).collect()
}

/// Message counts per month, January..December, zero-filled.
///
/// Always returns exactly 12 entries; the counts sum to the number of
/// records with a parsed date.
pub fn month_activity(records: &[MessageRecord]) -> Vec<(&'static str, u64)> {
    let mut counts = [0u64; 12];
    for record in records {
        if let Some(ts) = record.timestamp() {
            counts[ts.month0() as usize] += 1;
        }
    }
    MONTH_NAMES.iter().copied().zip(counts).collect()
}

/// Builds the weekday × hour-bucket heatmap.
///
/// Column order is numeric by starting hour, not lexicographic, so the
/// wraparound bucket `"23-00"` is last. Records without timestamps
/// contribute to no cell.
pub fn activity_heatmap(records: &[MessageRecord]) -> ActivityHeatmap {
    let mut counts = vec![vec![0u64; 24]; 7];

    for record in records {
        if let Some(ts) = record.timestamp() {
            let day = ts.weekday().num_days_from_monday() as usize;
            let hour = ts.hour() as usize;
            counts[day][hour] += 1;
        }
    }

    ActivityHeatmap {
        weekdays: WEEKDAY_NAMES.to_vec(),
        buckets: (0..24).map(hour_bucket_label).collect(),
        counts,
    }
}
