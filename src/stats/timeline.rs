//! Monthly and daily message timelines.
//!
//! Records without a parsed timestamp carry no date and drop out of both
//! series silently; they still count in the scalar statistics.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::record::{MONTH_NAMES, MessageRecord};

/// One month's message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    /// Four-digit year.
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
    /// Display label, e.g. `"Jan-2024"`.
    pub label: String,
    /// Messages in that month.
    pub count: u64,
}

/// One calendar day's message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    /// Calendar date.
    pub date: NaiveDate,
    /// Messages on that date.
    pub count: u64,
}

/// Groups records by (year, month), ascending.
///
/// Labels are the 3-letter month name joined to the year, `"Jan-2024"`.
pub fn monthly_timeline(records: &[MessageRecord]) -> Vec<MonthlyPoint> {
    let mut counts: BTreeMap<(i32, u32), u64> = BTreeMap::new();

    for record in records {
        if let (Some(year), Some(month)) = (record.year(), record.month()) {
            *counts.entry((year, month)).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .map(|((year, month), count)| MonthlyPoint {
            year,
            month,
            label: format!("{}-{}", &MONTH_NAMES[(month - 1) as usize][..3], year),
            count,
        })
        .collect()
}

/// Groups records by calendar date, ascending.
///
/// Rows with unparseable dates are dropped.
pub fn daily_timeline(records: &[MessageRecord]) -> Vec<DailyPoint> {
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();

    for record in records {
        if let Some(date) = record.date() {
            *counts.entry(date).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .map(|(date, count)| DailyPoint { date, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Participant;

    fn rec(y: i32, mo: u32, d: u32) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        MessageRecord::new(Participant::member("Alice"), "hi").with_timestamp(ts)
    }

    fn undated() -> MessageRecord {
        MessageRecord::new(Participant::member("Alice"), "hi")
    }

    #[test]
    fn test_monthly_timeline_sorted_and_labeled() {
        let records = vec![
            rec(2024, 2, 10),
            rec(2023, 12, 1),
            rec(2024, 2, 11),
            rec(2024, 1, 5),
        ];
        let timeline = monthly_timeline(&records);

        let labels: Vec<&str> = timeline.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Dec-2023", "Jan-2024", "Feb-2024"]);
        assert_eq!(timeline[2].count, 2);
    }

    #[test]
    fn test_monthly_timeline_drops_undated() {
        let records = vec![rec(2024, 1, 1), undated()];
        let timeline = monthly_timeline(&records);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].count, 1);
    }

    #[test]
    fn test_daily_timeline_groups_same_date() {
        let records = vec![rec(2024, 1, 2), rec(2024, 1, 2), rec(2024, 1, 1)];
        let timeline = daily_timeline(&records);

        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(timeline[1].count, 2);
    }

    #[test]
    fn test_daily_timeline_drops_undated() {
        let records = vec![undated(), undated()];
        assert!(daily_timeline(&records).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(monthly_timeline(&[]).is_empty());
        assert!(daily_timeline(&[]).is_empty());
    }
}
