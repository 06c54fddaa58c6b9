//! Filter records by participant and date range.
//!
//! A filtered view is a read-only projection: the base collection is never
//! mutated, and each aggregation runs over whichever projection the caller
//! selects. Filters combine with AND logic.
//!
//! # Examples
//!
//! ```
//! use chatlens::filter::{FilterConfig, apply_filter};
//! use chatlens::record::{MessageRecord, Participant};
//!
//! let records = vec![
//!     MessageRecord::new(Participant::member("Alice"), "Hello"),
//!     MessageRecord::new(Participant::member("Bob"), "Hi there"),
//!     MessageRecord::new(Participant::member("Alice"), "How are you?"),
//! ];
//!
//! // Case-insensitive participant matching
//! let config = FilterConfig::new().with_participant("alice");
//! let view = apply_filter(&records, &config);
//! assert_eq!(view.len(), 2);
//! ```
//!
//! # Behavior Notes
//!
//! - Records without timestamps are **excluded** when date filters are active
//! - Participant matching is case-insensitive for ASCII characters
//! - Group notices never match a participant filter

use chrono::NaiveDate;

use crate::error::{ChatlensError, Result};
use crate::record::{MessageRecord, Participant};

/// Configuration for filtering a record collection.
///
/// ```
/// use chatlens::filter::FilterConfig;
///
/// # fn main() -> chatlens::Result<()> {
/// let config = FilterConfig::new()
///     .with_participant("Alice")
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages from this participant (case-insensitive).
    pub participant: Option<String>,

    /// Include only messages on or after this date.
    pub after: Option<NaiveDate>,

    /// Include only messages on or before this date.
    pub before: Option<NaiveDate>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the participant filter.
    ///
    /// Matching is case-insensitive for ASCII characters. Group notices
    /// never match.
    #[must_use]
    pub fn with_participant(mut self, participant: impl Into<String>) -> Self {
        self.participant = Some(participant.into());
        self
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.before = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.participant.is_some() || self.has_date_filter()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    fn matches(&self, record: &MessageRecord) -> bool {
        if let Some(ref wanted) = self.participant {
            match record.participant() {
                Participant::Member(name) => {
                    if !name.eq_ignore_ascii_case(wanted) {
                        return false;
                    }
                }
                Participant::GroupNotice => return false,
            }
        }

        if self.has_date_filter() {
            match record.date() {
                Some(date) => {
                    if self.after.is_some_and(|after| date < after) {
                        return false;
                    }
                    if self.before.is_some_and(|before| date > before) {
                        return false;
                    }
                }
                // No timestamp - exclude from date-filtered views
                None => return false,
            }
        }

        true
    }
}

fn parse_filter_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Projects a record collection through a filter.
///
/// Returns a fresh vector of matching records; the input is untouched. With
/// no active filters the projection is a plain copy of the collection.
pub fn apply_filter(records: &[MessageRecord], config: &FilterConfig) -> Vec<MessageRecord> {
    records
        .iter()
        .filter(|record| config.matches(record))
        .cloned()
        .collect()
}

/// The standard pre-aggregation filter: drops group notices.
///
/// User-facing statistics run over member messages only; group notices are
/// parsed and kept in the base collection but excluded from every view.
pub fn member_records(records: &[MessageRecord]) -> Vec<MessageRecord> {
    records
        .iter()
        .filter(|record| !record.participant().is_group_notice())
        .cloned()
        .collect()
}
