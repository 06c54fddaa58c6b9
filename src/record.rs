//! Parsed transcript records.
//!
//! This module provides [`MessageRecord`], the structured representation of
//! one transcript entry, and [`Participant`], which distinguishes member
//! messages from group notices (system/service lines with no sender prefix).
//!
//! # Overview
//!
//! A record consists of:
//! - **Required**: `participant` and `body`
//! - **Optional**: `timestamp` (absent when the raw timestamp failed to parse)
//!
//! All date/time fields (`date`, `year`, `weekday_name`, `hour_bucket`, ...)
//! are derived from the timestamp on access and return `None` for records
//! without one. Records with no timestamp are still valid members of the
//! collection; they simply drop out of date-keyed aggregations.
//!
//! # Examples
//!
//! ```
//! use chatlens::record::{MessageRecord, Participant};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 30, 0)
//!     .unwrap();
//! let rec = MessageRecord::new(Participant::member("Alice"), "hello world")
//!     .with_timestamp(ts);
//!
//! assert_eq!(rec.participant().name(), Some("Alice"));
//! assert_eq!(rec.weekday_name(), Some("Thursday"));
//! assert_eq!(rec.hour_bucket().as_deref(), Some("10-11"));
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Body text WhatsApp substitutes for an omitted media attachment.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Body text WhatsApp substitutes for a deleted message.
pub const DELETED_MESSAGE: &str = "This message was deleted";

/// Display label for [`Participant::GroupNotice`].
pub const GROUP_NOTICE_LABEL: &str = "Group notice";

/// Weekday names in the fixed Monday-first order used by activity maps.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Month names in calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the hour-bucket label for an hour of day (0-23).
///
/// Labels are one-hour windows like `"14-15"`, with wraparound specials at
/// the midnight boundaries: hour 23 maps to `"23-00"` and hour 0 to
/// `"00-01"`. The result is always one of 24 well-formed strings.
pub fn hour_bucket_label(hour: u32) -> String {
    match hour {
        23 => "23-00".to_string(),
        0 => "00-01".to_string(),
        h => format!("{:02}-{:02}", h, h + 1),
    }
}

/// The author classification of a record.
///
/// Every record has exactly one classification: either a named chat
/// [`Member`](Participant::Member) or the [`GroupNotice`](Participant::GroupNotice)
/// sentinel for transcript lines with no `"Name: "` prefix (encryption
/// notices, subject changes, joins/leaves).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Participant {
    /// A named chat member.
    Member(String),
    /// A system/service line with no sender.
    GroupNotice,
}

impl Participant {
    /// Creates a member participant.
    pub fn member(name: impl Into<String>) -> Self {
        Participant::Member(name.into())
    }

    /// Returns the member name, or `None` for a group notice.
    pub fn name(&self) -> Option<&str> {
        match self {
            Participant::Member(name) => Some(name),
            Participant::GroupNotice => None,
        }
    }

    /// Returns `true` for the group-notice sentinel.
    pub fn is_group_notice(&self) -> bool {
        matches!(self, Participant::GroupNotice)
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Participant::Member(name) => write!(f, "{name}"),
            Participant::GroupNotice => write!(f, "{GROUP_NOTICE_LABEL}"),
        }
    }
}

impl Serialize for Participant {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Participant {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s == GROUP_NOTICE_LABEL {
            Ok(Participant::GroupNotice)
        } else {
            Ok(Participant::Member(s))
        }
    }
}

/// One parsed transcript entry.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `Option<NaiveDateTime>` | When the message was sent (local wall clock) |
/// | `participant` | [`Participant`] | Member name or group-notice sentinel |
/// | `body` | `String` | Message text; may be empty or a placeholder |
///
/// Transcripts carry no timezone, so timestamps are naive local times.
///
/// # Construction
///
/// ```
/// use chatlens::record::{MessageRecord, Participant};
///
/// let rec = MessageRecord::new(Participant::member("Alice"), "Hello!");
/// assert!(rec.timestamp().is_none());
/// assert!(rec.date().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// When the message was sent, if the raw timestamp parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,

    /// Member name or the group-notice sentinel.
    pub participant: Participant,

    /// Message text.
    ///
    /// May contain newlines for multiline messages, or a placeholder like
    /// [`MEDIA_PLACEHOLDER`].
    pub body: String,
}

impl MessageRecord {
    /// Creates a record with no timestamp.
    pub fn new(participant: Participant, body: impl Into<String>) -> Self {
        Self {
            timestamp: None,
            participant,
            body: body.into(),
        }
    }

    /// Builder method to set the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: NaiveDateTime) -> Self {
        self.timestamp = Some(ts);
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the timestamp, if available.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    /// Returns the participant classification.
    pub fn participant(&self) -> &Participant {
        &self.participant
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    // =========================================================================
    // Derived date/time fields
    // =========================================================================

    /// Calendar date of the message.
    pub fn date(&self) -> Option<NaiveDate> {
        self.timestamp.map(|ts| ts.date())
    }

    /// Four-digit year.
    pub fn year(&self) -> Option<i32> {
        self.timestamp.map(|ts| ts.year())
    }

    /// Month number, 1-12.
    pub fn month(&self) -> Option<u32> {
        self.timestamp.map(|ts| ts.month())
    }

    /// Full month name ("January".."December").
    pub fn month_name(&self) -> Option<&'static str> {
        self.timestamp
            .map(|ts| MONTH_NAMES[ts.month0() as usize])
    }

    /// Day of month, 1-31.
    pub fn day(&self) -> Option<u32> {
        self.timestamp.map(|ts| ts.day())
    }

    /// Weekday name ("Monday".."Sunday").
    pub fn weekday_name(&self) -> Option<&'static str> {
        self.timestamp
            .map(|ts| WEEKDAY_NAMES[ts.weekday().num_days_from_monday() as usize])
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> Option<u32> {
        self.timestamp.map(|ts| ts.hour())
    }

    /// Minute, 0-59.
    pub fn minute(&self) -> Option<u32> {
        self.timestamp.map(|ts| ts.minute())
    }

    /// Hour-bucket label, e.g. `"14-15"`; see [`hour_bucket_label`].
    pub fn hour_bucket(&self) -> Option<String> {
        self.hour().map(hour_bucket_label)
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `true` if the body is the media-attachment placeholder.
    pub fn is_media(&self) -> bool {
        self.body == MEDIA_PLACEHOLDER
    }

    /// Returns `true` if the body is the deletion notice.
    pub fn is_deleted(&self) -> bool {
        self.body == DELETED_MESSAGE
    }

    /// Returns `true` if the body starts with an HTTP(S) URL.
    ///
    /// Prefix match only; a URL in the middle of a message does not count.
    pub fn starts_with_url(&self) -> bool {
        self.body.starts_with("http://") || self.body.starts_with("https://")
    }

    /// Returns `true` if the body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}
