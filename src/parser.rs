//! WhatsApp TXT transcript parser.
//!
//! Segments a raw transcript into [`MessageRecord`]s using the date-time
//! prefix as the sole boundary anchor:
//!
//! ```text
//! 1/2/2024, 10:30 AM - Alice: hello world
//! ```
//!
//! Everything between one anchor and the next is the message body, so
//! multi-line messages need no special handling. Exports in a different
//! locale format (day-month order swapped, 24-hour clock, other separators)
//! produce zero boundary matches and therefore an empty collection; callers
//! must treat an empty result as "unrecognized format", not "empty chat".

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::error::{ChatlensError, Result};
use crate::record::{MessageRecord, Participant};

/// Message boundary pattern: `D/M/YYYY, H:MM AM - ` with an optional narrow
/// no-break space (U+202F) before the meridiem, as newer exports emit.
///
/// Captures: (1) date, (2) time, (3) meridiem.
const BOUNDARY_PATTERN: &str =
    r"(\d{1,2}/\d{1,2}/\d{2,4}),\s*(\d{1,2}:\d{2})[\u{202F} ]?([AaPp][Mm])\s*-\s*";

/// Parser for WhatsApp TXT transcript exports.
///
/// # Example
///
/// ```rust
/// use chatlens::parser::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let records = parser.parse("1/2/2024, 10:30 AM - Alice: hello world");
/// assert_eq!(records.len(), 1);
/// ```
pub struct TranscriptParser {
    boundary: Regex,
}

impl TranscriptParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self {
            boundary: Regex::new(BOUNDARY_PATTERN).expect("boundary pattern is valid"),
        }
    }

    /// Parses a raw transcript string into records, in transcript order.
    ///
    /// Records are never reordered, deduplicated, or dropped: a timestamp
    /// that fails to parse leaves `timestamp` unset on an otherwise intact
    /// record. Text before the first boundary match is ignored. A transcript
    /// with zero boundary matches yields an empty collection.
    pub fn parse(&self, raw: &str) -> Vec<MessageRecord> {
        let boundaries: Vec<regex::Captures<'_>> = self.boundary.captures_iter(raw).collect();
        let mut records = Vec::with_capacity(boundaries.len());

        for (i, caps) in boundaries.iter().enumerate() {
            let anchor_end = caps.get(0).map_or(raw.len(), |m| m.end());
            let body_end = boundaries
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(raw.len(), |m| m.start());

            // The newline before the next anchor belongs to the segmentation,
            // not the message.
            let body = raw[anchor_end..body_end].trim_end_matches(['\n', '\r']);

            let date_str = caps.get(1).map_or("", |m| m.as_str());
            let time_str = caps.get(2).map_or("", |m| m.as_str());
            let meridiem = caps.get(3).map_or("", |m| m.as_str());

            let (participant, text) = split_participant(body);
            let mut record = MessageRecord::new(participant, text);
            if let Some(ts) = parse_timestamp(date_str, time_str, meridiem) {
                record = record.with_timestamp(ts);
            }
            records.push(record);
        }

        records
    }

    /// Reads and parses a transcript file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    /// An unrecognized transcript format is NOT an error; it parses to an
    /// empty collection.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)
            .map_err(|e| ChatlensError::utf8(e, Some(path.to_path_buf())))?;
        Ok(self.parse(&content))
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a transcript string with a default parser.
pub fn parse_transcript(raw: &str) -> Vec<MessageRecord> {
    TranscriptParser::new().parse(raw)
}

/// Parse a timestamp from its captured date, time, and meridiem parts.
///
/// Reassembling from the captures normalizes away the narrow no-break space
/// and locale whitespace; the meridiem is canonicalized to upper case.
/// Two-digit years go through `%y`, four-digit through `%Y`.
fn parse_timestamp(date_str: &str, time_str: &str, meridiem: &str) -> Option<NaiveDateTime> {
    let canonical = format!("{date_str}, {time_str} {}", meridiem.to_ascii_uppercase());

    let year_digits = date_str.rsplit('/').next().map_or(0, str::len);
    let parse_format = if year_digits <= 2 {
        "%d/%m/%y, %I:%M %p"
    } else {
        "%d/%m/%Y, %I:%M %p"
    };

    NaiveDateTime::parse_from_str(&canonical, parse_format).ok()
}

/// Split a message body into participant and text.
///
/// The split point is the rightmost `": "` that leaves both a non-empty name
/// and a non-empty remainder; without one the whole body is a group notice.
///
/// This heuristic is inherently ambiguous when the message text itself
/// contains `": "`: `"Alice: note: remember"` splits into participant
/// `"Alice: note"` and text `"remember"`. Names containing colons are
/// handled correctly as a consequence; bodies containing colon-space are
/// mis-split. Known limitation, not special-cased further.
fn split_participant(body: &str) -> (Participant, &str) {
    for (idx, _) in body.rmatch_indices(": ") {
        if idx > 0 && idx + 2 < body.len() {
            return (Participant::member(&body[..idx]), &body[idx + 2..]);
        }
    }
    (Participant::GroupNotice, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_single_line() {
        let records = parse_transcript("1/2/2024, 10:30 AM - Alice: hello world");
        assert_eq!(records.len(), 1);

        let rec = &records[0];
        assert_eq!(rec.participant().name(), Some("Alice"));
        assert_eq!(rec.body(), "hello world");
        // 1/2/2024 is day/month: Feb 1 2024, a Thursday
        assert_eq!(rec.date(), NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(rec.weekday_name(), Some("Thursday"));
        assert_eq!(rec.hour_bucket().as_deref(), Some("10-11"));
    }

    #[test]
    fn test_order_preserved() {
        let raw = "1/2/2024, 10:30 AM - Alice: first\n\
                   1/2/2024, 10:31 AM - Bob: second\n\
                   1/2/2024, 10:32 AM - Alice: third\n";
        let records = parse_transcript(raw);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].body(), "first");
        assert_eq!(records[1].body(), "second");
        assert_eq!(records[2].body(), "third");
    }

    #[test]
    fn test_multiline_body() {
        let raw = "1/2/2024, 10:30 AM - Alice: first line\nsecond line\nthird\n\
                   1/2/2024, 10:31 AM - Bob: ok";
        let records = parse_transcript(raw);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].body(), "first line\nsecond line\nthird");
        assert_eq!(records[1].body(), "ok");
    }

    #[test]
    fn test_group_notice() {
        let records =
            parse_transcript("1/2/2024, 10:30 AM - Messages to this group are now secured");
        assert_eq!(records.len(), 1);
        assert!(records[0].participant().is_group_notice());
        assert_eq!(records[0].body(), "Messages to this group are now secured");
    }

    #[test]
    fn test_narrow_nbsp_and_lowercase_meridiem() {
        let records = parse_transcript("1/2/2024, 10:30\u{202f}pm - Alice: hi");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].hour(), Some(22));
        assert_eq!(records[0].hour_bucket().as_deref(), Some("22-23"));
    }

    #[test]
    fn test_two_digit_year() {
        let records = parse_transcript("1/2/24, 10:30 AM - Alice: hi");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year(), Some(2024));
    }

    #[test]
    fn test_unparseable_timestamp_keeps_record() {
        // Feb 31 does not exist; the record survives with no timestamp
        let records = parse_transcript("31/2/2024, 10:30 AM - Alice: hi");
        assert_eq!(records.len(), 1);
        assert!(records[0].timestamp().is_none());
        assert!(records[0].date().is_none());
        assert_eq!(records[0].participant().name(), Some("Alice"));
        assert_eq!(records[0].body(), "hi");
    }

    #[test]
    fn test_unrecognized_format_yields_empty() {
        // 24-hour clock without meridiem never matches the boundary
        let records = parse_transcript("2024-02-01 22:30 Alice: hello\nmore text");
        assert!(records.is_empty());
    }

    #[test]
    fn test_preamble_ignored() {
        let raw = "export header line\n1/2/2024, 10:30 AM - Alice: hi";
        let records = parse_transcript(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].body(), "hi");
    }

    #[test]
    fn test_midnight_and_noon() {
        let raw = "1/2/2024, 12:05 AM - Alice: midnight\n\
                   1/2/2024, 12:05 PM - Alice: noon";
        let records = parse_transcript(raw);
        assert_eq!(records[0].timestamp().unwrap().hour(), 0);
        assert_eq!(records[0].hour_bucket().as_deref(), Some("00-01"));
        assert_eq!(records[1].timestamp().unwrap().hour(), 12);
        assert_eq!(records[1].hour_bucket().as_deref(), Some("12-13"));
    }

    #[test]
    fn test_split_rightmost_colon_space() {
        let (p, text) = split_participant("Alice: note: remember");
        assert_eq!(p.name(), Some("Alice: note"));
        assert_eq!(text, "remember");
    }

    #[test]
    fn test_split_no_prefix() {
        let (p, text) = split_participant("changed the subject");
        assert!(p.is_group_notice());
        assert_eq!(text, "changed the subject");
    }

    #[test]
    fn test_split_empty_remainder_is_notice() {
        let (p, _) = split_participant("Alice: ");
        assert!(p.is_group_notice());
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("15/1/2024", "10:30", "AM").is_some());
        assert!(parse_timestamp("15/1/24", "10:30", "pm").is_some());
        assert!(parse_timestamp("15/13/2024", "10:30", "AM").is_none());
        assert!(parse_timestamp("", "", "").is_none());
    }

    #[test]
    fn test_media_placeholder_body() {
        let records = parse_transcript("1/2/2024, 10:30 AM - Alice: <Media omitted>\n");
        assert_eq!(records.len(), 1);
        assert!(records[0].is_media());
    }
}
