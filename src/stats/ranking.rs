//! Ranked frequency mappings: participants, words, emoji.
//!
//! All rankings sort by descending count with a deterministic tie-break:
//! entries with equal counts keep the order in which they were first seen
//! in the collection. Output order is load-bearing for display and tests,
//! so the sort is an explicitly stable one over first-seen insertion order.

use std::collections::HashMap;

use serde::Serialize;

use crate::record::MessageRecord;
use crate::stopwords::Stopwords;

/// Punctuation stripped from both ends of each word token.
const SURROUNDING_PUNCT: &[char] = &[
    '.', ',', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'',
];

/// One participant's share of the total message count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantShare {
    /// Participant display name.
    pub participant: String,
    /// Share of all messages, in percent, rounded to 2 decimals.
    pub percent: f64,
}

/// Ranked participant activity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParticipantRanking {
    /// The most active participants, limited to the requested size.
    pub top: Vec<(String, u64)>,
    /// Percentage share per participant, over ALL participants, summing to
    /// ~100 (rounding aside).
    pub shares: Vec<ParticipantShare>,
}

/// Counts items preserving first-seen order, then ranks by descending count.
///
/// `sort_by` is stable, so equal counts keep their first-seen order.
fn ranked_counts<I>(items: I) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counted: Vec<(String, u64)> = Vec::new();

    for item in items {
        match index.get(&item) {
            Some(&i) => counted[i].1 += 1,
            None => {
                index.insert(item.clone(), counted.len());
                counted.push((item, 1));
            }
        }
    }

    counted.sort_by(|a, b| b.1.cmp(&a.1));
    counted
}

/// Ranks participants by message count.
///
/// Returns the `limit` most active participants plus the full percentage
/// share table. Group notices count under their sentinel label if present;
/// callers wanting user-facing output filter them out first (see
/// [`member_records`](crate::filter::member_records)).
pub fn top_participants(records: &[MessageRecord], limit: usize) -> ParticipantRanking {
    let ranked = ranked_counts(records.iter().map(|r| r.participant().to_string()));

    let total = records.len();
    let shares = if total == 0 {
        Vec::new()
    } else {
        ranked
            .iter()
            .map(|(participant, count)| ParticipantShare {
                participant: participant.clone(),
                percent: (*count as f64 / total as f64 * 10_000.0).round() / 100.0,
            })
            .collect()
    };

    let mut top = ranked;
    top.truncate(limit);

    ParticipantRanking { top, shares }
}

/// Ranks words by frequency.
///
/// Skips group notices, media placeholders, and deletion notices. Bodies
/// are split on whitespace; each token is lowercased and stripped of
/// surrounding punctuation (`. , ! ? ( ) [ ] { } " '`). Empty tokens and
/// stopwords are dropped.
///
/// # Example
///
/// ```
/// use chatlens::record::{MessageRecord, Participant};
/// use chatlens::stats::top_words;
/// use chatlens::stopwords::Stopwords;
///
/// let records = vec![MessageRecord::new(Participant::member("A"), "Hi! hi HI.")];
/// let ranked = top_words(&records, &Stopwords::empty(), 50);
/// assert_eq!(ranked, vec![("hi".to_string(), 3)]);
/// ```
pub fn top_words(records: &[MessageRecord], stopwords: &Stopwords, limit: usize) -> Vec<(String, u64)> {
    let tokens = records
        .iter()
        .filter(|r| !r.participant().is_group_notice() && !r.is_media() && !r.is_deleted())
        .flat_map(|r| r.body().split_whitespace())
        .filter_map(|token| {
            let cleaned = token.to_lowercase();
            let cleaned = cleaned.trim_matches(SURROUNDING_PUNCT);
            if cleaned.is_empty() || stopwords.contains(cleaned) {
                None
            } else {
                Some(cleaned.to_string())
            }
        });

    let mut ranked = ranked_counts(tokens);
    ranked.truncate(limit);
    ranked
}

/// Ranks emoji by occurrence count.
///
/// Each body is scanned character by character against the standard emoji
/// table; every occurrence counts, including repeats within one message.
/// Composite sequences (skin-tone modifiers, ZWJ families) count as their
/// individual code points rather than as one emoji, matching per-code-point
/// membership semantics.
pub fn top_emoji(records: &[MessageRecord], limit: usize) -> Vec<(String, u64)> {
    let mut buf = [0u8; 4];
    let found = records
        .iter()
        .flat_map(|r| r.body().chars())
        .filter_map(|ch| {
            let s: &str = ch.encode_utf8(&mut buf);
            emojis::get(s).map(|e| e.as_str().to_string())
        })
        .collect::<Vec<_>>();

    let mut ranked = ranked_counts(found);
    ranked.truncate(limit);
    ranked
}

/// Sorted unique member names, for view selection.
///
/// Group notices are not participants and never appear here.
pub fn participants(records: &[MessageRecord]) -> Vec<String> {
    let mut names: Vec<String> = records
        .iter()
        .filter_map(|r| r.participant().name().map(str::to_string))
        .collect();
    names.sort();
    names.dedup();
    names
}

/// The cleaned body text stream consumed by word-cloud renderers.
///
/// Media placeholders are removed; everything else is joined with single
/// spaces, pre-tokenization. Rendering itself is a collaborator concern.
pub fn wordcloud_corpus(records: &[MessageRecord]) -> String {
    records
        .iter()
        .filter(|r| !r.is_media())
        .map(MessageRecord::body)
        .collect::<Vec<_>>()
        .join(" ")
}
