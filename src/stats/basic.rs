//! Scalar chat statistics.

use serde::{Deserialize, Serialize};

use crate::record::MessageRecord;

/// Headline counts for a record collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatStats {
    /// Total number of messages.
    pub messages: u64,
    /// Total whitespace-separated words across all bodies.
    pub words: u64,
    /// Bodies equal to the media-attachment placeholder.
    pub media: u64,
    /// Bodies starting with `http://` or `https://`.
    ///
    /// Prefix match only; messages merely containing a URL are not counted.
    pub urls: u64,
}

/// Computes [`ChatStats`] for a record collection.
///
/// Total over any input; an empty collection yields all-zero stats.
///
/// # Example
///
/// ```
/// use chatlens::record::{MessageRecord, Participant};
/// use chatlens::stats::basic_stats;
///
/// let records = vec![
///     MessageRecord::new(Participant::member("Alice"), "hello world"),
///     MessageRecord::new(Participant::member("Bob"), "https://example.com"),
/// ];
/// let stats = basic_stats(&records);
/// assert_eq!(stats.messages, 2);
/// assert_eq!(stats.words, 3);
/// assert_eq!(stats.urls, 1);
/// ```
pub fn basic_stats(records: &[MessageRecord]) -> ChatStats {
    let mut stats = ChatStats {
        messages: records.len() as u64,
        ..ChatStats::default()
    };

    for record in records {
        stats.words += record.body().split_whitespace().count() as u64;
        if record.is_media() {
            stats.media += 1;
        }
        if record.starts_with_url() {
            stats.urls += 1;
        }
    }

    stats
}
