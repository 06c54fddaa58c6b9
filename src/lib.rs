//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat exports and computing
//! descriptive statistics, time-series timelines, and activity maps.
//!
//! ## Overview
//!
//! Chatlens has two parts, consumed in sequence:
//!
//! - **Parser** — converts a raw transcript string into an ordered
//!   collection of [`MessageRecord`]s with derived date/time fields.
//! - **Aggregator** — pure functions over the record collection, each
//!   producing one statistic or one time/category breakdown.
//!
//! Data flows one direction: raw text → parser → record collection →
//! aggregations (per view, filtered by participant) → tabular results.
//! The record collection is immutable after parsing and safe to aggregate
//! from concurrently; filtered views are fresh read-only projections.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let records = parse_transcript("1/2/2024, 10:30 AM - Alice: hello world");
//!
//! let stats = basic_stats(&records);
//! assert_eq!(stats.messages, 1);
//! assert_eq!(stats.words, 2);
//!
//! let heatmap = activity_heatmap(&records);
//! assert_eq!(heatmap.buckets.len(), 24);
//! ```
//!
//! ## One view per analysis
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! # fn main() -> chatlens::Result<()> {
//! let records = parse_transcript(
//!     "1/2/2024, 10:30 AM - Alice: hello\n1/2/2024, 10:31 AM - Bob: hi",
//! );
//!
//! let filter = FilterConfig::new().with_participant("Alice");
//! let report = analyze(&records, &filter, &Stopwords::empty(), RankingLimits::default());
//! assert_eq!(report.stats.messages, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — transcript segmentation and timestamp parsing
//!   - [`TranscriptParser`](parser::TranscriptParser), [`parse_transcript`](parser::parse_transcript)
//! - [`record`] — [`MessageRecord`], [`Participant`](record::Participant), hour-bucket labels
//! - [`filter`] — [`FilterConfig`](filter::FilterConfig), [`apply_filter`](filter::apply_filter)
//! - [`stats`] — the aggregation functions
//! - [`stopwords`] — optional stopword list ([`Stopwords`](stopwords::Stopwords))
//! - [`report`] — [`analyze`](report::analyze), [`AnalysisReport`](report::AnalysisReport)
//! - [`output`] — JSON report and CSV record writers
//! - [`cli`] — CLI argument types (feature `cli`)
//! - [`error`] — unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod filter;
pub mod output;
pub mod parser;
pub mod record;
pub mod report;
pub mod stats;
pub mod stopwords;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use record::MessageRecord;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core record types
    pub use crate::record::{
        DELETED_MESSAGE, MEDIA_PLACEHOLDER, MessageRecord, Participant, hour_bucket_label,
    };

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::{TranscriptParser, parse_transcript};

    // Filtering
    pub use crate::filter::{FilterConfig, apply_filter, member_records};

    // Stopwords
    pub use crate::stopwords::Stopwords;

    // Aggregations
    pub use crate::stats::{
        ActivityHeatmap, ChatStats, DailyPoint, MonthlyPoint, ParticipantRanking,
        ParticipantShare, activity_heatmap, basic_stats, daily_timeline, month_activity,
        monthly_timeline, participants, top_emoji, top_participants, top_words,
        weekday_activity, wordcloud_corpus,
    };

    // Reports
    pub use crate::report::{AnalysisReport, RankingLimits, analyze};

    // Output writers
    pub use crate::output::{report_to_json, write_records_csv, write_report_json};
}
