//! Full analysis report for one view of a transcript.
//!
//! [`analyze`] runs every aggregation over a filtered projection and bundles
//! the results into one serializable [`AnalysisReport`], mirroring what a
//! dashboard shows for one "analyze" pass: headline stats, participant
//! ranking, word/emoji rankings, both timelines, and the activity maps.

use serde::Serialize;

use crate::filter::{FilterConfig, apply_filter, member_records};
use crate::record::MessageRecord;
use crate::stats::{
    ActivityHeatmap, ChatStats, DailyPoint, MonthlyPoint, ParticipantRanking, activity_heatmap,
    basic_stats, daily_timeline, monthly_timeline, month_activity, top_emoji, top_participants,
    top_words, weekday_activity,
};
use crate::stopwords::Stopwords;

/// Sizes of the ranked result tables.
#[derive(Debug, Clone, Copy)]
pub struct RankingLimits {
    /// Most active participants to keep (default 5).
    pub participants: usize,
    /// Ranked words to keep (default 50).
    pub words: usize,
    /// Ranked emoji to keep (default 50).
    pub emoji: usize,
}

impl Default for RankingLimits {
    fn default() -> Self {
        Self {
            participants: 5,
            words: 50,
            emoji: 50,
        }
    }
}

impl RankingLimits {
    /// Creates limits with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the participant ranking size.
    #[must_use]
    pub fn with_participants(mut self, limit: usize) -> Self {
        self.participants = limit;
        self
    }

    /// Sets the word ranking size.
    #[must_use]
    pub fn with_words(mut self, limit: usize) -> Self {
        self.words = limit;
        self
    }

    /// Sets the emoji ranking size.
    #[must_use]
    pub fn with_emoji(mut self, limit: usize) -> Self {
        self.emoji = limit;
        self
    }
}

/// Every aggregate for one filtered view, ready for display or export.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// The selected participant, or `None` for the overall view.
    pub participant: Option<String>,
    /// Headline counts for the view.
    pub stats: ChatStats,
    /// Participant ranking over the whole chat (not the view): who is most
    /// active is a property of the conversation, not of one participant's
    /// projection.
    pub top_participants: ParticipantRanking,
    /// Ranked words in the view.
    pub top_words: Vec<(String, u64)>,
    /// Ranked emoji in the view.
    pub top_emoji: Vec<(String, u64)>,
    /// Monthly message counts, ascending.
    pub monthly_timeline: Vec<MonthlyPoint>,
    /// Daily message counts, ascending.
    pub daily_timeline: Vec<DailyPoint>,
    /// Fixed 7-entry weekday map, Monday..Sunday.
    pub weekday_activity: Vec<(&'static str, u64)>,
    /// Fixed 12-entry month map, January..December.
    pub month_activity: Vec<(&'static str, u64)>,
    /// Weekday × hour-bucket count matrix.
    pub heatmap: ActivityHeatmap,
}

/// Runs every aggregation for one view.
///
/// Group notices are dropped first (the standard pre-aggregation filter),
/// then `filter` projects the view. Total over any input: an empty
/// transcript or an unmatched participant filter yields a report of empty
/// and zero-filled tables.
pub fn analyze(
    records: &[MessageRecord],
    filter: &FilterConfig,
    stopwords: &Stopwords,
    limits: RankingLimits,
) -> AnalysisReport {
    let members = member_records(records);
    let view = apply_filter(&members, filter);

    AnalysisReport {
        participant: filter.participant.clone(),
        stats: basic_stats(&view),
        top_participants: top_participants(&members, limits.participants),
        top_words: top_words(&view, stopwords, limits.words),
        top_emoji: top_emoji(&view, limits.emoji),
        monthly_timeline: monthly_timeline(&view),
        daily_timeline: daily_timeline(&view),
        weekday_activity: weekday_activity(&view),
        month_activity: month_activity(&view),
        heatmap: activity_heatmap(&view),
    }
}
