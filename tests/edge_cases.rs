//! Edge case tests for chatlens
//!
//! These tests cover boundary conditions that might not be covered by
//! regular unit and integration tests: unicode participants, locale
//! whitespace variants, midnight wraparound, ambiguous name splits, and
//! empty-shape guarantees.

use chatlens::prelude::*;

// =========================================================================
// Unicode and special character tests
// =========================================================================

#[test]
fn test_unicode_participants_and_bodies() {
    let raw = "1/2/2024, 10:30 AM - Иван: Привет мир!\n\
               1/2/2024, 10:31 AM - 田中太郎: こんにちは世界！\n\
               1/2/2024, 10:32 AM - محمد: مرحبا بالعالم\n";
    let records = parse_transcript(raw);

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].participant().name(), Some("Иван"));
    assert_eq!(records[0].body(), "Привет мир!");
    assert_eq!(records[1].participant().name(), Some("田中太郎"));
    assert_eq!(records[2].body(), "مرحبا بالعالم");
}

#[test]
fn test_emoji_in_participant_name() {
    let records = parse_transcript("1/2/2024, 10:30 AM - User 🎉: Hello 👋");
    assert_eq!(records[0].participant().name(), Some("User 🎉"));
    assert_eq!(records[0].body(), "Hello 👋");
}

#[test]
fn test_narrow_nbsp_before_meridiem() {
    // Newer exports insert U+202F between the minutes and the meridiem
    let records = parse_transcript("1/2/2024, 10:30\u{202f}AM - Alice: hi");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].hour(), Some(10));
}

#[test]
fn test_meridiem_case_variants() {
    for meridiem in ["AM", "am", "Am", "aM"] {
        let raw = format!("1/2/2024, 10:30 {meridiem} - Alice: hi");
        let records = parse_transcript(&raw);
        assert_eq!(records.len(), 1, "failed for {meridiem}");
        assert_eq!(records[0].hour(), Some(10));
    }
    let records = parse_transcript("1/2/2024, 10:30 pm - Alice: hi");
    assert_eq!(records[0].hour(), Some(22));
}

// =========================================================================
// Name/body split ambiguity
// =========================================================================

#[test]
fn test_name_containing_colon_space() {
    // The rightmost colon-space wins, so the name absorbs the earlier split
    let records = parse_transcript("1/2/2024, 10:30 AM - Dr: Who: allons-y");
    assert_eq!(records[0].participant().name(), Some("Dr: Who"));
    assert_eq!(records[0].body(), "allons-y");
}

#[test]
fn test_body_without_prefix_is_group_notice() {
    let records =
        parse_transcript("1/2/2024, 10:30 AM - Alice changed this group's icon");
    assert!(records[0].participant().is_group_notice());
}

#[test]
fn test_url_body_not_mistaken_for_prefix() {
    // "https://..." has no colon-space, so the whole body needs a real prefix
    let records = parse_transcript("1/2/2024, 10:30 AM - Alice: https://example.com");
    assert_eq!(records[0].participant().name(), Some("Alice"));
    assert!(records[0].starts_with_url());
}

// =========================================================================
// Midnight wraparound
// =========================================================================

#[test]
fn test_hour_buckets_at_midnight_boundaries() {
    let raw = "1/2/2024, 11:59 PM - Alice: last call\n\
               2/2/2024, 12:01 AM - Alice: past midnight";
    let records = parse_transcript(raw);

    assert_eq!(records[0].hour(), Some(23));
    assert_eq!(records[0].hour_bucket().as_deref(), Some("23-00"));
    assert_eq!(records[1].hour(), Some(0));
    assert_eq!(records[1].hour_bucket().as_deref(), Some("00-01"));

    let heatmap = activity_heatmap(&records);
    // Thursday row, last and first columns
    assert_eq!(heatmap.counts[3][23], 1);
    // Feb 2 2024 was a Friday
    assert_eq!(heatmap.counts[4][0], 1);
}

// =========================================================================
// Partial parse
// =========================================================================

#[test]
fn test_invalid_date_record_kept_but_dropped_from_timelines() {
    let raw = "31/2/2024, 10:30 AM - Alice: impossible date\n\
               1/2/2024, 10:31 AM - Alice: fine";
    let records = parse_transcript(raw);
    assert_eq!(records.len(), 2);
    assert!(records[0].timestamp().is_none());

    // Scalar stats still count the record
    assert_eq!(basic_stats(&records).messages, 2);

    // Date-keyed aggregations silently drop it
    assert_eq!(daily_timeline(&records).len(), 1);
    assert_eq!(monthly_timeline(&records).len(), 1);
    let weekday_sum: u64 = weekday_activity(&records).iter().map(|(_, c)| c).sum();
    assert_eq!(weekday_sum, 1);
}

// =========================================================================
// Empty-shape guarantees
// =========================================================================

#[test]
fn test_empty_transcript_shapes() {
    let records = parse_transcript("");
    assert!(records.is_empty());

    assert_eq!(basic_stats(&records), ChatStats::default());
    assert!(top_participants(&records, 5).top.is_empty());
    assert!(top_participants(&records, 5).shares.is_empty());
    assert!(top_words(&records, &Stopwords::empty(), 50).is_empty());
    assert!(top_emoji(&records, 50).is_empty());
    assert!(monthly_timeline(&records).is_empty());
    assert!(daily_timeline(&records).is_empty());
    assert_eq!(weekday_activity(&records).len(), 7);
    assert_eq!(month_activity(&records).len(), 12);

    let heatmap = activity_heatmap(&records);
    assert_eq!(heatmap.weekdays.len(), 7);
    assert_eq!(heatmap.buckets.len(), 24);
    assert!(heatmap.is_empty());
}

#[test]
fn test_whitespace_only_transcript() {
    assert!(parse_transcript("   \n\n\t  ").is_empty());
}

#[test]
fn test_filter_matching_nothing() {
    let records = parse_transcript("1/2/2024, 10:30 AM - Alice: hi");
    let config = FilterConfig::new().with_participant("Nobody");
    let view = apply_filter(&records, &config);

    assert!(view.is_empty());
    assert_eq!(basic_stats(&view), ChatStats::default());
    assert!(activity_heatmap(&view).is_empty());
}

// =========================================================================
// Ranking determinism
// =========================================================================

#[test]
fn test_word_tie_break_first_seen() {
    let records = parse_transcript("1/2/2024, 10:30 AM - Alice: zebra apple zebra apple");
    let ranked = top_words(&records, &Stopwords::empty(), 50);

    // Equal counts keep first-seen order: zebra appeared first
    assert_eq!(ranked[0].0, "zebra");
    assert_eq!(ranked[1].0, "apple");
}

#[test]
fn test_participant_percentages_with_thirds() {
    let raw = "1/2/2024, 10:30 AM - A: x\n\
               1/2/2024, 10:31 AM - B: x\n\
               1/2/2024, 10:32 AM - C: x\n";
    let ranking = top_participants(&parse_transcript(raw), 5);

    for share in &ranking.shares {
        assert!((share.percent - 33.33).abs() < 0.01);
    }
}

// =========================================================================
// Emoji code-point semantics
// =========================================================================

#[test]
fn test_composite_emoji_counts_component_code_points() {
    // The family ZWJ sequence decomposes into three counted emoji; the
    // zero-width joiner itself is not an emoji
    let records = parse_transcript("1/2/2024, 10:30 AM - Alice: 👨\u{200d}👩\u{200d}👧");
    let ranked = top_emoji(&records, 50);

    let total: u64 = ranked.iter().map(|(_, c)| c).sum();
    assert_eq!(total, 3);
    assert!(ranked.iter().any(|(e, _)| e == "👨"));
}

#[test]
fn test_repeated_emoji_in_one_message() {
    let records = parse_transcript("1/2/2024, 10:30 AM - Alice: 🔥🔥🔥");
    let ranked = top_emoji(&records, 50);
    assert_eq!(ranked, vec![("🔥".to_string(), 3)]);
}

// =========================================================================
// Very long content
// =========================================================================

#[test]
fn test_very_long_body() {
    let long_body = "x".repeat(100 * 1024);
    let raw = format!("1/2/2024, 10:30 AM - Alice: {long_body}");
    let records = parse_transcript(&raw);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].body().len(), 100 * 1024);
    assert_eq!(basic_stats(&records).words, 1);
}

#[test]
fn test_many_records() {
    let mut raw = String::new();
    for i in 0..1000 {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        raw.push_str(&format!(
            "{}/2/2024, 10:{:02} AM - {}: message number {}\n",
            (i % 28) + 1,
            i % 60,
            sender,
            i
        ));
    }
    let records = parse_transcript(&raw);

    assert_eq!(records.len(), 1000);
    assert_eq!(basic_stats(&records).messages, 1000);
    let dated = records.iter().filter(|r| r.date().is_some()).count() as u64;
    let weekday_sum: u64 = weekday_activity(&records).iter().map(|(_, c)| c).sum();
    assert_eq!(weekday_sum, dated);
}
