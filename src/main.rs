//! # chatlens CLI
//!
//! Text dashboard over the chatlens library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatlens::ChatlensError;
use chatlens::cli::Args;
use chatlens::filter::{FilterConfig, member_records};
use chatlens::output::{write_records_csv, write_report_json};
use chatlens::parser::TranscriptParser;
use chatlens::report::{AnalysisReport, RankingLimits, analyze};
use chatlens::stopwords::Stopwords;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Print header
    println!("💬 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    if let Some(ref user) = args.user {
        println!("👤 User:    {}", user);
    }
    if let Some(ref after) = args.after {
        println!("📅 After:   {}", after);
    }
    if let Some(ref before) = args.before {
        println!("📅 Before:  {}", before);
    }
    println!();

    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let parser = TranscriptParser::new();
    let records = parser.parse_file(Path::new(&args.input))?;
    println!(
        "   Found {} messages ({:.2}s)",
        records.len(),
        parse_start.elapsed().as_secs_f64()
    );

    if records.is_empty() {
        println!();
        println!("⚠️  No valid messages found.");
        println!("   Expected format: 'DD/MM/YYYY, HH:MM AM/PM - Name: Message'");
        return Ok(());
    }

    let members = member_records(&records);
    if members.is_empty() {
        println!();
        println!("⚠️  All messages are group notifications. No user messages found.");
        return Ok(());
    }

    // Build filter configuration
    let mut filter = FilterConfig::new();
    if let Some(ref user) = args.user {
        filter = filter.with_participant(user.clone());
    }
    if let Some(ref after) = args.after {
        filter = filter.with_date_from(after)?;
    }
    if let Some(ref before) = args.before {
        filter = filter.with_date_to(before)?;
    }

    let stopwords = Stopwords::load(Path::new(&args.stopwords));
    let limits = RankingLimits::new()
        .with_words(args.top_words)
        .with_emoji(args.top_emoji);

    let report = analyze(&records, &filter, &stopwords, limits);

    if report.stats.messages == 0 {
        println!();
        match args.user {
            Some(ref user) => println!("⚠️  No messages found for {}.", user),
            None => println!("⚠️  No messages found in the selected date range."),
        }
        return Ok(());
    }

    print_report(&report);

    // Optional outputs
    if let Some(ref path) = args.report {
        write_report_json(&report, Path::new(path))?;
        println!();
        println!("💾 Report written to {}", path);
    }
    if let Some(ref path) = args.export {
        write_records_csv(&records, Path::new(path))?;
        println!("💾 Records exported to {}", path);
    }

    println!();
    println!("⚡ Done in {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// Prints the dashboard sections in display order.
fn print_report(report: &AnalysisReport) {
    println!();
    println!("📈 Statistics ({})", report.participant.as_deref().unwrap_or("Overall"));
    println!("   Messages: {}", report.stats.messages);
    println!("   Words:    {}", report.stats.words);
    println!("   Media:    {}", report.stats.media);
    println!("   URLs:     {}", report.stats.urls);

    if report.participant.is_none() {
        println!();
        println!("👥 Top participants");
        for (name, count) in &report.top_participants.top {
            let share = report
                .top_participants
                .shares
                .iter()
                .find(|s| &s.participant == name)
                .map_or(0.0, |s| s.percent);
            println!("   {:<24} {:>6}  {:>6.2}%", name, count, share);
        }
    }

    if !report.top_words.is_empty() {
        println!();
        println!("📚 Top words");
        for (word, count) in report.top_words.iter().take(20) {
            println!("   {:<24} {:>6}", word, count);
        }
    }

    if !report.top_emoji.is_empty() {
        println!();
        println!("😊 Top emoji");
        for (emoji, count) in report.top_emoji.iter().take(20) {
            println!("   {:<8} {:>6}", emoji, count);
        }
    }

    if !report.monthly_timeline.is_empty() {
        println!();
        println!("📅 Monthly timeline");
        for point in &report.monthly_timeline {
            println!("   {:<10} {:>6}", point.label, point.count);
        }
    }

    if let (Some(first), Some(last)) = (
        report.daily_timeline.first(),
        report.daily_timeline.last(),
    ) {
        println!();
        println!(
            "📆 Daily timeline: {} active days between {} and {}",
            report.daily_timeline.len(),
            first.date,
            last.date
        );
        if let Some(busiest) = report.daily_timeline.iter().max_by_key(|p| p.count) {
            println!("   Busiest day: {} ({} messages)", busiest.date, busiest.count);
        }
    }

    println!();
    println!("📊 Messages by weekday");
    for (day, count) in &report.weekday_activity {
        println!("   {:<10} {:>6}", day, count);
    }

    println!();
    println!("📊 Messages by month");
    for (month, count) in &report.month_activity {
        println!("   {:<10} {:>6}", month, count);
    }

    println!();
    println!("🔥 Activity heatmap (weekday × hour bucket)");
    let header: String = report
        .heatmap
        .buckets
        .iter()
        .map(|bucket| format!("{:>5}", &bucket[..2]))
        .collect();
    println!("   {:<10}{}", "", header);
    for (i, day) in report.heatmap.weekdays.iter().enumerate() {
        let row: String = report.heatmap.counts[i]
            .iter()
            .map(|count| format!("{:>5}", count))
            .collect();
        println!("   {:<10}{}", day, row);
    }
}
